use anyhow::Result;
use qa_board::utils::{init_log_file, init_tracing};
use qa_board::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_log_file(&config.output_log_file)?;
    init_tracing(config.verbose_logging, &config.output_log_file)?;

    // 初始化并运行应用
    let mut app = App::initialize(config)?;
    app.run().await?;

    Ok(())
}

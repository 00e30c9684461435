/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// # 参数
/// - `verbose`: 是否输出 debug 级别日志
/// - `log_file_path`: 日志文件路径，为空时写到 stderr
///
/// `RUST_LOG` 环境变量优先于 `verbose`
pub fn init_tracing(verbose: bool, log_file_path: &str) -> Result<()> {
    // 已经有全局 subscriber（例如测试中重复初始化）时保留原来的
    if tracing::dispatcher::has_been_set() {
        debug!("日志已初始化，跳过");
        return Ok(());
    }

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = if log_file_path.is_empty() {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)
            .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("初始化日志失败: {}", e))
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    if log_file_path.is_empty() {
        return Ok(());
    }
    let log_header = format!(
        "{}\n问答板运行日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `backend`: 存储后端描述
/// - `question_count`: 启动时已有的问题数量
pub fn log_startup(backend: &str, question_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 问答板启动");
    info!("💾 存储后端: {}", backend);
    info!("📋 已有问题: {} 个", question_count);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

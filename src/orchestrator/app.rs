//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：根据配置选择存储后端，创建控制器并渲染初始面板
//! 2. **事件循环**：逐行读取终端命令，转成控制器事件
//! 3. **输出面板**：每个事件之后把受影响的面板写回终端
//!
//! 不做任何业务判断，只做调度

use crate::config::{Config, StorageBackend};
use crate::infrastructure::{open_store, KeyValueStore};
use crate::models::Submission;
use crate::orchestrator::command::{Command, HELP};
use crate::services::{BoardRepository, IdGenerator};
use crate::utils::log_startup;
use crate::view::{BoardController, ClickOutcome, TextRenderer};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info};

/// 事件循环是否继续
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// 应用主结构
pub struct App {
    controller: BoardController<Box<dyn KeyValueStore>, TextRenderer>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let store = open_store(&config)
            .with_context(|| format!("无法打开存储: {:?}", config.storage_backend))?;

        let ids = match config.id_seed {
            Some(seed) => IdGenerator::seeded(seed),
            None => IdGenerator::new(),
        };

        let mut controller = BoardController::new(BoardRepository::new(store), TextRenderer, ids);
        controller.init().context("初始化面板失败")?;

        let backend = match config.storage_backend {
            StorageBackend::Memory => "memory".to_string(),
            StorageBackend::File => format!("file ({})", config.storage_path),
        };
        log_startup(&backend, controller.list_items().len());

        Ok(Self { controller })
    }

    /// 从标准输入读取命令，直到 `quit` 或输入结束
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// 从任意输入读取命令，面板写到 `writer`
    pub async fn run_with<Rd, W>(&mut self, reader: Rd, mut writer: W) -> Result<()>
    where
        Rd: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.write_panels(&mut writer).await?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("读取输入失败")? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    write_line(&mut writer, &format!("✗ {:#}", e)).await?;
                    continue;
                }
            };

            match self.dispatch(command, &mut writer).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    error!("❌ 命令执行失败: {:#}", e);
                    write_line(&mut writer, &format!("✗ {:#}", e)).await?;
                }
            }
        }

        info!("👋 问答板退出");
        writer.flush().await?;
        Ok(())
    }

    async fn dispatch<W: AsyncWrite + Unpin>(&mut self, command: Command, writer: &mut W) -> Result<Flow> {
        match command {
            Command::List => self.write_panels(writer).await?,
            Command::Search(term) => {
                self.controller.search_input(&term)?;
                self.write_panels(writer).await?;
            }
            Command::Open(id) => match self.controller.click_question(id)? {
                ClickOutcome::Shown => write_block(writer, self.controller.right_pane()).await?,
                ClickOutcome::NotListed => {
                    write_line(writer, &format!("✗ 问题 #{} 不在当前列表中", id)).await?;
                }
                ClickOutcome::Missing => {
                    write_line(writer, &format!("✗ 问题 #{} 已不存在", id)).await?;
                    self.write_panels(writer).await?;
                }
            },
            Command::New => {
                self.controller.new_question();
                write_block(writer, self.controller.right_pane()).await?;
            }
            Command::Ask { subject, question } => {
                if !self.controller.set_question_fields(subject, question) {
                    write_line(writer, "✗ 请先点击新问题").await?;
                    return Ok(Flow::Continue);
                }
                match self.controller.submit_question()? {
                    Some(Submission::Accepted(q)) => {
                        write_line(writer, &format!("✓ 已发布问题 #{}", q.id)).await?;
                        write_block(writer, self.controller.left_pane()).await?;
                    }
                    Some(Submission::Rejected(reason)) => {
                        write_line(writer, &format!("✗ 未发布: {}", reason)).await?;
                    }
                    None => write_line(writer, "✗ 请先点击新问题").await?,
                }
            }
            Command::Reply { name, response } => {
                if !self.controller.set_response_fields(name, response) {
                    write_line(writer, "✗ 请先打开一个问题").await?;
                    return Ok(Flow::Continue);
                }
                match self.controller.submit_response()? {
                    Some(Submission::Accepted(_)) => {
                        write_block(writer, self.controller.right_pane()).await?;
                    }
                    Some(Submission::Rejected(reason)) => {
                        write_line(writer, &format!("✗ 未回答: {}", reason)).await?;
                    }
                    None => write_line(writer, "✗ 请先打开一个问题").await?,
                }
            }
            Command::Resolve => match self.controller.resolve()? {
                Some(summary) => {
                    write_line(
                        writer,
                        &format!("✓ 问题已解决，删除回答 {} 条", summary.responses_removed),
                    )
                    .await?;
                    self.write_panels(writer).await?;
                }
                None => write_line(writer, "✗ 请先打开一个问题").await?,
            },
            Command::Help => write_block(writer, HELP).await?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    async fn write_panels<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<()> {
        write_block(writer, self.controller.left_pane()).await?;
        write_block(writer, self.controller.right_pane()).await?;
        Ok(())
    }
}

async fn write_block<W: AsyncWrite + Unpin>(writer: &mut W, block: &str) -> Result<()> {
    writer.write_all(block.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

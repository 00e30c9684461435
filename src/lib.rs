//! # QA Board
//!
//! 一个本地问答板：发布问题、浏览和搜索问题、查看回答、回答问题、解决（删除）问题。
//! 所有数据保存在键值存储中，没有服务端
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有存储资源，只暴露键值读写能力
//! - `MemoryStore` / `FileStore` - `KeyValueStore` 的两种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `BoardRepository` - 唯一持有问题和回答两条记录
//! - `query` - 按ID查找、搜索
//! - `mutations` - 发布问题、发布回答、解决问题
//!
//! ### ③ 视图层（View）
//! - `view/` - 左侧列表 + 右侧面板的状态机
//! - `BoardController` - 把用户事件转成业务操作并重新渲染
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 配置、终端事件循环
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod view;

// 重新导出常用类型
pub use config::{Config, StorageBackend};
pub use error::{AppError, AppResult, StorageError};
pub use infrastructure::{FileStore, KeyValueStore, MemoryStore};
pub use models::{Question, QuestionDraft, QuestionId, Response, ResponseDraft, Submission};
pub use orchestrator::App;
pub use services::{BoardRepository, IdGenerator, SearchTerm};
pub use view::{BoardController, RightPane, TextRenderer};

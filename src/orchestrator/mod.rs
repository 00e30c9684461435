//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 根据配置创建存储后端和控制器
//! - 运行终端事件循环
//!
//! ### `command` - 命令解析
//! - 把一行终端输入解析成对应的页面事件
//!
//! ## 层次关系
//!
//! ```text
//! app (终端输入 → 事件)
//!     ↓
//! view::BoardController (面板状态机)
//!     ↓
//! services (仓库 / 查询 / 写操作)
//!     ↓
//! infrastructure (键值存储)
//! ```

pub mod app;
pub mod command;

pub use app::App;
pub use command::Command;

//! 视图层
//!
//! - `render` - 视图模型和渲染器接口
//! - `controller` - 左右两块面板的状态机，把用户事件转成业务操作

pub mod controller;
pub mod render;

pub use controller::{BoardController, ClickOutcome, RightPane};
pub use render::{QuestionDetailView, QuestionListView, Renderer, TextRenderer};

//! 应用层 - 命令
//!
//! 每个命令对应一个 Handler，Handler 只依赖端口

mod analyze_commands;
mod game_commands;
mod log_commands;

pub mod handlers;

pub use analyze_commands::*;
pub use game_commands::*;
pub use log_commands::*;

//! Command Handlers 实现

mod analyze_handlers;
mod game_handlers;
mod log_handlers;

pub use analyze_handlers::*;
pub use game_handlers::*;
pub use log_handlers::*;

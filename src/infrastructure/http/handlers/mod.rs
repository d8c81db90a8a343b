//! HTTP Handlers

mod ai_log;
mod analyze;
mod dialogue;
mod event;
mod ping;

pub use ai_log::*;
pub use analyze::*;
pub use dialogue::*;
pub use event::*;
pub use ping::*;

//! External program orchestration.

mod command;
pub mod lefse;
pub mod summarize;

pub use command::{Stage, ToolCommand};

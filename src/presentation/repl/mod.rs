mod command;
pub mod messages;
mod prompt_loop;

pub use command::Command;
pub use prompt_loop::{Repl, ReplError, ReplState};

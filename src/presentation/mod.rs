pub mod config;
pub mod repl;

pub use config::{ApiToken, Environment, Settings};
pub use repl::Repl;

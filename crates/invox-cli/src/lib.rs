mod args;
mod commands;
mod handlers;
mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;

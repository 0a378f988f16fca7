pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat, SynthesizeCommand};
pub use colors::Colors;

use std::path::PathBuf;

use attrsynth::synth::{LazyInitStrategy, ValidationMode};
use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "attrsynth")]
#[command(author, version, about = "Attribute field and accessor synthesizer")]
#[command(styles = super::Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Synthesize members for a batch of attribute requests
  Synthesize(SynthesizeCommand),
}

#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct SynthesizeCommand {
  /// Path to the JSON request document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Where to write the result (stdout when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Output format
  #[arg(long, value_enum, default_value = "tokens")]
  pub format: OutputFormat,

  /// How contradictory configuration is handled (overrides the document)
  #[arg(long, value_enum)]
  pub validation: Option<ValidationArg>,

  /// Guarding of toplevel accessors (overrides the document)
  #[arg(long, value_enum)]
  pub lazy_init: Option<LazyInitArg>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
  /// One rendered token line per attribute
  #[default]
  Tokens,
  /// The member tree and statistics as JSON
  Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationArg {
  Strict,
  Lenient,
}

impl From<ValidationArg> for ValidationMode {
  fn from(arg: ValidationArg) -> Self {
    match arg {
      ValidationArg::Strict => Self::Strict,
      ValidationArg::Lenient => Self::Lenient,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyInitArg {
  Unsynchronized,
  Synchronized,
}

impl From<LazyInitArg> for LazyInitStrategy {
  fn from(arg: LazyInitArg) -> Self {
    match arg {
      LazyInitArg::Unsynchronized => Self::Unsynchronized,
      LazyInitArg::Synchronized => Self::Synchronized,
    }
  }
}

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;
use tracing::Level;

use crate::ui::{Cli, Colors, Commands};

mod ui;
mod utils;

fn init_tracing(level: Level, ansi: bool) {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level)
    .with_target(false)
    .with_ansi(ansi)
    .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::detect(cli.color, cli.theme);

  match cli.command {
    Commands::Synthesize(command) => {
      let level = match (command.verbose, command.quiet) {
        (_, true) => Level::ERROR,
        (true, _) => Level::DEBUG,
        _ => Level::WARN,
      };
      init_tracing(level, colors.enabled());

      let config = ui::commands::SynthesizeConfig::from_command(command)?;
      ui::commands::synthesize_attributes(config, &colors).await?;
    }
  }

  Ok(())
}

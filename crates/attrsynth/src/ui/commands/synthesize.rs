use std::path::PathBuf;

use attrsynth::synth::{
  LazyInitStrategy, Orchestrator, SynthesisOptions, SynthesisOutput, SynthesisStats, SynthesisWarning, ValidationMode,
};
use chrono::{Local, Timelike};
use crossterm::style::{StyledContent, Stylize};

use crate::{
  ui::{Colors, OutputFormat, SynthesizeCommand, colors::Role},
  utils::requests::{RequestDocument, RequestLoader},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct SynthesizeConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub format: OutputFormat,
  pub validation: Option<ValidationMode>,
  pub lazy_init: Option<LazyInitStrategy>,
  pub verbose: bool,
  pub quiet: bool,
}

impl SynthesizeConfig {
  pub fn from_command(command: SynthesizeCommand) -> anyhow::Result<Self> {
    let SynthesizeCommand {
      input,
      output,
      format,
      validation,
      lazy_init,
      verbose,
      quiet,
    } = command;

    if output.as_ref().is_some_and(|path| path == &input) {
      anyhow::bail!("Output path must differ from the request document '{}'", input.display());
    }

    Ok(Self {
      input,
      output,
      format,
      validation: validation.map(Into::into),
      lazy_init: lazy_init.map(Into::into),
      verbose,
      quiet,
    })
  }

  async fn load_requests(&self) -> anyhow::Result<RequestDocument> {
    RequestLoader::open(&self.input).await?.parse()
  }

  /// Command line flags win over the document's own options.
  fn resolve_options(&self, mut options: SynthesisOptions) -> SynthesisOptions {
    if let Some(validation) = self.validation {
      options.validation = validation;
    }
    if let Some(lazy_init) = self.lazy_init {
      options.lazy_init = lazy_init;
    }
    options
  }

  fn render(&self, output: &SynthesisOutput) -> anyhow::Result<String> {
    match self.format {
      OutputFormat::Tokens => Ok(output.render_tokens()),
      OutputFormat::Json => Ok(output.to_json()?),
    }
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    let Some(path) = &self.output else {
      println!("{code}");
      return Ok(());
    };

    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, code).await?;
    Ok(())
  }

  /// Stdout carries the result itself when no output file is given.
  const fn reports_to_stdout(&self) -> bool {
    !self.quiet && self.output.is_some()
  }
}

struct SynthesizeLogger<'a> {
  config: &'a SynthesizeConfig,
  colors: &'a Colors,
}

impl<'a> SynthesizeLogger<'a> {
  fn new(config: &'a SynthesizeConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn paint(&self, text: impl Into<String>, role: Role) -> StyledContent<String> {
    text.into().with(self.colors.role(role))
  }

  fn info(&self, message: &str) {
    if self.config.reports_to_stdout() {
      println!("{} {}", self.paint(format_timestamp(), Role::Timestamp), self.paint(message, Role::Progress));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if self.config.reports_to_stdout() {
      println!(
        "            {:<25} {}",
        self.paint(label, Role::StatLabel),
        self.paint(value, Role::Count)
      );
    }
  }

  fn log_loading(&self) {
    self.info(&format!("Loading attribute requests from: {}", self.config.input.display()));
  }

  fn log_synthesizing(&self, document: &RequestDocument, options: &SynthesisOptions) {
    self.info(&format!(
      "Synthesizing {} attributes ({} validation, {} lazy init)...",
      document.attributes.len(),
      options.validation,
      options.lazy_init
    ));
  }

  fn print_statistics(&self, stats: &SynthesisStats) {
    self.stat("Attributes synthesized:", stats.attributes_synthesized.to_string());
    self.stat("Members generated:", stats.members_generated().to_string());
    self.stat("", format!("{} fields", stats.fields_generated));
    self.stat("", format!("{} initializers", stats.initializers_generated));
    self.stat("", format!("{} getters", stats.getters_generated));
    self.stat("", format!("{} setters", stats.setters_generated));
    if stats.classes_generated > 0 {
      self.stat("", format!("{} holder classes", stats.classes_generated));
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &SynthesisStats) {
    if self.config.quiet {
      return;
    }

    for warning in &stats.warnings {
      let (label, role) = match warning {
        SynthesisWarning::AttributeSkipped { .. } => ("Skipped:", Role::Skipped),
        SynthesisWarning::EmptyAttribute { .. } if self.config.verbose => ("Empty:", Role::Empty),
        SynthesisWarning::EmptyAttribute { .. } => continue,
      };
      eprintln!("{} {warning}", self.paint(label, role));
    }
  }

  fn log_writing(&self) {
    if let Some(path) = &self.config.output {
      self.info(&format!("Writing to: {}", path.display()));
    }
  }

  fn log_success(&self) {
    if self.config.reports_to_stdout() {
      println!();
      println!(
        "{} {}",
        self.paint(format_timestamp(), Role::Timestamp),
        self.paint("Successfully synthesized attribute members", Role::Done)
      );
    }
  }
}

pub async fn synthesize_attributes(config: SynthesizeConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = SynthesizeLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_requests().await?;
  let options = config.resolve_options(document.options.clone());

  logger.log_synthesizing(&document, &options);
  let output = Orchestrator::new(options).synthesize(&document.attributes);
  logger.print_statistics(&output.stats);

  logger.log_writing();
  let code = config.render(&output)?;
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}

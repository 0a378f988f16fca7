use serde::Serialize;
use strum::Display;

use crate::synth::tree::Decl;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SynthesisStats {
  pub attributes_synthesized: usize,
  pub fields_generated: usize,
  pub initializers_generated: usize,
  pub getters_generated: usize,
  pub setters_generated: usize,
  pub classes_generated: usize,
  pub warnings: Vec<SynthesisWarning>,
}

impl SynthesisStats {
  /// Counts the members of one finished attribute, descending into holder classes.
  pub fn record_attribute(&mut self, decls: &[Decl]) {
    self.attributes_synthesized += 1;
    self.record_decls(decls);
  }

  pub fn record_decls(&mut self, decls: &[Decl]) {
    for decl in decls {
      self.record_decl(decl);
    }
  }

  pub fn record_decl(&mut self, decl: &Decl) {
    match decl {
      Decl::Field(_) => self.fields_generated += 1,
      Decl::Initializer(_) => self.initializers_generated += 1,
      // Setters are the accessors returning void.
      Decl::Method(method) if method.result.is_none() => self.setters_generated += 1,
      Decl::Method(_) => self.getters_generated += 1,
      Decl::Class(class) => {
        self.classes_generated += 1;
        self.record_decls(&class.members);
      }
    }
  }

  pub fn record_warning(&mut self, warning: SynthesisWarning) {
    self.warnings.push(warning);
  }

  #[must_use]
  pub fn members_generated(&self) -> usize {
    self.fields_generated + self.initializers_generated + self.getters_generated + self.setters_generated
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SynthesisWarning {
  #[strum(to_string = "Skipped attribute '{attribute}': {error}")]
  AttributeSkipped { attribute: String, error: String },
  #[strum(to_string = "Attribute '{attribute}' produced no members")]
  EmptyAttribute { attribute: String },
}

impl SynthesisWarning {
  #[must_use]
  pub fn attribute(&self) -> &str {
    match self {
      Self::AttributeSkipped { attribute, .. } | Self::EmptyAttribute { attribute } => attribute,
    }
  }
}

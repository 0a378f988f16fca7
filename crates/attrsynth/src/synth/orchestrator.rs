//! Batch synthesis of many attributes.
//!
//! The [`Orchestrator`] turns a list of [`AttributeRequest`]s, typically read from a JSON
//! document, into emitted members. A request that fails is reported as a warning and the
//! rest of the batch still runs.
//!
//! ## Usage
//!
//! ```
//! use attrsynth::synth::{
//!   AttributeRequest, Orchestrator, SynthesisOptions,
//!   model::{SemanticType, TypedDeclaration},
//! };
//!
//! let request = AttributeRequest::new(
//!   TypedDeclaration::builder().name("count").ty(SemanticType::new("Integer")).build(),
//! );
//! let output = Orchestrator::new(SynthesisOptions::default()).synthesize(&[request]);
//! assert_eq!(output.stats.getters_generated, 1);
//! ```

use proc_macro2::TokenStream;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

use crate::synth::{
  builder::{AttributeDefinitionBuilder, AttributeSpec},
  error::Result,
  model::{LanguageTypeContext, TypeContext, TypedDeclaration},
  options::SynthesisOptions,
  stats::{SynthesisStats, SynthesisWarning},
  tree::{Annotation, Block, Decl, Expr, Modifiers, render},
};

/// Which constructor of [`AttributeDefinitionBuilder`] a request goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
  #[default]
  Plain,
  Wrapped,
  Getter,
  Setter,
}

/// One attribute to synthesize and the configuration calls to apply to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRequest {
  pub declaration: TypedDeclaration,
  #[serde(default)]
  pub factory: FactoryKind,
  /// Defaults to the declaration's name.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attr_name: Option<String>,
  /// Defaults to the attribute name.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field_name: Option<String>,
  #[serde(default)]
  pub toplevel: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub class_name: Option<String>,
  #[serde(default)]
  pub modifiers: Modifiers,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub annotations: Vec<Annotation>,
  #[serde(default)]
  pub formal: bool,
  #[serde(default)]
  pub skip_field: bool,
  #[serde(default)]
  pub skip_read: bool,
  #[serde(default)]
  pub immutable: bool,
  #[serde(default)]
  pub not_actual: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub initial_value: Option<Expr>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub read_body: Option<Block>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub write_body: Option<Block>,
}

impl AttributeRequest {
  /// A plain request with every option at its default.
  #[must_use]
  pub fn new(declaration: TypedDeclaration) -> Self {
    Self {
      declaration,
      factory: FactoryKind::default(),
      attr_name: None,
      field_name: None,
      toplevel: false,
      class_name: None,
      modifiers: Modifiers::empty(),
      annotations: vec![],
      formal: false,
      skip_field: false,
      skip_read: false,
      immutable: false,
      not_actual: false,
      initial_value: None,
      read_body: None,
      write_body: None,
    }
  }

  #[must_use]
  pub fn attr_name(&self) -> &str {
    self.attr_name.as_deref().unwrap_or(&self.declaration.name)
  }

  #[must_use]
  pub fn field_name(&self) -> &str {
    self.field_name.as_deref().unwrap_or_else(|| self.attr_name())
  }

  fn builder<'a>(&self, context: &'a dyn TypeContext) -> Result<AttributeDefinitionBuilder<'a>> {
    let name = self.attr_name();
    match self.factory {
      FactoryKind::Plain => AttributeDefinitionBuilder::new(
        context,
        AttributeSpec::builder()
          .declaration(&self.declaration)
          .maybe_class_name(self.class_name.clone())
          .attr_name(name)
          .field_name(self.field_name())
          .toplevel(self.toplevel)
          .build(),
      ),
      FactoryKind::Wrapped => {
        let builder = AttributeDefinitionBuilder::wrapped(context, name, &self.declaration, self.toplevel)?;
        Ok(match &self.class_name {
          Some(class_name) => builder.with_class_name(class_name),
          None => builder,
        })
      }
      FactoryKind::Getter => AttributeDefinitionBuilder::getter(context, name, &self.declaration),
      FactoryKind::Setter => AttributeDefinitionBuilder::setter(context, name, &self.declaration),
    }
  }

  /// Applies the request's configuration calls in a fixed order and finalizes.
  fn synthesize(&self, context: &dyn TypeContext) -> Result<Vec<Decl>> {
    let mut builder = self
      .builder(context)?
      .with_modifiers([self.modifiers])
      .with_annotations(self.annotations.clone())
      .mark_formal(self.formal);

    if self.skip_field {
      builder = builder.skip_field();
    }
    if let Some(body) = &self.read_body {
      builder = builder.with_read_body(body.clone());
    }
    if self.skip_read {
      builder = builder.skip_read();
    }
    if let Some(body) = &self.write_body {
      builder = builder.with_write_body(body.clone());
    }
    if self.immutable {
      builder = builder.make_immutable();
    }
    if let Some(value) = &self.initial_value {
      builder = builder.with_initial_value(value.clone());
    }
    if self.not_actual {
      builder = builder.mark_not_override();
    }

    builder.build()
  }
}

/// The members emitted for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesizedAttribute {
  pub name: String,
  pub decls: Vec<Decl>,
}

impl SynthesizedAttribute {
  #[must_use]
  pub fn tokens(&self) -> TokenStream {
    render(&self.decls)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisOutput {
  pub attributes: Vec<SynthesizedAttribute>,
  pub stats: SynthesisStats,
}

impl SynthesisOutput {
  /// Each attribute's members as one token line, in request order.
  #[must_use]
  pub fn render_tokens(&self) -> String {
    self
      .attributes
      .iter()
      .map(|attribute| attribute.tokens().to_string())
      .collect::<Vec<_>>()
      .join("\n")
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// Runs attribute requests against one type context.
pub struct Orchestrator<C: TypeContext = LanguageTypeContext> {
  context: C,
}

impl Orchestrator {
  #[must_use]
  pub fn new(options: SynthesisOptions) -> Self {
    Self::with_context(LanguageTypeContext::new(options))
  }
}

impl<C: TypeContext> Orchestrator<C> {
  pub fn with_context(context: C) -> Self {
    Self { context }
  }

  pub fn options(&self) -> &SynthesisOptions {
    self.context.options()
  }

  #[must_use]
  pub fn synthesize(&self, requests: &[AttributeRequest]) -> SynthesisOutput {
    let mut stats = SynthesisStats::default();
    let mut attributes = Vec::with_capacity(requests.len());

    for request in requests {
      let name = request.attr_name().to_string();
      match request.synthesize(&self.context) {
        Ok(decls) => {
          if decls.is_empty() {
            stats.record_warning(SynthesisWarning::EmptyAttribute {
              attribute: name.clone(),
            });
          }
          stats.record_attribute(&decls);
          attributes.push(SynthesizedAttribute { name, decls });
        }
        Err(err) => {
          warn!(attribute = %name, error = %err, "skipping attribute");
          stats.record_warning(SynthesisWarning::AttributeSkipped {
            attribute: name,
            error: error_chain(&err),
          });
        }
      }
    }

    debug!(
      attributes = stats.attributes_synthesized,
      members = stats.members_generated(),
      warnings = stats.warnings.len(),
      "batch finished"
    );

    SynthesisOutput { attributes, stats }
  }
}

/// The error and its sources, outermost first.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
  let mut message = err.to_string();
  let mut source = err.source();
  while let Some(cause) = source {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    source = cause.source();
  }
  message
}

use itertools::Itertools;
use strum::Display;
use thiserror::Error;

pub type Result<T, E = SynthesisError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AccessorKind {
  Getter,
  Setter,
}

/// A contradiction between configuration calls, found when the attribute is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ConfigIssue {
  #[strum(to_string = "a custom getter body was supplied but the getter is skipped")]
  DiscardedReadBody,
  #[strum(to_string = "a custom setter body was supplied but the attribute is immutable")]
  DiscardedWriteBody,
  #[strum(to_string = "the default setter assigns a field that is never declared")]
  UnbackedWrite,
  #[strum(to_string = "an initial value was supplied but no field is generated")]
  DiscardedInitialValue,
  #[strum(to_string = "the default setter of a static field is shadowed by its parameter")]
  ShadowedStaticWrite,
}

#[derive(Debug, Error)]
pub enum SynthesisError {
  #[error("type '{ty}' is unresolved")]
  UnresolvedType { ty: String },

  #[error("type '{ty}' has no small representation")]
  SmallTypeMismatch { ty: String },

  #[error("'{name}' is not a valid {kind} name")]
  InvalidAccessorName { kind: AccessorKind, name: String },

  #[error("attribute '{attribute}' is misconfigured: {}", .issues.iter().join("; "))]
  InvalidConfiguration { attribute: String, issues: Vec<ConfigIssue> },

  #[error("failed to synthesize attribute '{attribute}'")]
  Attribute {
    attribute: String,
    #[source]
    source: Box<SynthesisError>,
  },
}

impl SynthesisError {
  /// Wraps a model error with the attribute being synthesized.
  #[must_use]
  pub fn in_attribute(self, attribute: impl Into<String>) -> Self {
    match self {
      Self::InvalidConfiguration { .. } | Self::Attribute { .. } => self,
      other => Self::Attribute {
        attribute: attribute.into(),
        source: Box::new(other),
      },
    }
  }

  /// The innermost error, skipping attribute context.
  #[must_use]
  pub fn root(&self) -> &SynthesisError {
    match self {
      Self::Attribute { source, .. } => source.root(),
      other => other,
    }
  }
}

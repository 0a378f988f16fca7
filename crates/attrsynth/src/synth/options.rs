use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_METADATA_PACKAGE: &str = "com.redhat.ceylon.compiler.java.metadata";
pub const DEFAULT_RECURSIVE_INITIALIZATION_FAULT: &str =
  "com.redhat.ceylon.compiler.java.language.RecursiveInitializationException";
pub const DEFAULT_LANGUAGE_PACKAGE: &str = "ceylon.language";

/// What `build` does with contradictory configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
  /// Refuse to finalize.
  #[default]
  Strict,
  /// Log each issue and emit what the configuration asks for, discarding unused parts.
  Lenient,
}

/// Guarding of toplevel accessors against concurrent first access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LazyInitStrategy {
  #[default]
  Unsynchronized,
  /// Toplevel accessors are declared `synchronized`.
  Synchronized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct SynthesisOptions {
  #[builder(default)]
  pub validation: ValidationMode,
  #[builder(default)]
  pub lazy_init: LazyInitStrategy,
  /// Package holding the `@Attribute`, `@Name`, `@TypeInfo` and `@Annotations` metadata types.
  #[builder(into, default = DEFAULT_METADATA_PACKAGE.to_string())]
  pub metadata_package: String,
  /// Package holding the boxed language value types.
  #[builder(into, default = DEFAULT_LANGUAGE_PACKAGE.to_string())]
  pub language_package: String,
  /// Fault raised by a toplevel getter that runs before its initializer finished.
  #[builder(into, default = DEFAULT_RECURSIVE_INITIALIZATION_FAULT.to_string())]
  pub recursive_initialization_fault: String,
}

impl Default for SynthesisOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

use serde::{Deserialize, Serialize};

use super::types::SemanticType;

/// An annotation as written in the source program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct ModelAnnotation {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  #[serde(default)]
  pub arguments: Vec<String>,
}

/// Accessor names fixed by the declaration, e.g. a JavaBean `isEnabled` getter being refined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorNaming {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub getter: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub setter: Option<String>,
}

/// The declaration an `actual` attribute refines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct RefinedDeclaration {
  /// Qualified name of the declaring type.
  #[builder(into)]
  pub container: String,
  pub ty: SemanticType,
  #[builder(default)]
  #[serde(default)]
  pub variable: bool,
  #[builder(default)]
  #[serde(default)]
  pub unboxed: bool,
}

/// A typed attribute declaration with the facts the type checker attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct TypedDeclaration {
  #[builder(into)]
  pub name: String,
  pub ty: SemanticType,
  #[builder(default)]
  #[serde(default)]
  pub variable: bool,
  #[builder(default)]
  #[serde(default)]
  pub actual: bool,
  /// Set by the boxing analysis when values of this attribute travel unboxed.
  #[builder(default)]
  #[serde(default)]
  pub unboxed: bool,
  /// Set for attributes compiled to a narrow-typed platform accessor (`hash` → `int hashCode()`).
  #[builder(default)]
  #[serde(default)]
  pub small: bool,
  /// Declared inside a function body, directly or through an enclosing declaration.
  #[builder(default)]
  #[serde(default)]
  pub ancestor_local: bool,
  #[builder(default)]
  #[serde(default)]
  pub annotations: Vec<ModelAnnotation>,
  #[builder(default)]
  #[serde(default)]
  pub naming: AccessorNaming,
  pub refined: Option<RefinedDeclaration>,
}

impl TypedDeclaration {
  /// Whether the declaration this one refines is variable. A declaration that refines nothing
  /// refines itself.
  #[must_use]
  pub fn refined_is_variable(&self) -> bool {
    self.refined.as_ref().map_or(self.variable, |refined| refined.variable)
  }

  /// The setter overrides an inherited one only when both sides are variable.
  #[must_use]
  pub fn setter_is_actual(&self) -> bool {
    self.actual && self.refined_is_variable()
  }
}

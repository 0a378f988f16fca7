use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

const LANGUAGE_MODULE_PREFIX: &str = "ceylon.language::";

/// Built-in types of the source language that get special erasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString)]
pub enum LanguageType {
  Integer,
  Float,
  Boolean,
  Character,
  String,
  Byte,
  Object,
  Anything,
  Nothing,
}

impl LanguageType {
  /// Whether the type has a primitive representation on the target platform.
  #[must_use]
  pub const fn is_primitive_compatible(self) -> bool {
    matches!(
      self,
      Self::Integer | Self::Float | Self::Boolean | Self::Character | Self::String | Self::Byte
    )
  }

  /// Whether the type has a narrow representation (`int`/`float`).
  #[must_use]
  pub const fn has_small_form(self) -> bool {
    matches!(self, Self::Integer | Self::Float | Self::Character)
  }

  #[must_use]
  pub const fn is_top(self) -> bool {
    matches!(self, Self::Object | Self::Anything | Self::Nothing)
  }
}

/// A type as the type checker produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticType {
  /// Qualified declaration name, `package::Type`. Language module types may omit the package.
  pub name: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub type_arguments: Vec<SemanticType>,
  /// `T?`
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub optional: bool,
}

impl SemanticType {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      type_arguments: vec![],
      optional: false,
    }
  }

  pub fn generic(name: impl Into<String>, type_arguments: Vec<SemanticType>) -> Self {
    Self {
      name: name.into(),
      type_arguments,
      optional: false,
    }
  }

  #[must_use]
  pub fn with_optional(mut self) -> Self {
    self.optional = true;
    self
  }

  #[must_use]
  pub fn is_resolved(&self) -> bool {
    !self.name.trim().is_empty() && self.type_arguments.iter().all(Self::is_resolved)
  }

  /// The language built-in this type names, if any.
  #[must_use]
  pub fn language_type(&self) -> Option<LanguageType> {
    let simple = self.name.strip_prefix(LANGUAGE_MODULE_PREFIX).unwrap_or(&self.name);
    simple.parse().ok()
  }

  /// Whether the declared type carries information the erased type loses, which then has to
  /// be recorded in a `@TypeInfo` annotation.
  #[must_use]
  pub fn needs_type_info(&self) -> bool {
    self.optional || !self.type_arguments.is_empty()
  }
}

impl From<&str> for SemanticType {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl Display for SemanticType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let name = self.name.strip_prefix(LANGUAGE_MODULE_PREFIX).unwrap_or(&self.name);
    f.write_str(name)?;
    if !self.type_arguments.is_empty() {
      f.write_str("<")?;
      for (i, argument) in self.type_arguments.iter().enumerate() {
        if i > 0 {
          f.write_str(",")?;
        }
        argument.fmt(f)?;
      }
      f.write_str(">")?;
    }
    if self.optional {
      f.write_str("?")?;
    }
    Ok(())
  }
}

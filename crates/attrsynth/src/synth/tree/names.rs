use std::fmt::{Display, Formatter};

use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};
use string_cache::DefaultAtom;

use crate::synth::naming::identifiers::{quote_if_java_keyword, sanitize};

/// A simple identifier in the emitted tree. Construction always yields a valid identifier:
/// [`Name::new`] sanitizes, [`Name::quoted`] additionally escapes reserved words.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Name(DefaultAtom);

impl Name {
  pub fn new(raw: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(sanitize(raw.as_ref())))
  }

  pub fn quoted(raw: impl AsRef<str>) -> Self {
    Self(DefaultAtom::from(quote_if_java_keyword(raw.as_ref())))
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for Name {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for Name {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

impl From<Name> for String {
  fn from(value: Name) -> Self {
    value.0.to_string()
  }
}

impl PartialEq<str> for Name {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for Name {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl Display for Name {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for Name {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    Ident::new(&self.0, Span::call_site()).to_tokens(tokens);
  }
}

/// A dotted name such as `java.lang.String`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct QualifiedName(Vec<Name>);

impl QualifiedName {
  pub fn new(dotted: impl AsRef<str>) -> Self {
    Self(
      dotted
        .as_ref()
        .split(['.', ':'])
        .filter(|segment| !segment.is_empty())
        .map(Name::new)
        .collect(),
    )
  }

  #[must_use]
  pub fn simple_name(&self) -> Option<&Name> {
    self.0.last()
  }

  pub fn segments(&self) -> impl Iterator<Item = &Name> {
    self.0.iter()
  }
}

impl From<&str> for QualifiedName {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for QualifiedName {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

impl From<QualifiedName> for String {
  fn from(value: QualifiedName) -> Self {
    value.to_string()
  }
}

impl Display for QualifiedName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for segment in &self.0 {
      if !first {
        f.write_str(".")?;
      }
      first = false;
      segment.fmt(f)?;
    }
    Ok(())
  }
}

impl ToTokens for QualifiedName {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let segments = &self.0;
    tokens.extend(quote! { #(#segments).* });
  }
}

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::names::QualifiedName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
  Boolean,
  Byte,
  Short,
  Int,
  Long,
  Char,
  Float,
  Double,
}

impl ToTokens for PrimitiveType {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let keyword: &'static str = self.into();
    proc_macro2::Ident::new(keyword, proc_macro2::Span::call_site()).to_tokens(tokens);
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardBound {
  Extends,
  Super,
}

/// A type as it appears in a declaration of the emitted tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JavaType {
  Primitive(PrimitiveType),
  Class {
    name: QualifiedName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    arguments: Vec<JavaType>,
  },
  Array(Box<JavaType>),
  Wildcard(Option<(WildcardBound, Box<JavaType>)>),
}

impl JavaType {
  pub fn class(name: impl Into<QualifiedName>) -> Self {
    Self::Class {
      name: name.into(),
      arguments: vec![],
    }
  }

  pub fn generic(name: impl Into<QualifiedName>, arguments: Vec<JavaType>) -> Self {
    Self::Class {
      name: name.into(),
      arguments,
    }
  }

  #[must_use]
  pub fn array_of(self) -> Self {
    Self::Array(Box::new(self))
  }

}

impl From<PrimitiveType> for JavaType {
  fn from(primitive: PrimitiveType) -> Self {
    Self::Primitive(primitive)
  }
}

impl ToTokens for JavaType {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Primitive(primitive) => quote! { #primitive },
      Self::Class { name, arguments } if arguments.is_empty() => quote! { #name },
      Self::Class { name, arguments } => quote! { #name < #(#arguments),* > },
      Self::Array(component) => quote! { #component [] },
      Self::Wildcard(None) => quote! { ? },
      Self::Wildcard(Some((WildcardBound::Extends, bound))) => quote! { ? extends #bound },
      Self::Wildcard(Some((WildcardBound::Super, bound))) => quote! { ? super #bound },
    };
    tokens.extend(ts);
  }
}

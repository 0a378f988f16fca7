use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};

use super::{exprs::Expr, names::Name, types::JavaType};

/// One `name = value` pair of an annotation. A missing name renders the implicit `value` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationArgument {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<Name>,
  pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
  pub annotation_type: JavaType,
  #[serde(default)]
  pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
  pub fn marker(annotation_type: JavaType) -> Self {
    Self {
      annotation_type,
      arguments: vec![],
    }
  }

  /// An annotation with a single unnamed argument.
  pub fn with_value(annotation_type: JavaType, value: Expr) -> Self {
    Self {
      annotation_type,
      arguments: vec![AnnotationArgument { name: None, value }],
    }
  }

  #[must_use]
  pub fn argument(mut self, name: impl Into<Name>, value: Expr) -> Self {
    self.arguments.push(AnnotationArgument {
      name: Some(name.into()),
      value,
    });
    self
  }

  /// Simple name of the annotation type, for lookups in tests and diagnostics.
  #[must_use]
  pub fn simple_name(&self) -> Option<&str> {
    match &self.annotation_type {
      JavaType::Class { name, .. } => name.simple_name().map(Name::as_str),
      _ => None,
    }
  }
}

impl ToTokens for AnnotationArgument {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let value = &self.value;
    let ts = match &self.name {
      Some(name) => quote! { #name = #value },
      None => quote! { #value },
    };
    tokens.extend(ts);
  }
}

impl ToTokens for Annotation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let annotation_type = &self.annotation_type;
    let arguments = &self.arguments;
    let ts = if arguments.is_empty() {
      quote! { @#annotation_type }
    } else {
      quote! { @#annotation_type ( #(#arguments),* ) }
    };
    tokens.extend(ts);
  }
}

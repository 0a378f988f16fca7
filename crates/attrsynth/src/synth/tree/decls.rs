use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};

use super::{annotations::Annotation, exprs::Expr, flags::Modifiers, names::Name, stmts::Block, types::JavaType};

/// A storage declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct FieldDecl {
  #[builder(default)]
  #[serde(default)]
  pub modifiers: Modifiers,
  #[builder(default)]
  #[serde(default)]
  pub annotations: Vec<Annotation>,
  pub ty: JavaType,
  #[builder(into)]
  pub name: Name,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub init: Option<Expr>,
}

impl FieldDecl {
  #[must_use]
  pub fn is_final(&self) -> bool {
    self.modifiers.contains(Modifiers::FINAL)
  }
}

impl ToTokens for FieldDecl {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let Self {
      modifiers,
      annotations,
      ty,
      name,
      init,
    } = self;
    let init = init.as_ref().map(|value| quote! { = #value });
    tokens.extend(quote! { #(#annotations)* #modifiers #ty #name #init; });
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct ParameterDecl {
  #[builder(default)]
  #[serde(default)]
  pub modifiers: Modifiers,
  #[builder(default)]
  #[serde(default)]
  pub annotations: Vec<Annotation>,
  pub ty: JavaType,
  #[builder(into)]
  pub name: Name,
}

impl ToTokens for ParameterDecl {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let Self {
      modifiers,
      annotations,
      ty,
      name,
    } = self;
    tokens.extend(quote! { #(#annotations)* #modifiers #ty #name });
  }
}

/// A method. `result: None` is `void`; `body: None` is a bodiless (abstract) declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
  pub modifiers: Modifiers,
  pub annotations: Vec<Annotation>,
  pub result: Option<JavaType>,
  pub name: Name,
  pub parameters: Vec<ParameterDecl>,
  pub body: Option<Block>,
}

impl MethodDecl {
  #[must_use]
  pub fn has_annotation(&self, simple_name: &str) -> bool {
    self.annotations.iter().any(|a| a.simple_name() == Some(simple_name))
  }
}

impl ToTokens for MethodDecl {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let Self {
      modifiers,
      annotations,
      result,
      name,
      parameters,
      body,
    } = self;
    let result = match result {
      Some(ty) => quote! { #ty },
      None => quote! { void },
    };
    let body = match body {
      Some(block) => quote! { #block },
      None => quote! { ; },
    };
    tokens.extend(quote! {
      #(#annotations)* #modifiers #result #name ( #(#parameters),* ) #body
    });
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
  pub modifiers: Modifiers,
  pub body: Block,
}

/// A standalone class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
  pub modifiers: Modifiers,
  pub annotations: Vec<Annotation>,
  pub name: Name,
  pub constructor: ConstructorDecl,
  pub members: Vec<Decl>,
}

impl ClassDecl {
  #[must_use]
  pub fn has_annotation(&self, simple_name: &str) -> bool {
    self.annotations.iter().any(|a| a.simple_name() == Some(simple_name))
  }
}

impl ToTokens for ClassDecl {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let Self {
      modifiers,
      annotations,
      name,
      constructor,
      members,
    } = self;
    let ctor_modifiers = constructor.modifiers;
    let ctor_body = &constructor.body;
    tokens.extend(quote! {
      #(#annotations)* #modifiers class #name {
        #ctor_modifiers #name () #ctor_body
        #(#members)*
      }
    });
  }
}

/// One member produced for an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
  Field(FieldDecl),
  /// A free-standing initializer block; static when the storage is static.
  Initializer(Block),
  Method(MethodDecl),
  Class(ClassDecl),
}

impl Decl {
  #[must_use]
  pub fn as_field(&self) -> Option<&FieldDecl> {
    match self {
      Self::Field(field) => Some(field),
      _ => None,
    }
  }

  #[must_use]
  pub fn as_initializer(&self) -> Option<&Block> {
    match self {
      Self::Initializer(block) => Some(block),
      _ => None,
    }
  }

  #[must_use]
  pub fn as_method(&self) -> Option<&MethodDecl> {
    match self {
      Self::Method(method) => Some(method),
      _ => None,
    }
  }

  #[must_use]
  pub fn as_class(&self) -> Option<&ClassDecl> {
    match self {
      Self::Class(class) => Some(class),
      _ => None,
    }
  }

  #[must_use]
  pub fn kind_name(&self) -> &'static str {
    match self {
      Self::Field(_) => "field",
      Self::Initializer(_) => "initializer",
      Self::Method(_) => "method",
      Self::Class(_) => "class",
    }
  }
}

impl ToTokens for Decl {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    match self {
      Self::Field(field) => field.to_tokens(tokens),
      Self::Initializer(block) => block.to_tokens(tokens),
      Self::Method(method) => method.to_tokens(tokens),
      Self::Class(class) => class.to_tokens(tokens),
    }
  }
}

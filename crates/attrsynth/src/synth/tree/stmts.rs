use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};

use super::{exprs::Expr, names::Name, types::JavaType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
  Expr(Expr),
  Return(Option<Expr>),
  Throw(Expr),
  Try {
    body: Block,
    catches: Vec<CatchClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finally: Option<Block>,
  },
  Block(Block),
}

impl Stmt {
  pub fn returning(value: Expr) -> Self {
    Self::Return(Some(value))
  }
}

impl ToTokens for Stmt {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Expr(expr) => quote! { #expr; },
      Self::Return(Some(value)) => quote! { return #value; },
      Self::Return(None) => quote! { return; },
      Self::Throw(fault) => quote! { throw #fault; },
      Self::Try { body, catches, finally } => {
        let finally = finally.as_ref().map(|block| quote! { finally #block });
        quote! { try #body #(#catches)* #finally }
      }
      Self::Block(block) => quote! { #block },
    };
    tokens.extend(ts);
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
  pub fault_type: JavaType,
  pub binding: Name,
  pub body: Block,
}

impl ToTokens for CatchClause {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let Self {
      fault_type,
      binding,
      body,
    } = self;
    tokens.extend(quote! { catch (#fault_type #binding) #body });
  }
}

/// A braced statement list. A static block doubles as a class initializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
  #[serde(default, rename = "static")]
  pub is_static: bool,
  pub stmts: Vec<Stmt>,
}

impl Block {
  pub fn new(stmts: Vec<Stmt>) -> Self {
    Self {
      is_static: false,
      stmts,
    }
  }

  pub fn of(stmt: Stmt) -> Self {
    Self::new(vec![stmt])
  }

  #[must_use]
  pub fn with_static(mut self, is_static: bool) -> Self {
    self.is_static = is_static;
    self
  }
}

impl ToTokens for Block {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let stmts = &self.stmts;
    let ts = if self.is_static {
      quote! { static { #(#stmts)* } }
    } else {
      quote! { { #(#stmts)* } }
    };
    tokens.extend(ts);
  }
}

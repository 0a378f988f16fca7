//! The member tree the synthesizer emits.
//!
//! Nodes model the small slice of the target object language needed to declare storage,
//! accessors and holder classes. Every node implements [`quote::ToTokens`], so a finished
//! declaration list renders to a token stream for inspection or output.

mod annotations;
mod decls;
mod exprs;
mod flags;
mod names;
mod stmts;
mod types;


pub use annotations::{Annotation, AnnotationArgument};
pub use decls::{ClassDecl, ConstructorDecl, Decl, FieldDecl, MethodDecl, ParameterDecl};
pub use exprs::{Expr, Literal};
pub use flags::{Modifiers, TypeFlags};
pub use names::{Name, QualifiedName};
pub use stmts::{Block, CatchClause, Stmt};
pub use types::{JavaType, PrimitiveType, WildcardBound};

use proc_macro2::TokenStream;
use quote::ToTokens;

/// Renders a member list as one token stream, in order.
pub fn render(decls: &[Decl]) -> TokenStream {
  let mut tokens = TokenStream::new();
  for decl in decls {
    decl.to_tokens(&mut tokens);
  }
  tokens
}

//! Facade over the type-checked program model.

mod context;
mod declaration;
mod types;

#[cfg(test)]
mod tests;

pub use context::{LanguageTypeContext, NonWideningType, TypeContext};
pub use declaration::{AccessorNaming, ModelAnnotation, RefinedDeclaration, TypedDeclaration};
pub use types::{LanguageType, SemanticType};

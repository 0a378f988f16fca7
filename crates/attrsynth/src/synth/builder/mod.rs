//! Builders that turn a typed attribute declaration into emitted members.

mod accessor;
mod attribute;
mod class;
mod validation;

#[cfg(test)]
mod tests;

pub use accessor::{AccessorBody, MethodDefinitionBuilder};
pub use attribute::{AttributeDefinitionBuilder, AttributeSpec, ErasurePolicy, StorageShape, WRAPPED_FIELD_NAME};
pub use class::ClassDefinitionBuilder;

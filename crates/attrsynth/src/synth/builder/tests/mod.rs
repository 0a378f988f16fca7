mod attribute;
mod scenarios;

use crate::synth::{
  builder::{AttributeDefinitionBuilder, AttributeSpec},
  model::{LanguageTypeContext, SemanticType, TypedDeclaration},
  options::{LazyInitStrategy, SynthesisOptions, ValidationMode},
  tree::{Decl, render},
};

pub(super) fn strict() -> LanguageTypeContext {
  LanguageTypeContext::default()
}

pub(super) fn lenient() -> LanguageTypeContext {
  LanguageTypeContext::new(SynthesisOptions::builder().validation(ValidationMode::Lenient).build())
}

pub(super) fn synchronized() -> LanguageTypeContext {
  LanguageTypeContext::new(SynthesisOptions::builder().lazy_init(LazyInitStrategy::Synchronized).build())
}

/// An unboxed declaration, so value types erase to primitives.
pub(super) fn value(name: &str, ty: &str) -> TypedDeclaration {
  TypedDeclaration::builder()
    .name(name)
    .ty(SemanticType::new(ty))
    .unboxed(true)
    .build()
}

pub(super) fn variable(name: &str, ty: &str) -> TypedDeclaration {
  TypedDeclaration {
    variable: true,
    ..value(name, ty)
  }
}

pub(super) fn member<'a>(context: &'a LanguageTypeContext, decl: &TypedDeclaration) -> AttributeDefinitionBuilder<'a> {
  AttributeDefinitionBuilder::new(
    context,
    AttributeSpec::builder()
      .declaration(decl)
      .attr_name(decl.name.as_str())
      .field_name(decl.name.as_str())
      .build(),
  )
  .unwrap()
}

pub(super) fn toplevel<'a>(
  context: &'a LanguageTypeContext,
  decl: &TypedDeclaration,
  field_name: &str,
) -> AttributeDefinitionBuilder<'a> {
  AttributeDefinitionBuilder::new(
    context,
    AttributeSpec::builder()
      .declaration(decl)
      .attr_name(decl.name.as_str())
      .field_name(field_name)
      .toplevel(true)
      .build(),
  )
  .unwrap()
}

pub(super) fn rendered(decls: &[Decl]) -> String {
  render(decls).to_string()
}

pub(super) fn kinds(decls: &[Decl]) -> Vec<&'static str> {
  decls.iter().map(Decl::kind_name).collect()
}

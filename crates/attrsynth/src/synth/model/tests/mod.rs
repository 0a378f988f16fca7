
use crate::synth::model::{RefinedDeclaration, SemanticType, TypedDeclaration};

pub(super) fn declaration(name: &str, ty: &str) -> TypedDeclaration {
  TypedDeclaration::builder().name(name).ty(SemanticType::new(ty)).build()
}

pub(super) fn refinement(decl: TypedDeclaration, refined: RefinedDeclaration) -> TypedDeclaration {
  TypedDeclaration {
    actual: true,
    refined: Some(refined),
    ..decl
  }
}

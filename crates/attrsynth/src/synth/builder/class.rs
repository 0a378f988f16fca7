use crate::synth::tree::{Annotation, Block, ClassDecl, ConstructorDecl, Decl, Modifiers, Name};

/// Builds the standalone holder class of an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinitionBuilder {
  name: Name,
  modifiers: Modifiers,
  constructor_modifiers: Modifiers,
  annotations: Vec<Annotation>,
  members: Vec<Decl>,
}

impl ClassDefinitionBuilder {
  pub fn klass(name: Name) -> Self {
    Self {
      name,
      modifiers: Modifiers::empty(),
      constructor_modifiers: Modifiers::empty(),
      annotations: vec![],
      members: vec![],
    }
  }

  #[must_use]
  pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
    self.modifiers = modifiers;
    self
  }

  #[must_use]
  pub fn constructor_modifiers(mut self, modifiers: Modifiers) -> Self {
    self.constructor_modifiers = modifiers;
    self
  }

  #[must_use]
  pub fn annotations(mut self, annotations: Vec<Annotation>) -> Self {
    self.annotations.extend(annotations);
    self
  }

  #[must_use]
  pub fn defs(mut self, members: Vec<Decl>) -> Self {
    self.members.extend(members);
    self
  }

  /// The class as a one-element member list, ready to replace the flat members it wraps.
  #[must_use]
  pub fn build(self) -> Vec<Decl> {
    vec![Decl::Class(ClassDecl {
      modifiers: self.modifiers,
      annotations: self.annotations,
      name: self.name,
      constructor: ConstructorDecl {
        modifiers: self.constructor_modifiers,
        body: Block::default(),
      },
      members: self.members,
    })]
  }
}

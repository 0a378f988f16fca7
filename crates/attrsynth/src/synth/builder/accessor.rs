use crate::synth::{
  model::{SemanticType, TypeContext},
  tree::{Annotation, Block, JavaType, MethodDecl, Modifiers, Name, ParameterDecl},
};

const OVERRIDE_ANNOTATION: &str = "java.lang.Override";

/// Where an accessor's body came from.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorBody {
  /// Generated from the attribute's storage when the synthesizer was constructed.
  Derived(Block),
  /// Supplied by the caller; replaces the derived body.
  Custom(Block),
}

impl AccessorBody {
  #[must_use]
  pub fn is_custom(&self) -> bool {
    matches!(self, Self::Custom(_))
  }

  #[must_use]
  pub fn block(&self) -> &Block {
    match self {
      Self::Derived(block) | Self::Custom(block) => block,
    }
  }

  fn into_block(self) -> Block {
    match self {
      Self::Derived(block) | Self::Custom(block) => block,
    }
  }
}

/// Builds one accessor method: name, modifiers, signature, body and the override and
/// abstractness markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinitionBuilder {
  name: Name,
  ancestor_local: bool,
  modifiers: Modifiers,
  annotations: Vec<Annotation>,
  result: Option<JavaType>,
  result_annotations: Vec<Annotation>,
  parameters: Vec<ParameterDecl>,
  body: AccessorBody,
  actual: bool,
  formal: bool,
}

impl MethodDefinitionBuilder {
  /// A compiler-generated method. Metadata annotations are dropped when the enclosing
  /// declaration lives inside a function body.
  pub fn system_method(ancestor_local: bool, name: Name) -> Self {
    Self {
      name,
      ancestor_local,
      modifiers: Modifiers::empty(),
      annotations: vec![],
      result: None,
      result_annotations: vec![],
      parameters: vec![],
      body: AccessorBody::Derived(Block::default()),
      actual: false,
      formal: false,
    }
  }

  #[must_use]
  pub fn derived_block(mut self, block: Block) -> Self {
    self.body = AccessorBody::Derived(block);
    self
  }

  #[must_use]
  pub fn custom_block(mut self, block: Block) -> Self {
    self.body = AccessorBody::Custom(block);
    self
  }

  #[must_use]
  pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
    self.modifiers = modifiers;
    self
  }

  #[must_use]
  pub fn is_actual(mut self, actual: bool) -> Self {
    self.actual = actual;
    self
  }

  #[must_use]
  pub fn is_formal(mut self, formal: bool) -> Self {
    self.formal = formal;
    self
  }

  #[must_use]
  pub fn annotations(mut self, annotations: Vec<Annotation>) -> Self {
    if !self.ancestor_local {
      self.annotations.extend(annotations);
    }
    self
  }

  #[must_use]
  pub fn result_type(mut self, owner: &dyn TypeContext, ty: JavaType, semantic: &SemanticType) -> Self {
    self.result = Some(ty);
    self.result_annotations = if self.ancestor_local {
      vec![]
    } else {
      owner.make_at_type_info(semantic).into_iter().collect()
    };
    self
  }

  /// Appends a `final` parameter, annotated with its source name and, when erasure loses
  /// information, its source type.
  #[must_use]
  pub fn parameter(mut self, owner: &dyn TypeContext, name: &str, ty: JavaType, semantic: &SemanticType) -> Self {
    let annotations = if self.ancestor_local {
      vec![]
    } else {
      std::iter::once(owner.make_at_name(name))
        .chain(owner.make_at_type_info(semantic))
        .collect()
    };

    self.parameters.push(
      ParameterDecl::builder()
        .modifiers(Modifiers::FINAL)
        .annotations(annotations)
        .ty(ty)
        .name(Name::quoted(name))
        .build(),
    );
    self
  }

  #[must_use]
  pub fn name(&self) -> &Name {
    &self.name
  }

  #[must_use]
  pub fn body(&self) -> &AccessorBody {
    &self.body
  }

  #[must_use]
  pub fn has_custom_body(&self) -> bool {
    self.body.is_custom()
  }

  #[must_use]
  pub fn actual(&self) -> bool {
    self.actual
  }

  #[must_use]
  pub fn formal(&self) -> bool {
    self.formal
  }

  #[must_use]
  pub fn build(self) -> MethodDecl {
    let mut modifiers = self.modifiers;
    if self.formal {
      modifiers |= Modifiers::ABSTRACT;
    }

    let annotations = self
      .actual
      .then(|| Annotation::marker(JavaType::class(OVERRIDE_ANNOTATION)))
      .into_iter()
      .chain(self.annotations)
      .chain(self.result_annotations)
      .collect();

    let body = (!modifiers.intersects(Modifiers::ABSTRACT | Modifiers::NATIVE)).then(|| self.body.into_block());

    MethodDecl {
      modifiers,
      annotations,
      result: self.result,
      name: self.name,
      parameters: self.parameters,
      body,
    }
  }
}

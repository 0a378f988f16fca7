use strum::Display;
use tracing::{debug, trace, warn};

use super::{
  accessor::MethodDefinitionBuilder,
  class::ClassDefinitionBuilder,
  validation::{ConfigSnapshot, find_issues},
};
use crate::synth::{
  error::{Result, SynthesisError},
  model::{NonWideningType, TypeContext, TypedDeclaration},
  naming::{getter_name, setter_name},
  options::{LazyInitStrategy, ValidationMode},
  tree::{Annotation, Block, CatchClause, Decl, Expr, FieldDecl, JavaType, Modifiers, Name, Stmt, TypeFlags},
};

/// Storage field name used by [`AttributeDefinitionBuilder::wrapped`].
pub const WRAPPED_FIELD_NAME: &str = "value";

const FAULT_BINDING: &str = "ex";

const ACCESSOR_MODIFIERS: Modifiers = Modifiers::PUBLIC
  .union(Modifiers::PRIVATE)
  .union(Modifiers::ABSTRACT)
  .union(Modifiers::FINAL)
  .union(Modifiers::STATIC);

/// How the attribute's value is stored, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StorageShape {
  /// A field of the attribute's own type, read and written directly.
  Plain,
  /// A single-slot array that stays empty until the initializer completes. Reads of the empty
  /// slot are reported as recursive initialization.
  ToplevelLazy,
}

/// How the attribute's type is represented in the emitted members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErasurePolicy {
  Boxed,
  Unboxed,
  /// Narrow platform type, for attributes compiled onto accessors such as `int hashCode()`.
  Small,
}

impl ErasurePolicy {
  fn choose(decl: &TypedDeclaration, non_widening: &NonWideningType) -> Self {
    if decl.small {
      return Self::Small;
    }

    let primitive_compatible = non_widening
      .ty
      .language_type()
      .is_some_and(|language| language.is_primitive_compatible());

    if non_widening.unboxed && primitive_compatible {
      Self::Unboxed
    } else {
      Self::Boxed
    }
  }

  #[must_use]
  pub fn type_flags(self) -> TypeFlags {
    match self {
      Self::Boxed => TypeFlags::NO_PRIMITIVES,
      Self::Unboxed => TypeFlags::empty(),
      Self::Small => TypeFlags::SMALL_TYPE,
    }
  }
}

/// Construction inputs of an [`AttributeDefinitionBuilder`].
#[derive(Debug, Clone, bon::Builder)]
pub struct AttributeSpec<'d> {
  pub declaration: &'d TypedDeclaration,
  /// Emit a standalone holder class of this name instead of bare members.
  #[builder(into)]
  pub class_name: Option<String>,
  /// Public name, also used for the setter parameter.
  #[builder(into)]
  pub attr_name: String,
  /// Name of the storage field; differs from `attr_name` when a parameter would shadow it.
  #[builder(into)]
  pub field_name: String,
  #[builder(default)]
  pub toplevel: bool,
}

/// Synthesizes the storage field, getter and setter that realize one attribute.
///
/// Type, erasure and accessor names are resolved once by [`AttributeDefinitionBuilder::new`].
/// The configuration calls that follow consume and return the builder, and [`build`] or
/// [`append_definitions_to`] consume it for good.
///
/// [`build`]: AttributeDefinitionBuilder::build
/// [`append_definitions_to`]: AttributeDefinitionBuilder::append_definitions_to
pub struct AttributeDefinitionBuilder<'a> {
  owner: &'a dyn TypeContext,
  attr_name: String,
  field_name: String,
  class_name: Option<String>,
  shape: StorageShape,
  erasure: ErasurePolicy,
  attr_type: JavaType,
  attr_type_raw: JavaType,
  ancestor_local: bool,
  has_field: bool,
  readable: bool,
  writable: bool,
  modifiers: Modifiers,
  annotations: Vec<Annotation>,
  initial_value: Option<Expr>,
  getter: MethodDefinitionBuilder,
  setter: MethodDefinitionBuilder,
}

impl<'a> AttributeDefinitionBuilder<'a> {
  pub fn new(owner: &'a dyn TypeContext, spec: AttributeSpec<'_>) -> Result<Self> {
    let attribute = spec.attr_name.clone();
    Self::from_spec(owner, spec).map_err(|err| err.in_attribute(attribute))
  }

  /// A holder class named `name` whose value lives in a field called `value`.
  pub fn wrapped(owner: &'a dyn TypeContext, name: &str, decl: &TypedDeclaration, toplevel: bool) -> Result<Self> {
    Self::new(
      owner,
      AttributeSpec::builder()
        .declaration(decl)
        .class_name(name)
        .attr_name(name)
        .field_name(WRAPPED_FIELD_NAME)
        .toplevel(toplevel)
        .build(),
    )
  }

  /// A getter only. Storage is provided elsewhere.
  pub fn getter(owner: &'a dyn TypeContext, name: &str, decl: &TypedDeclaration) -> Result<Self> {
    Ok(Self::accessor_only(owner, name, decl)?.make_immutable())
  }

  /// A setter only. Storage is provided elsewhere.
  pub fn setter(owner: &'a dyn TypeContext, name: &str, decl: &TypedDeclaration) -> Result<Self> {
    Ok(Self::accessor_only(owner, name, decl)?.skip_read())
  }

  fn accessor_only(owner: &'a dyn TypeContext, name: &str, decl: &TypedDeclaration) -> Result<Self> {
    let spec = AttributeSpec::builder()
      .declaration(decl)
      .attr_name(name)
      .field_name(name)
      .build();
    Ok(Self::new(owner, spec)?.skip_field())
  }

  fn from_spec(owner: &'a dyn TypeContext, spec: AttributeSpec<'_>) -> Result<Self> {
    let AttributeSpec {
      declaration: decl,
      class_name,
      attr_name,
      field_name,
      toplevel,
    } = spec;

    let non_widening = owner.non_widening_type(decl)?;
    let erasure = ErasurePolicy::choose(decl, &non_widening);
    let flags = erasure.type_flags();
    let attr_type = owner.make_java_type(&non_widening.ty, flags)?;
    let attr_type_raw = owner.make_java_type(&non_widening.ty, flags | TypeFlags::WANT_RAW_TYPE)?;
    let shape = if toplevel {
      StorageShape::ToplevelLazy
    } else {
      StorageShape::Plain
    };

    trace!(
      attribute = %attr_name,
      ty = %non_widening.ty,
      %erasure,
      %shape,
      "resolved attribute representation"
    );

    let ancestor_local = decl.ancestor_local;

    let getter = MethodDefinitionBuilder::system_method(ancestor_local, getter_name(decl)?)
      .derived_block(default_getter_block(owner, shape, &field_name))
      .is_actual(decl.actual)
      .annotations(owner.make_at_annotations(&decl.annotations))
      .result_type(owner, attr_type.clone(), &non_widening.ty);

    let setter = MethodDefinitionBuilder::system_method(ancestor_local, setter_name(decl)?)
      .derived_block(default_setter_block(shape, &attr_name, &field_name, None))
      .is_actual(decl.setter_is_actual())
      .parameter(owner, &attr_name, attr_type.clone(), &non_widening.ty);

    Ok(Self {
      owner,
      attr_name,
      field_name,
      class_name,
      shape,
      erasure,
      attr_type,
      attr_type_raw,
      ancestor_local,
      has_field: true,
      readable: true,
      writable: true,
      modifiers: Modifiers::empty(),
      annotations: vec![],
      initial_value: None,
      getter,
      setter,
    })
  }

  #[must_use]
  pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
    self.class_name = Some(name.into());
    self
  }

  /// Replaces the modifier set.
  #[must_use]
  pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifiers>) -> Self {
    self.modifiers = modifiers.into_iter().collect();
    self
  }

  #[must_use]
  pub fn with_flag(mut self, flag: Modifiers, present: bool) -> Self {
    self.modifiers.set(flag, present);
    self
  }

  /// Appends holder class annotations. Dropped for ancestor-local attributes.
  #[must_use]
  pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
    if !self.ancestor_local {
      self.annotations.extend(annotations);
    }
    self
  }

  #[must_use]
  pub fn mark_formal(mut self, formal: bool) -> Self {
    self.getter = self.getter.is_formal(formal);
    self.setter = self.setter.is_formal(formal);
    self
  }

  #[must_use]
  pub fn skip_field(mut self) -> Self {
    self.has_field = false;
    self
  }

  /// Replaces the getter body. A getter that computes its value needs no field.
  #[must_use]
  pub fn with_read_body(mut self, body: Block) -> Self {
    self.getter = self.getter.custom_block(body);
    self.skip_field()
  }

  #[must_use]
  pub fn skip_read(mut self) -> Self {
    self.readable = false;
    self
  }

  #[must_use]
  pub fn with_write_body(mut self, body: Block) -> Self {
    self.setter = self.setter.custom_block(body);
    self
  }

  /// No setter. The field only becomes `final` if an initial value is supplied too.
  #[must_use]
  pub fn make_immutable(mut self) -> Self {
    self.writable = false;
    self
  }

  #[must_use]
  pub fn with_initial_value(mut self, value: Expr) -> Self {
    self.initial_value = Some(value);
    self
  }

  /// Clears the override marker of both accessors.
  #[must_use]
  pub fn mark_not_override(mut self) -> Self {
    self.getter = self.getter.is_actual(false);
    self.setter = self.setter.is_actual(false);
    self
  }

  /// Direct access to the getter for per-accessor settings the attribute-level calls do
  /// not cover.
  #[must_use]
  pub fn map_getter(mut self, f: impl FnOnce(MethodDefinitionBuilder) -> MethodDefinitionBuilder) -> Self {
    self.getter = f(self.getter);
    self
  }

  #[must_use]
  pub fn map_setter(mut self, f: impl FnOnce(MethodDefinitionBuilder) -> MethodDefinitionBuilder) -> Self {
    self.setter = f(self.setter);
    self
  }

  #[must_use]
  pub fn shape(&self) -> StorageShape {
    self.shape
  }

  #[must_use]
  pub fn erasure(&self) -> ErasurePolicy {
    self.erasure
  }

  #[must_use]
  pub fn attr_type(&self) -> &JavaType {
    &self.attr_type
  }

  #[must_use]
  pub fn attr_type_raw(&self) -> &JavaType {
    &self.attr_type_raw
  }

  #[must_use]
  pub fn modifiers(&self) -> Modifiers {
    self.modifiers
  }

  #[must_use]
  pub fn has_field(&self) -> bool {
    self.has_field
  }

  #[must_use]
  pub fn is_readable(&self) -> bool {
    self.readable
  }

  #[must_use]
  pub fn is_writable(&self) -> bool {
    self.writable
  }

  #[must_use]
  pub fn class_name(&self) -> Option<&str> {
    self.class_name.as_deref()
  }

  #[must_use]
  pub fn getter_builder(&self) -> &MethodDefinitionBuilder {
    &self.getter
  }

  #[must_use]
  pub fn setter_builder(&self) -> &MethodDefinitionBuilder {
    &self.setter
  }

  /// Finalizes the attribute: a holder class when a class name is set, the bare members
  /// otherwise.
  pub fn build(mut self) -> Result<Vec<Decl>> {
    let class_name = self.class_name.take();
    let holder = class_name.as_ref().map(|name| {
      let marker = if self.ancestor_local {
        vec![]
      } else {
        self.owner.make_at_attribute()
      };
      ClassDefinitionBuilder::klass(Name::new(name))
        .modifiers(Modifiers::FINAL | (self.modifiers & (Modifiers::PUBLIC | Modifiers::PRIVATE)))
        .constructor_modifiers(Modifiers::PRIVATE)
        .annotations(marker)
        .annotations(std::mem::take(&mut self.annotations))
    });

    let mut defs = vec![];
    self.append_members(&mut defs, class_name.as_deref())?;

    Ok(match holder {
      Some(holder) => holder.defs(defs).build(),
      None => defs,
    })
  }

  /// Appends field, initializer, getter and setter, in that order, whatever the class name.
  pub fn append_definitions_to(self, defs: &mut Vec<Decl>) -> Result<()> {
    self.append_members(defs, None)
  }

  /// `holder` is the class the members land in, when this builder emits it.
  fn append_members(mut self, defs: &mut Vec<Decl>, holder: Option<&str>) -> Result<()> {
    if let Some(holder) = holder
      && self.shadows_static_field()
    {
      let block = default_setter_block(self.shape, &self.attr_name, &self.field_name, Some(holder));
      self.setter = self.setter.derived_block(block);
    }
    self.validate(holder.is_some())?;

    let accessor_modifiers = self.accessor_modifiers();
    let start = defs.len();

    if self.has_field {
      defs.push(Decl::Field(self.field_decl()));
      if let Some(value) = &self.initial_value {
        defs.push(Decl::Initializer(self.field_init(value.clone())));
      }
    }

    if self.readable {
      defs.push(Decl::Method(self.getter.modifiers(accessor_modifiers).build()));
    }

    if self.writable {
      defs.push(Decl::Method(self.setter.modifiers(accessor_modifiers).build()));
    }

    debug!(
      attribute = %self.attr_name,
      members = defs.len() - start,
      "synthesized attribute"
    );
    Ok(())
  }

  /// A static field named like the attribute, written by the derived setter, where `this` is
  /// unavailable.
  fn shadows_static_field(&self) -> bool {
    self.modifiers.contains(Modifiers::STATIC) && self.field_name == self.attr_name && !self.setter.has_custom_body()
  }

  fn validate(&self, qualified: bool) -> Result<()> {
    let issues = find_issues(ConfigSnapshot {
      has_field: self.has_field,
      readable: self.readable,
      writable: self.writable,
      custom_read: self.getter.has_custom_body(),
      custom_write: self.setter.has_custom_body(),
      has_initial_value: self.initial_value.is_some(),
      unqualified_static_write: !qualified && self.shadows_static_field(),
    });

    if issues.is_empty() {
      return Ok(());
    }

    match self.owner.options().validation {
      ValidationMode::Strict => Err(SynthesisError::InvalidConfiguration {
        attribute: self.attr_name.clone(),
        issues,
      }),
      ValidationMode::Lenient => {
        for issue in &issues {
          warn!(attribute = %self.attr_name, %issue, "emitting misconfigured attribute");
        }
        Ok(())
      }
    }
  }

  fn accessor_modifiers(&self) -> Modifiers {
    let mut modifiers = self.modifiers & ACCESSOR_MODIFIERS;
    if self.shape == StorageShape::ToplevelLazy && self.owner.options().lazy_init == LazyInitStrategy::Synchronized {
      modifiers |= Modifiers::SYNCHRONIZED;
    }
    modifiers
  }

  fn field_decl(&self) -> FieldDecl {
    let mut modifiers = Modifiers::PRIVATE | (self.modifiers & Modifiers::STATIC);
    if !self.writable && self.initial_value.is_some() {
      modifiers |= Modifiers::FINAL;
    }

    let ty = match self.shape {
      StorageShape::Plain => self.attr_type.clone(),
      StorageShape::ToplevelLazy => self.attr_type.clone().array_of(),
    };

    FieldDecl::builder()
      .modifiers(modifiers)
      .ty(ty)
      .name(Name::quoted(&self.field_name))
      .build()
  }

  /// The field assignment, in a block of its own so it lands in the static or instance
  /// initializer matching the field.
  fn field_init(&self, value: Expr) -> Block {
    let value = match self.shape {
      StorageShape::Plain => value,
      StorageShape::ToplevelLazy => Expr::new_array(self.attr_type_raw.clone(), vec![value]),
    };
    let assign = Expr::Ident(Name::quoted(&self.field_name)).assign(value);
    Block::of(Stmt::Expr(assign)).with_static(self.modifiers.contains(Modifiers::STATIC))
  }
}

fn field_slot(shape: StorageShape, field: Expr) -> Expr {
  match shape {
    StorageShape::Plain => field,
    StorageShape::ToplevelLazy => field.indexed(Expr::int(0)),
  }
}

fn default_getter_block(owner: &dyn TypeContext, shape: StorageShape, field_name: &str) -> Block {
  let read = Block::of(Stmt::returning(field_slot(
    shape,
    Expr::Ident(Name::quoted(field_name)),
  )));

  match shape {
    StorageShape::Plain => read,
    // The slot is allocated before the initializer runs and filled after it returns, so an
    // empty slot means the value was read from inside its own initialization.
    StorageShape::ToplevelLazy => Block::of(Stmt::Try {
      body: read,
      catches: vec![CatchClause {
        fault_type: owner.null_pointer_fault(),
        binding: Name::new(FAULT_BINDING),
        body: Block::of(Stmt::Throw(Expr::new_class(owner.recursive_initialization_fault(), vec![]))),
      }],
      finally: None,
    }),
  }
}

/// `holder` qualifies a static field that the parameter shadows.
fn default_setter_block(shape: StorageShape, attr_name: &str, field_name: &str, holder: Option<&str>) -> Block {
  let field = match holder {
    _ if field_name != attr_name => Expr::Ident(Name::quoted(field_name)),
    Some(holder) => Expr::select(Expr::Ident(Name::new(holder)), Name::quoted(field_name)),
    None => Expr::this_select(Name::quoted(field_name)),
  };
  let assign = field_slot(shape, field).assign(Expr::Ident(Name::quoted(attr_name)));
  Block::of(Stmt::Expr(assign))
}

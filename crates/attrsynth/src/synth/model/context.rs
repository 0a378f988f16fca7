use super::{
  declaration::{ModelAnnotation, TypedDeclaration},
  types::{LanguageType, SemanticType},
};
use crate::synth::{
  error::{Result, SynthesisError},
  options::SynthesisOptions,
  tree::{Annotation, Expr, JavaType, PrimitiveType, TypeFlags},
};

const OBJECT_TYPE: &str = "java.lang.Object";
const STRING_TYPE: &str = "java.lang.String";
const NULL_POINTER_FAULT: &str = "java.lang.NullPointerException";

/// The type an attribute's storage and accessors are declared with, before erasure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonWideningType {
  pub ty: SemanticType,
  pub unboxed: bool,
}

/// The type checker's view as the synthesizer consumes it: type queries, erasure, and the
/// metadata annotations that record what erasure loses.
///
/// Only the queries are required. The annotation and fault helpers derive from
/// [`TypeContext::options`].
pub trait TypeContext {
  fn options(&self) -> &SynthesisOptions;

  /// The most specific type the declaration holds, with the boxing its signatures must use.
  fn non_widening_type(&self, decl: &TypedDeclaration) -> Result<NonWideningType>;

  fn make_java_type(&self, ty: &SemanticType, flags: TypeFlags) -> Result<JavaType>;

  fn metadata_type(&self, simple_name: &str) -> JavaType {
    JavaType::class(format!("{}.{simple_name}", self.options().metadata_package))
  }

  /// Marks a holder class as the home of an attribute.
  fn make_at_attribute(&self) -> Vec<Annotation> {
    vec![Annotation::marker(self.metadata_type("Attribute"))]
  }

  fn make_at_name(&self, name: &str) -> Annotation {
    Annotation::with_value(self.metadata_type("Name"), Expr::string(name))
  }

  /// `@TypeInfo("...")`, only for types whose erasure drops information.
  fn make_at_type_info(&self, ty: &SemanticType) -> Option<Annotation> {
    ty.needs_type_info()
      .then(|| Annotation::with_value(self.metadata_type("TypeInfo"), Expr::string(ty.to_string())))
  }

  /// Source annotations, packed into a single `@Annotations({...})`.
  fn make_at_annotations(&self, annotations: &[ModelAnnotation]) -> Vec<Annotation> {
    if annotations.is_empty() {
      return vec![];
    }

    let entries = annotations
      .iter()
      .map(|annotation| {
        let arguments = annotation.arguments.iter().map(Expr::string).collect();
        Expr::Annotation(Box::new(
          Annotation::marker(self.metadata_type("Annotation"))
            .argument("value", Expr::string(&annotation.name))
            .argument("arguments", Expr::ArrayInit(arguments)),
        ))
      })
      .collect();

    vec![Annotation::with_value(
      self.metadata_type("Annotations"),
      Expr::ArrayInit(entries),
    )]
  }

  fn recursive_initialization_fault(&self) -> JavaType {
    JavaType::class(self.options().recursive_initialization_fault.as_str())
  }

  fn null_pointer_fault(&self) -> JavaType {
    JavaType::class(NULL_POINTER_FAULT)
  }
}

/// The stock context: erases language value types to primitives or to their boxed classes
/// in the configured language package, and everything else to its dotted class name.
#[derive(Debug, Clone, Default)]
pub struct LanguageTypeContext {
  options: SynthesisOptions,
}

impl LanguageTypeContext {
  #[must_use]
  pub fn new(options: SynthesisOptions) -> Self {
    Self { options }
  }

  fn small_form(ty: &SemanticType, language: Option<LanguageType>) -> Result<JavaType> {
    match language {
      Some(language) if language.has_small_form() && !ty.optional => Ok(match language {
        LanguageType::Float => PrimitiveType::Float.into(),
        _ => PrimitiveType::Int.into(),
      }),
      _ => Err(SynthesisError::SmallTypeMismatch { ty: ty.to_string() }),
    }
  }

  fn primitive_form(language: LanguageType) -> JavaType {
    match language {
      LanguageType::Integer => PrimitiveType::Long.into(),
      LanguageType::Float => PrimitiveType::Double.into(),
      LanguageType::Boolean => PrimitiveType::Boolean.into(),
      LanguageType::Character => PrimitiveType::Int.into(),
      LanguageType::Byte => PrimitiveType::Byte.into(),
      LanguageType::String => JavaType::class(STRING_TYPE),
      LanguageType::Object | LanguageType::Anything | LanguageType::Nothing => JavaType::class(OBJECT_TYPE),
    }
  }
}

impl TypeContext for LanguageTypeContext {
  fn options(&self) -> &SynthesisOptions {
    &self.options
  }

  fn non_widening_type(&self, decl: &TypedDeclaration) -> Result<NonWideningType> {
    if !decl.ty.is_resolved() {
      return Err(SynthesisError::UnresolvedType {
        ty: decl.ty.to_string(),
      });
    }

    // A refinement keeps its own type but must erase like the refined signature, or the
    // emitted accessors would overload instead of override.
    let unboxed = match &decl.refined {
      Some(refined) if decl.actual && refined.ty == decl.ty => refined.unboxed,
      _ => decl.unboxed,
    };

    Ok(NonWideningType {
      ty: decl.ty.clone(),
      unboxed,
    })
  }

  fn make_java_type(&self, ty: &SemanticType, flags: TypeFlags) -> Result<JavaType> {
    if !ty.is_resolved() {
      return Err(SynthesisError::UnresolvedType { ty: ty.to_string() });
    }

    let language = ty.language_type();

    if flags.contains(TypeFlags::SMALL_TYPE) {
      return Self::small_form(ty, language);
    }

    match language {
      Some(language) if language.is_top() => Ok(JavaType::class(OBJECT_TYPE)),
      Some(language) if !ty.optional && !flags.contains(TypeFlags::NO_PRIMITIVES) => Ok(Self::primitive_form(language)),
      Some(language) => Ok(JavaType::class(format!("{}.{language}", self.options.language_package))),
      None => {
        let name = ty.name.replace("::", ".");
        if flags.contains(TypeFlags::WANT_RAW_TYPE) || ty.type_arguments.is_empty() {
          return Ok(JavaType::class(name));
        }
        let arguments = ty
          .type_arguments
          .iter()
          .map(|argument| self.make_java_type(argument, TypeFlags::NO_PRIMITIVES))
          .collect::<Result<Vec<_>>>()?;
        Ok(JavaType::generic(name, arguments))
      }
    }
  }
}

use super::identifiers::{capitalize, is_valid_java_identifier};
use crate::synth::{
  error::{AccessorKind, Result, SynthesisError},
  model::TypedDeclaration,
  tree::Name,
};

/// Members of the root object type whose refinements keep the platform's own method names.
const ROOT_OBJECT_GETTERS: &[(&str, &str)] = &[("hash", "hashCode"), ("string", "toString")];

/// Getter name for `decl`, honouring a name the declaration already fixed.
pub fn getter_name(decl: &TypedDeclaration) -> Result<Name> {
  if let Some(fixed) = &decl.naming.getter {
    return checked(AccessorKind::Getter, fixed);
  }

  if decl.actual
    && let Some((_, platform)) = ROOT_OBJECT_GETTERS.iter().find(|(name, _)| *name == decl.name)
  {
    return Ok(Name::new(platform));
  }

  Ok(Name::new(format!("get{}", capitalize(&decl.name))))
}

/// Setter name for `decl`, honouring a name the declaration already fixed.
pub fn setter_name(decl: &TypedDeclaration) -> Result<Name> {
  if let Some(fixed) = &decl.naming.setter {
    return checked(AccessorKind::Setter, fixed);
  }

  Ok(Name::new(format!("set{}", capitalize(&decl.name))))
}

fn checked(kind: AccessorKind, name: &str) -> Result<Name> {
  if is_valid_java_identifier(name) {
    Ok(Name::new(name))
  } else {
    Err(SynthesisError::InvalidAccessorName {
      kind,
      name: name.to_string(),
    })
  }
}

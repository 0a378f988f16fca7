use quote::{ToTokens, quote};

use super::{kinds, member, rendered, strict, synchronized, toplevel, value, variable};
use crate::synth::{
  builder::{AttributeDefinitionBuilder, AttributeSpec, ErasurePolicy, StorageShape, WRAPPED_FIELD_NAME},
  error::SynthesisError,
  model::{ModelAnnotation, RefinedDeclaration, SemanticType, TypedDeclaration},
  tree::{Annotation, Block, Decl, Expr, FieldDecl, JavaType, MethodDecl, Modifiers, PrimitiveType, Stmt},
};

fn field_of(decls: &[Decl]) -> Option<&FieldDecl> {
  decls.iter().find_map(Decl::as_field)
}

fn methods(decls: &[Decl]) -> Vec<&MethodDecl> {
  decls.iter().filter_map(Decl::as_method).collect()
}

#[test]
fn test_emission_follows_flags() {
  let context = strict();
  let decl = variable("count", "Integer");

  let everything = member(&context, &decl).build().unwrap();
  assert_eq!(kinds(&everything), ["field", "method", "method"]);

  let no_field = member(&context, &decl).skip_field().build().unwrap();
  assert_eq!(kinds(&no_field), ["method", "method"]);

  let no_read = member(&context, &decl).skip_read().build().unwrap();
  assert_eq!(kinds(&no_read), ["field", "method"]);
  assert_eq!(methods(&no_read)[0].name, "setCount");

  let no_write = member(&context, &decl).make_immutable().build().unwrap();
  assert_eq!(kinds(&no_write), ["field", "method"]);
  assert_eq!(methods(&no_write)[0].name, "getCount");

  let nothing = member(&context, &decl)
    .skip_field()
    .skip_read()
    .make_immutable()
    .build()
    .unwrap();
  assert!(nothing.is_empty());
}

#[test]
fn test_field_is_final_only_when_immutable_and_initialized() {
  let context = strict();
  let decl = variable("count", "Integer");

  let cases = [(false, false, false), (false, true, false), (true, false, false), (true, true, true)];
  for (immutable, initialized, expected) in cases {
    let mut builder = member(&context, &decl);
    if immutable {
      builder = builder.make_immutable();
    }
    if initialized {
      builder = builder.with_initial_value(Expr::int(1));
    }
    let decls = builder.build().unwrap();
    assert_eq!(
      field_of(&decls).unwrap().is_final(),
      expected,
      "immutable={immutable} initialized={initialized}"
    );
  }
}

#[test]
fn test_custom_read_body_always_skips_field() {
  let context = strict();
  let decl = value("answer", "Integer");
  let body = Block::of(Stmt::returning(Expr::int(42)));

  let builder = member(&context, &decl)
    .with_read_body(body.clone())
    .make_immutable()
    .with_modifiers([Modifiers::PUBLIC]);
  assert!(!builder.has_field());
  assert!(builder.getter_builder().has_custom_body());
  assert_eq!(builder.getter_builder().body().block(), &body);

  let decls = builder.build().unwrap();
  assert!(field_of(&decls).is_none());
  assert_eq!(
    rendered(&decls),
    quote! { public long getAnswer() { return 42; } }.to_string()
  );
}

#[test]
fn test_plain_accessors_read_and_write_field_directly() {
  let context = strict();
  let decl = variable("count", "Integer");

  let decls = member(&context, &decl).build().unwrap();
  assert_eq!(
    rendered(&decls),
    quote! {
      private long count;
      long getCount() { return count; }
      void setCount(@com.redhat.ceylon.compiler.java.metadata.Name("count") final long count) {
        this.count = count;
      }
    }
    .to_string()
  );
}

#[test]
fn test_distinct_field_name_is_not_qualified() {
  let context = strict();
  let decl = variable("count", "Integer");

  let decls = AttributeDefinitionBuilder::new(
    &context,
    AttributeSpec::builder()
      .declaration(&decl)
      .attr_name("count")
      .field_name("count$")
      .build(),
  )
  .unwrap()
  .build()
  .unwrap();

  let setter = methods(&decls)[1].to_token_stream().to_string();
  assert!(setter.contains(&quote! { count_ = count; }.to_string()), "{setter}");
  assert!(!setter.contains("this"), "{setter}");
}

#[test]
fn test_reserved_word_names_are_quoted() {
  let context = strict();
  let decl = variable("default", "Integer");

  let decls = member(&context, &decl).build().unwrap();
  assert_eq!(
    rendered(&decls),
    quote! {
      private long _default;
      long getDefault() { return _default; }
      void setDefault(@com.redhat.ceylon.compiler.java.metadata.Name("default") final long _default) {
        this._default = _default;
      }
    }
    .to_string()
  );
}

#[test]
fn test_toplevel_storage_shape() {
  let context = strict();
  let decl = value("limit", "Integer");

  let builder = toplevel(&context, &decl, "value").make_immutable();
  assert_eq!(builder.shape(), StorageShape::ToplevelLazy);

  let decls = builder.with_initial_value(Expr::int(3)).build().unwrap();
  let field = field_of(&decls).unwrap();
  assert_eq!(field.ty, JavaType::from(PrimitiveType::Long).array_of());
  assert!(field.is_final());
  assert_eq!(
    decls[1].to_token_stream().to_string(),
    quote! { { value = new long[] { 3 }; } }.to_string()
  );
}

#[test]
fn test_toplevel_generic_array_uses_raw_type() {
  let context = strict();
  let decl = TypedDeclaration::builder()
    .name("names")
    .ty(SemanticType::generic("ceylon.collection::ArrayList", vec![SemanticType::new("String")]))
    .build();

  let builder = toplevel(&context, &decl, "value");
  assert_eq!(builder.attr_type_raw(), &JavaType::class("ceylon.collection.ArrayList"));

  let decls = builder
    .make_immutable()
    .with_initial_value(Expr::ident("seed"))
    .build()
    .unwrap();
  assert_eq!(
    rendered(&decls[..2]),
    quote! {
      private final ceylon.collection.ArrayList<ceylon.language.String>[] value;
      { value = new ceylon.collection.ArrayList[] { seed }; }
    }
    .to_string()
  );

  let getter = decls[2].as_method().unwrap();
  assert!(getter.has_annotation("TypeInfo"));
}

#[test]
fn test_synchronized_strategy_guards_toplevel_accessors_only() {
  let context = synchronized();
  let decl = variable("count", "Integer");

  let lazy = toplevel(&context, &decl, "value").build().unwrap();
  assert!(
    methods(&lazy)
      .iter()
      .all(|method| method.modifiers.contains(Modifiers::SYNCHRONIZED))
  );

  let plain = member(&context, &decl).build().unwrap();
  assert!(
    methods(&plain)
      .iter()
      .all(|method| !method.modifiers.contains(Modifiers::SYNCHRONIZED))
  );
}

#[test]
fn test_modifiers_split_between_field_and_accessors() {
  let context = strict();
  let decl = variable("count", "Integer");

  let spec = AttributeSpec::builder()
    .declaration(&decl)
    .attr_name("count")
    .field_name("count$")
    .build();

  let decls = AttributeDefinitionBuilder::new(&context, spec)
    .unwrap()
    .with_modifiers([Modifiers::PUBLIC, Modifiers::STATIC, Modifiers::FINAL, Modifiers::VOLATILE])
    .build()
    .unwrap();

  assert_eq!(field_of(&decls).unwrap().modifiers, Modifiers::PRIVATE | Modifiers::STATIC);
  for method in methods(&decls) {
    assert_eq!(
      method.modifiers,
      Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
      "{}",
      method.name
    );
  }
}

#[test]
fn test_with_modifiers_replaces_and_with_flag_toggles() {
  let context = strict();
  let decl = value("count", "Integer");

  let builder = member(&context, &decl)
    .with_modifiers([Modifiers::PUBLIC, Modifiers::STATIC])
    .with_modifiers([Modifiers::PRIVATE]);
  assert_eq!(builder.modifiers(), Modifiers::PRIVATE);

  let builder = builder.with_flag(Modifiers::STATIC, true).with_flag(Modifiers::PRIVATE, false);
  assert_eq!(builder.modifiers(), Modifiers::STATIC);
}

#[test]
fn test_setter_override_requires_variable_refined_declaration() {
  let context = strict();
  let refined = RefinedDeclaration::builder()
    .container("a::Base")
    .ty(SemanticType::new("Integer"))
    .unboxed(true)
    .build();

  let over_variable = TypedDeclaration {
    actual: true,
    refined: Some(RefinedDeclaration {
      variable: true,
      ..refined.clone()
    }),
    ..variable("count", "Integer")
  };
  let builder = member(&context, &over_variable);
  assert!(builder.getter_builder().actual());
  assert!(builder.setter_builder().actual());

  let over_immutable = TypedDeclaration {
    actual: true,
    refined: Some(refined),
    ..variable("count", "Integer")
  };
  let builder = member(&context, &over_immutable);
  assert!(builder.getter_builder().actual());
  assert!(!builder.setter_builder().actual());

  let decls = builder.build().unwrap();
  let methods = methods(&decls);
  assert!(methods[0].has_annotation("Override"));
  assert!(!methods[1].has_annotation("Override"));
}

#[test]
fn test_mark_not_override_clears_both_accessors() {
  let context = strict();
  let decl = TypedDeclaration {
    actual: true,
    ..variable("count", "Integer")
  };

  let builder = member(&context, &decl);
  assert!(builder.getter_builder().actual());
  assert!(builder.setter_builder().actual());

  let builder = builder.mark_not_override();
  assert!(!builder.getter_builder().actual());
  assert!(!builder.setter_builder().actual());

  let decls = builder.build().unwrap();
  assert!(methods(&decls).iter().all(|method| !method.has_annotation("Override")));
}

#[test]
fn test_accessors_can_be_adjusted_individually() {
  let context = strict();
  let decl = TypedDeclaration {
    actual: true,
    ..variable("count", "Integer")
  };

  let builder = member(&context, &decl).map_setter(|setter| setter.is_actual(false));
  assert!(builder.getter_builder().actual());
  assert!(!builder.setter_builder().actual());
}

#[test]
fn test_formal_accessors_are_abstract() {
  let context = strict();
  let decl = variable("count", "Integer");

  let decls = member(&context, &decl)
    .skip_field()
    .mark_formal(true)
    .with_modifiers([Modifiers::PUBLIC])
    .build()
    .unwrap();

  assert_eq!(
    rendered(&decls),
    quote! {
      public abstract long getCount();
      public abstract void setCount(@com.redhat.ceylon.compiler.java.metadata.Name("count") final long count);
    }
    .to_string()
  );
}

#[test]
fn test_small_attribute_erases_narrow() {
  let context = strict();
  let decl = TypedDeclaration {
    actual: true,
    small: true,
    ..value("hash", "Integer")
  };

  let builder = member(&context, &decl);
  assert_eq!(builder.erasure(), ErasurePolicy::Small);
  assert_eq!(builder.attr_type(), &JavaType::from(PrimitiveType::Int));

  let decls = builder
    .skip_field()
    .with_read_body(Block::of(Stmt::returning(Expr::int(7))))
    .make_immutable()
    .with_modifiers([Modifiers::PUBLIC])
    .build()
    .unwrap();
  assert_eq!(
    rendered(&decls),
    quote! { @java.lang.Override public int hashCode() { return 7; } }.to_string()
  );
}

#[test]
fn test_erasure_policy_selection() {
  let context = strict();

  let boxed = TypedDeclaration::builder()
    .name("count")
    .ty(SemanticType::new("Integer"))
    .build();
  let builder = member(&context, &boxed);
  assert_eq!(builder.erasure(), ErasurePolicy::Boxed);
  assert_eq!(builder.attr_type(), &JavaType::class("ceylon.language.Integer"));

  let unboxed = value("count", "Integer");
  assert_eq!(member(&context, &unboxed).erasure(), ErasurePolicy::Unboxed);

  // The unboxed flag is meaningless for types without a primitive form.
  let object = value("thing", "a::Thing");
  let builder = member(&context, &object);
  assert_eq!(builder.erasure(), ErasurePolicy::Boxed);
  assert_eq!(builder.attr_type(), &JavaType::class("a.Thing"));
}

#[test]
fn test_declared_annotations_go_on_getter() {
  let context = strict();
  let decl = TypedDeclaration {
    annotations: vec![ModelAnnotation::builder().name("shared").build()],
    ..variable("count", "Integer")
  };

  let decls = member(&context, &decl).skip_field().build().unwrap();
  let methods = methods(&decls);
  assert!(methods[0].has_annotation("Annotations"));
  assert!(!methods[1].has_annotation("Annotations"));
}

#[test]
fn test_ancestor_local_suppresses_metadata() {
  let context = strict();
  let decl = TypedDeclaration {
    ancestor_local: true,
    annotations: vec![ModelAnnotation::builder().name("shared").build()],
    ..variable("count", "Integer")
  };

  let decls = member(&context, &decl)
    .with_class_name("count_")
    .with_annotations(vec![Annotation::marker(JavaType::class("a.Marker"))])
    .build()
    .unwrap();

  let class = decls[0].as_class().unwrap();
  assert!(class.annotations.is_empty());
  assert_eq!(
    rendered(&class.members),
    quote! {
      private long count;
      long getCount() { return count; }
      void setCount(final long count) { this.count = count; }
    }
    .to_string()
  );
}

#[test]
fn test_holder_class_modifiers_and_annotations() {
  let context = strict();
  let decl = value("count", "Integer");

  let decls = member(&context, &decl)
    .with_class_name("count_")
    .with_modifiers([Modifiers::PUBLIC, Modifiers::STATIC])
    .with_annotations(vec![Annotation::marker(JavaType::class("a.Marker"))])
    .make_immutable()
    .build()
    .unwrap();

  let class = decls[0].as_class().unwrap();
  assert_eq!(class.modifiers, Modifiers::PUBLIC | Modifiers::FINAL);
  assert_eq!(class.constructor.modifiers, Modifiers::PRIVATE);
  let names: Vec<_> = class.annotations.iter().filter_map(Annotation::simple_name).collect();
  assert_eq!(names, ["Attribute", "Marker"]);
}

#[test]
fn test_wrapped_and_flat_output_have_same_members() {
  let context = strict();
  let decl = variable("count", "Integer");

  let wrapped = member(&context, &decl)
    .with_class_name("count_")
    .with_initial_value(Expr::int(0))
    .build()
    .unwrap();

  let mut flat = vec![];
  member(&context, &decl)
    .with_class_name("count_")
    .with_initial_value(Expr::int(0))
    .append_definitions_to(&mut flat)
    .unwrap();

  assert_eq!(kinds(&flat), ["field", "initializer", "method", "method"]);
  assert_eq!(wrapped[0].as_class().unwrap().members, flat);
}

#[test]
fn test_append_definitions_keeps_existing_members() {
  let context = strict();
  let decl = value("count", "Integer");

  let mut defs = vec![Decl::Initializer(Block::default())];
  member(&context, &decl)
    .make_immutable()
    .append_definitions_to(&mut defs)
    .unwrap();
  assert_eq!(kinds(&defs), ["initializer", "field", "method"]);
}

#[test]
fn test_wrapped_factory() {
  let context = strict();
  let decl = variable("count", "Integer");

  let builder = AttributeDefinitionBuilder::wrapped(&context, "count_", &decl, true).unwrap();
  assert_eq!(builder.class_name(), Some("count_"));
  assert_eq!(builder.shape(), StorageShape::ToplevelLazy);

  let decls = builder.build().unwrap();
  let class = decls[0].as_class().unwrap();
  assert_eq!(class.name, "count_");
  assert_eq!(field_of(&class.members).unwrap().name, WRAPPED_FIELD_NAME);

  let setter = methods(&class.members)[1].to_token_stream().to_string();
  assert!(setter.contains(&quote! { value[0] = count_; }.to_string()), "{setter}");
}

#[test]
fn test_getter_and_setter_factories() {
  let context = strict();
  let decl = variable("count", "Integer");

  let getter = AttributeDefinitionBuilder::getter(&context, "count", &decl).unwrap();
  assert!(!getter.has_field());
  assert!(getter.is_readable());
  assert!(!getter.is_writable());
  let decls = getter.build().unwrap();
  assert_eq!(kinds(&decls), ["method"]);
  assert_eq!(methods(&decls)[0].name, "getCount");

  let setter = AttributeDefinitionBuilder::setter(&context, "count", &decl).unwrap();
  assert!(!setter.has_field());
  assert!(!setter.is_readable());
  assert!(setter.is_writable());
  let decls = setter.build().unwrap();
  assert_eq!(kinds(&decls), ["method"]);
  assert_eq!(methods(&decls)[0].name, "setCount");
}

#[test]
fn test_construction_errors_name_the_attribute() {
  let context = strict();

  let unresolved = value("broken", "");
  let err = AttributeDefinitionBuilder::getter(&context, "broken", &unresolved)
    .err()
    .unwrap();
  assert!(matches!(err, SynthesisError::Attribute { ref attribute, .. } if attribute == "broken"));
  assert!(matches!(err.root(), SynthesisError::UnresolvedType { .. }));

  let small_string = TypedDeclaration {
    small: true,
    ..value("label", "String")
  };
  let err = AttributeDefinitionBuilder::getter(&context, "label", &small_string)
    .err()
    .unwrap();
  assert!(matches!(err.root(), SynthesisError::SmallTypeMismatch { .. }));
}

#[test]
fn test_optional_type_carries_type_info() {
  let context = strict();
  let decl = TypedDeclaration::builder()
    .name("label")
    .ty(SemanticType::new("String").with_optional())
    .variable(true)
    .build();

  let decls = member(&context, &decl).skip_field().build().unwrap();
  assert_eq!(
    rendered(&decls),
    quote! {
      @com.redhat.ceylon.compiler.java.metadata.TypeInfo("String?")
      ceylon.language.String getLabel() { return label; }
      void setLabel(
        @com.redhat.ceylon.compiler.java.metadata.Name("label")
        @com.redhat.ceylon.compiler.java.metadata.TypeInfo("String?")
        final ceylon.language.String label
      ) { this.label = label; }
    }
    .to_string()
  );
}

use quote::quote;

use super::{kinds, lenient, member, rendered, strict, toplevel, value, variable};
use crate::synth::{
  error::{ConfigIssue, SynthesisError},
  tree::{Block, Expr, Modifiers, Stmt},
};

#[test]
fn test_immutable_member_with_initial_value() {
  let context = strict();
  let decl = value("count", "Integer");

  let decls = member(&context, &decl)
    .make_immutable()
    .with_initial_value(Expr::int(5))
    .build()
    .unwrap();

  assert_eq!(kinds(&decls), ["field", "initializer", "method"]);
  assert_eq!(
    rendered(&decls),
    quote! {
      private final long count;
      { count = 5; }
      long getCount() { return count; }
    }
    .to_string()
  );
}

#[test]
fn test_mutable_toplevel_with_initial_value() {
  let context = strict();
  let decl = variable("greeting", "String");

  let decls = toplevel(&context, &decl, "value")
    .with_modifiers([Modifiers::PUBLIC, Modifiers::STATIC])
    .with_initial_value(Expr::string("x"))
    .build()
    .unwrap();

  assert_eq!(kinds(&decls), ["field", "initializer", "method", "method"]);
  assert_eq!(
    rendered(&decls),
    quote! {
      private static java.lang.String[] value;
      static { value = new java.lang.String[] { "x" }; }
      public static java.lang.String getGreeting() {
        try {
          return value[0];
        } catch (java.lang.NullPointerException ex) {
          throw new com.redhat.ceylon.compiler.java.language.RecursiveInitializationException();
        }
      }
      public static void setGreeting(@com.redhat.ceylon.compiler.java.metadata.Name("greeting") final java.lang.String greeting) {
        value[0] = greeting;
      }
    }
    .to_string()
  );
}

#[test]
fn test_custom_getter_with_default_setter_is_rejected() {
  let context = strict();
  let decl = variable("answer", "Integer");

  let err = member(&context, &decl)
    .skip_field()
    .with_read_body(Block::of(Stmt::returning(Expr::int(42))))
    .build()
    .unwrap_err();

  assert!(matches!(
    err,
    SynthesisError::InvalidConfiguration { ref attribute, ref issues }
      if attribute == "answer" && issues == &[ConfigIssue::UnbackedWrite]
  ));
}

#[test]
fn test_custom_getter_with_default_setter_is_emitted_when_lenient() {
  let context = lenient();
  let decl = variable("answer", "Integer");

  let decls = member(&context, &decl)
    .skip_field()
    .with_read_body(Block::of(Stmt::returning(Expr::int(42))))
    .build()
    .unwrap();

  assert_eq!(kinds(&decls), ["method", "method"]);
  assert_eq!(
    rendered(&decls),
    quote! {
      long getAnswer() { return 42; }
      void setAnswer(@com.redhat.ceylon.compiler.java.metadata.Name("answer") final long answer) {
        this.answer = answer;
      }
    }
    .to_string()
  );
}

#[test]
fn test_class_name_wraps_members() {
  let context = strict();
  let decl = value("foo", "Integer");

  let decls = member(&context, &decl)
    .with_class_name("Foo")
    .make_immutable()
    .build()
    .unwrap();

  assert_eq!(decls.len(), 1);
  let class = decls[0].as_class().unwrap();
  assert_eq!(class.name, "Foo");
  assert!(class.modifiers.contains(Modifiers::FINAL));
  assert!(!class.constructor.modifiers.contains(Modifiers::PUBLIC));
  assert!(class.has_annotation("Attribute"));
  assert_eq!(kinds(&class.members), ["field", "method"]);
  assert_eq!(
    rendered(&decls),
    quote! {
      @com.redhat.ceylon.compiler.java.metadata.Attribute
      final class Foo {
        private Foo() {}
        private long foo;
        long getFoo() { return foo; }
      }
    }
    .to_string()
  );
}

use bitflags::bitflags;
use proc_macro2::{Ident, Span, TokenStream};
use quote::ToTokens;
use serde::{Deserialize, Serialize};

bitflags! {
  /// Declaration modifiers of the emitted members.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
  pub struct Modifiers: u32 {
    const PUBLIC       = 1 << 0;
    const PRIVATE      = 1 << 1;
    const PROTECTED    = 1 << 2;
    const STATIC       = 1 << 3;
    const FINAL        = 1 << 4;
    const SYNCHRONIZED = 1 << 5;
    const VOLATILE     = 1 << 6;
    const TRANSIENT    = 1 << 7;
    const NATIVE       = 1 << 8;
    const ABSTRACT     = 1 << 10;
  }
}

impl Modifiers {
  /// Canonical source order, which is also the render order.
  const KEYWORDS: [(Modifiers, &'static str); 10] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
  ];

  pub fn keywords(self) -> impl Iterator<Item = &'static str> {
    Self::KEYWORDS
      .into_iter()
      .filter(move |(flag, _)| self.contains(*flag))
      .map(|(_, keyword)| keyword)
  }
}

impl ToTokens for Modifiers {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for keyword in self.keywords() {
      Ident::new(keyword, Span::call_site()).to_tokens(tokens);
    }
  }
}

bitflags! {
  /// Rendering requests understood by [`crate::synth::model::TypeContext::make_java_type`].
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  pub struct TypeFlags: u32 {
    /// Never render a language value type as a primitive.
    const NO_PRIMITIVES = 1 << 0;
    /// Render integral and floating values in their narrow representation.
    const SMALL_TYPE    = 1 << 1;
    /// Drop type arguments.
    const WANT_RAW_TYPE = 1 << 2;
  }
}

use proc_macro2::{Literal as TokenLiteral, TokenStream};
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};

use super::{annotations::Annotation, names::Name, types::JavaType};

/// A literal value of the target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
  Int(i32),
  Long(i64),
  Double(f64),
  Bool(bool),
  Char(char),
  String(String),
  Null,
}

impl ToTokens for Literal {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Int(value) => TokenLiteral::i32_unsuffixed(*value).into_token_stream(),
      Self::Long(value) => long_literal(*value),
      Self::Double(value) => double_literal(*value),
      Self::Bool(true) => quote! { true },
      Self::Bool(false) => quote! { false },
      Self::Char(value) if is_shared_escape(*value) => TokenLiteral::character(*value).into_token_stream(),
      Self::Char(value) => char_code(u32::from(*value)),
      Self::String(value) => string_literal(value),
      Self::Null => quote! { null },
    };
    tokens.extend(ts);
  }
}

/// Longs carry the `L` suffix so they never narrow to `int` on the way through the emitted source.
fn long_literal(value: i64) -> TokenStream {
  let magnitude = value.unsigned_abs();
  let literal = format!("{magnitude}L")
    .parse::<TokenLiteral>()
    .unwrap_or_else(|_| TokenLiteral::u64_unsuffixed(magnitude));
  if value < 0 {
    quote! { - #literal }
  } else {
    literal.into_token_stream()
  }
}

fn double_literal(value: f64) -> TokenStream {
  if value.is_nan() {
    quote! { java.lang.Double.NaN }
  } else if value == f64::INFINITY {
    quote! { java.lang.Double.POSITIVE_INFINITY }
  } else if value == f64::NEG_INFINITY {
    quote! { java.lang.Double.NEGATIVE_INFINITY }
  } else {
    TokenLiteral::f64_unsuffixed(value).into_token_stream()
  }
}

/// Whether the token literal spells `c` the same way in both languages. Everything the token
/// layer escapes other than `\t \n \r \' \" \\` uses `\u{..}` or `\0`, which the target
/// reads differently or not at all.
fn is_shared_escape(c: char) -> bool {
  match c {
    '\t' | '\n' | '\r' | '\'' | '"' | '\\' => true,
    '\0' => false,
    _ => c.escape_debug().next() != Some('\\'),
  }
}

fn char_code(code: u32) -> TokenStream {
  let code = TokenLiteral::u32_unsuffixed(code);
  quote! { (char) #code }
}

/// A string holding characters without a shared escape becomes a parenthesized constant
/// concatenation, `("a" + (char) 7 + "b")`. It always starts with a string operand so the
/// `char` casts never add up as integers.
fn string_literal(value: &str) -> TokenStream {
  if value.chars().all(is_shared_escape) {
    return TokenLiteral::string(value).into_token_stream();
  }

  let mut parts: Vec<TokenStream> = vec![];
  let mut run = String::new();
  for c in value.chars() {
    if is_shared_escape(c) {
      run.push(c);
      continue;
    }
    if !run.is_empty() || parts.is_empty() {
      parts.push(TokenLiteral::string(&run).into_token_stream());
      run.clear();
    }
    parts.extend(c.encode_utf16(&mut [0; 2]).iter().map(|unit| char_code(u32::from(*unit))));
  }
  if !run.is_empty() {
    parts.push(TokenLiteral::string(&run).into_token_stream());
  }

  quote! { ( #(#parts)+* ) }
}

/// Expressions of the emitted tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
  Ident(Name),
  This,
  Literal(Literal),
  Select {
    target: Box<Expr>,
    name: Name,
  },
  Indexed {
    array: Box<Expr>,
    index: Box<Expr>,
  },
  Assign {
    target: Box<Expr>,
    value: Box<Expr>,
  },
  /// `new T[] { ... }`
  NewArray {
    element: JavaType,
    elements: Vec<Expr>,
  },
  /// `new T(...)`
  NewClass {
    class: JavaType,
    #[serde(default)]
    arguments: Vec<Expr>,
  },
  Invoke {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<Box<Expr>>,
    method: Name,
    #[serde(default)]
    arguments: Vec<Expr>,
  },
  /// A bare `{ ... }` initializer, as used by annotation arguments.
  ArrayInit(Vec<Expr>),
  Annotation(Box<Annotation>),
}

impl Expr {
  pub fn ident(name: impl Into<Name>) -> Self {
    Self::Ident(name.into())
  }

  pub fn select(target: Expr, name: impl Into<Name>) -> Self {
    Self::Select {
      target: Box::new(target),
      name: name.into(),
    }
  }

  /// `this.name`, the form used when a parameter shadows the field.
  pub fn this_select(name: impl Into<Name>) -> Self {
    Self::select(Self::This, name)
  }

  #[must_use]
  pub fn indexed(self, index: Expr) -> Self {
    Self::Indexed {
      array: Box::new(self),
      index: Box::new(index),
    }
  }

  #[must_use]
  pub fn assign(self, value: Expr) -> Self {
    Self::Assign {
      target: Box::new(self),
      value: Box::new(value),
    }
  }

  pub fn new_array(element: JavaType, elements: Vec<Expr>) -> Self {
    Self::NewArray { element, elements }
  }

  pub fn new_class(class: JavaType, arguments: Vec<Expr>) -> Self {
    Self::NewClass { class, arguments }
  }

  pub fn invoke(target: Option<Expr>, method: impl Into<Name>, arguments: Vec<Expr>) -> Self {
    Self::Invoke {
      target: target.map(Box::new),
      method: method.into(),
      arguments,
    }
  }

  pub fn int(value: i32) -> Self {
    Self::Literal(Literal::Int(value))
  }

  pub fn string(value: impl Into<String>) -> Self {
    Self::Literal(Literal::String(value.into()))
  }
}

impl From<Literal> for Expr {
  fn from(literal: Literal) -> Self {
    Self::Literal(literal)
  }
}

impl ToTokens for Expr {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Ident(name) => quote! { #name },
      Self::This => quote! { this },
      Self::Literal(literal) => quote! { #literal },
      Self::Select { target, name } => quote! { #target . #name },
      Self::Indexed { array, index } => quote! { #array [#index] },
      Self::Assign { target, value } => quote! { #target = #value },
      Self::NewArray { element, elements } => quote! { new #element [] { #(#elements),* } },
      Self::NewClass { class, arguments } => quote! { new #class ( #(#arguments),* ) },
      Self::Invoke {
        target: Some(target),
        method,
        arguments,
      } => quote! { #target . #method ( #(#arguments),* ) },
      Self::Invoke {
        target: None,
        method,
        arguments,
      } => quote! { #method ( #(#arguments),* ) },
      Self::ArrayInit(elements) => quote! { { #(#elements),* } },
      Self::Annotation(annotation) => quote! { #annotation },
    };
    tokens.extend(ts);
  }
}

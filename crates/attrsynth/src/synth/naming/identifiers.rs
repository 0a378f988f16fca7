use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;

/// Reserved words and literals of the target language. A declaration named after one of
/// these has to be quoted before it can appear in a member or a reference.
pub(crate) static JAVA_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue", "default",
    "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "var", "record", "yield",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__+").unwrap());

/// Transliterates to ASCII and replaces every run of characters that cannot appear in an
/// identifier with a single underscore. Leading digits get an underscore prefix and an
/// empty result becomes `_`.
pub(crate) fn sanitize(input: &str) -> String {
  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let mut ident = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_").into_owned();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

#[must_use]
pub fn is_java_keyword(name: &str) -> bool {
  JAVA_KEYWORDS.contains(name)
}

/// Sanitizes `name` and prefixes an underscore when the result collides with a reserved word.
#[must_use]
pub fn quote_if_java_keyword(name: &str) -> String {
  let ident = sanitize(name);
  if is_java_keyword(&ident) {
    format!("_{ident}")
  } else {
    ident
  }
}

/// True when `name` is already a plain identifier and needs neither sanitizing nor quoting.
#[must_use]
pub fn is_valid_java_identifier(name: &str) -> bool {
  !name.is_empty()
    && !name.starts_with(|c: char| c.is_ascii_digit())
    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    && !is_java_keyword(name)
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

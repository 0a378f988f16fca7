use std::path::Path;

use anyhow::Context;
use attrsynth::synth::{AttributeRequest, SynthesisOptions};
use serde::Deserialize;

/// A batch of attribute requests and the options they run under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestDocument {
  #[serde(default)]
  pub options: SynthesisOptions,
  pub attributes: Vec<AttributeRequest>,
}

pub struct RequestLoader {
  bytes: Vec<u8>,
}

impl RequestLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let bytes = tokio::fs::read(path)
      .await
      .with_context(|| format!("Failed to read request document '{}'", path.display()))?;
    Ok(Self { bytes })
  }

  #[cfg(test)]
  pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
    Self { bytes: bytes.into() }
  }

  /// Parses the document, reporting the JSON path of the first offending value.
  pub fn parse(&self) -> anyhow::Result<RequestDocument> {
    let mut deserializer = serde_json::Deserializer::from_slice(&self.bytes);
    let document = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
      let path = err.path().to_string();
      anyhow::Error::new(err.into_inner()).context(format!("Invalid request document at '{path}'"))
    })?;
    deserializer.end().context("Trailing characters after request document")?;
    Ok(document)
  }
}

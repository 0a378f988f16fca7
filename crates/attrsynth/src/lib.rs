//! Synthesis of the storage field, getter and setter that realize a typed attribute.
//!
//! [`synth::AttributeDefinitionBuilder`] is the entry point for a single attribute and
//! [`synth::Orchestrator`] runs a batch of them. Output is a tree of member declarations
//! ([`synth::tree::Decl`]) that renders to a token stream.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod synth;

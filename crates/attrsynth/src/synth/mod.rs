pub mod builder;
pub mod error;
pub mod model;
pub mod naming;
pub mod options;
pub mod orchestrator;
pub mod stats;
pub mod tree;


pub use builder::{AttributeDefinitionBuilder, AttributeSpec, ErasurePolicy, StorageShape};
pub use error::{ConfigIssue, Result, SynthesisError};
pub use options::{LazyInitStrategy, SynthesisOptions, ValidationMode};
pub use orchestrator::{AttributeRequest, FactoryKind, Orchestrator, SynthesisOutput, SynthesizedAttribute};
pub use stats::{SynthesisStats, SynthesisWarning};

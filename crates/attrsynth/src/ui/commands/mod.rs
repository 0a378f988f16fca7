pub mod synthesize;

pub use synthesize::{SynthesizeConfig, synthesize_attributes};

pub mod accessors;
pub mod identifiers;


pub use accessors::{getter_name, setter_name};

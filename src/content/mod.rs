pub mod source;
pub mod sources;

pub use source::{ContentSource, SourceError, source_for};
pub use sources::{BuiltinSource, FileSource, HttpSource};

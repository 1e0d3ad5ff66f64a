pub mod builtin;
pub mod file;
pub mod http;

pub use builtin::BuiltinSource;
pub use file::FileSource;
pub use http::HttpSource;

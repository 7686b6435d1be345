//! Data collectors module
//!
//! - SourceCollector: walk the source directory and select files by suffix
mod tree;

pub use tree::SourceCollector;

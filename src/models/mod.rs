//! Data models module
//!
//! Defines SourceFile (a file picked by traversal) and FileRecord
//! (the transient header path + contents of one entry).

pub mod source;

pub use source::{FileRecord, SourceFile};

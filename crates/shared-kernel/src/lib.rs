// crates/shared-kernel/src/lib.rs
//! Value objects shared by the indexing engine and the report writers.

pub mod value_objects;

pub use value_objects::{CreationTime, FileCount, FileExtension, FileName, FileSize};

pub mod creation_time;
pub mod file_info;

pub use creation_time::CreationTime;
pub use file_info::{FileCount, FileExtension, FileName, FileSize};

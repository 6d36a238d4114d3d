// crates/shared-kernel/src/value_objects/file_info.rs
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Entry name as it appears in the directory listing; non UTF-8 segments are lossy converted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Final path component, or an empty name for paths such as `/` or `..`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self(path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    /// Lowercased extension without the leading dot.
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into().to_lowercase())
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension().map(|e| Self::new(e.to_string_lossy())).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Uppercased form used in the "Formato" column (`pdf` -> `PDF`).
    pub fn format_label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Size label with a decimal comma: `500 bytes`, `2,0 KB`, `3,00 MB`.
    pub fn to_label(self) -> String {
        let bytes = self.bytes();
        if bytes < Self::KIB {
            return format!("{bytes} bytes");
        }

        let number = if bytes < Self::MIB {
            format!("{:.1} KB", bytes as f64 / Self::KIB as f64)
        } else {
            format!("{:.2} MB", bytes as f64 / Self::MIB as f64)
        };
        number.replace('.', ",")
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_label())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Number of regular files directly inside a folder, shown in the "Tamaño" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileCount(usize);

impl FileCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn to_label(self) -> String {
        match self.0 {
            1 => "1 archivo".to_string(),
            n => format!("{n} archivos"),
        }
    }
}

impl fmt::Display for FileCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label())
    }
}

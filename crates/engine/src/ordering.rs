//! Canonical index order: ascending numeric filename prefix, unnumbered entries last.

use crate::entry::DirectoryEntry;

/// Key assigned to names without a leading digit run; sorts after every numbered entry.
pub const UNNUMBERED: u64 = u64::MAX;

/// Value of the leading ASCII digit run of `name`, if any.
///
/// Runs that overflow `u64` saturate just below [`UNNUMBERED`] so they still
/// sort ahead of unnumbered names.
#[must_use]
pub fn numeric_prefix(name: &str) -> Option<u64> {
    let digits = name.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: u64 = 0;
    for digit in digits {
        seen = true;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .unwrap_or(UNNUMBERED - 1)
            .min(UNNUMBERED - 1);
    }
    seen.then_some(value)
}

#[must_use]
pub fn sort_key(name: &str) -> u64 {
    numeric_prefix(name).unwrap_or(UNNUMBERED)
}

/// Stable sort by [`sort_key`]; ties keep their enumeration order.
pub fn sort_by_numeric_prefix(entries: &mut [DirectoryEntry]) {
    entries.sort_by_cached_key(|e| sort_key(e.name.as_str()));
}

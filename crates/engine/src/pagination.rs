//! Page-range fold over the ordered entries.

use crate::entry::{ELECTRONIC_ORIGIN, EntryFacts, ResolvedMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
}

/// Running page counter; the first entry starts on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    next: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn next_page(self) -> usize {
        self.next
    }

    /// Span for the next entry. Folders always occupy a single slot; files
    /// occupy `page_count` slots (at least one).
    pub fn advance(&mut self, is_directory: bool, page_count: usize) -> PageSpan {
        let width = if is_directory { 1 } else { page_count.max(1) };
        let start = self.next;
        self.next = start.saturating_add(width);
        PageSpan {
            start,
            end: start + (width - 1),
        }
    }
}

/// Assign sequence numbers and page ranges, in order.
pub fn paginate(facts: impl IntoIterator<Item = EntryFacts>) -> Vec<ResolvedMetadata> {
    let mut cursor = PageCursor::new();
    facts
        .into_iter()
        .enumerate()
        .map(|(index, facts)| {
            let span = cursor.advance(facts.is_directory, facts.page_count);
            ResolvedMetadata {
                sequence: index + 1,
                display_name: facts.name.into_string(),
                path: facts.path,
                is_directory: facts.is_directory,
                creation: facts.creation,
                page_count: facts.page_count,
                page_method: facts.page_method,
                start_page: span.start,
                end_page: span.end,
                format_label: facts.format_label,
                size_label: facts.size_label,
                origin_label: ELECTRONIC_ORIGIN,
            }
        })
        .collect()
}

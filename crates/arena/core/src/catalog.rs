//! Catalog paging and search rules.
//!
//! The catalog service answers "page N, optional name filter" with a list
//! of characters plus the total page count. These types hold that exchange
//! and the cursor arithmetic for moving between pages.

use crate::character::Character;

/// One page of catalog results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterPage {
    pub results: Vec<Character>,
    /// Total pages available for the query that produced this page.
    pub page_count: u32,
}

/// Request for a catalog page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    /// 1-based page index.
    pub page: u32,
    name: Option<String>,
}

impl CatalogQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            name: None,
        }
    }

    /// Attach a name filter. Blank filters are dropped.
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        let trimmed = name.as_ref().trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Current position within a paged listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    total: u32,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Record the page count reported by the latest response.
    pub fn set_total(&mut self, total: u32) {
        self.total = total.max(1);
    }

    /// A new search always starts from the first page.
    pub fn search(&mut self) -> u32 {
        self.current = 1;
        self.current
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    /// Advance one page, or `None` when already on the last page.
    pub fn next(&mut self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Go back one page, or `None` when already on the first page.
    pub fn prev(&mut self) -> Option<u32> {
        if !self.has_prev() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_within_bounds() {
        let mut cursor = PageCursor::new();
        assert_eq!(cursor.prev(), None);
        assert_eq!(cursor.next(), None);

        cursor.set_total(3);
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.current(), 3);

        assert_eq!(cursor.prev(), Some(2));
        assert_eq!(cursor.search(), 1);
        assert!(!cursor.has_prev());
    }

    #[test]
    fn zero_total_is_clamped() {
        let mut cursor = PageCursor::new();
        cursor.set_total(0);
        assert_eq!(cursor.total(), 1);
    }

    #[test]
    fn blank_name_filter_is_dropped() {
        assert_eq!(CatalogQuery::page(1).with_name("   ").name(), None);
        assert_eq!(
            CatalogQuery::page(2).with_name(" rick ").name(),
            Some("rick")
        );
        assert_eq!(CatalogQuery::page(0).page, 1);
    }
}

use getset::CopyGetters;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 50;
/// Number of page buttons shown around the current page.
pub const DEFAULT_WINDOW_WIDTH: usize = 5;

/// One page of a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'b, T> {
    /// 1-based page number that was requested
    pub number: usize,
    pub items: &'b [T],
    pub total_pages: usize,
}

/// `ceil(len / page_size)`; `0` for an empty bucket or a zero page size.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slices `bucket` into its `page`-th page of `page_size` items.
///
/// `page` is 1-based. A page outside `1..=total_pages` yields no items; it is
/// not moved back into range. Navigation that must stay in range goes through
/// [BrowseCursor].
pub fn paginate<T>(bucket: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = total_pages(bucket.len(), page_size);
    let items = match page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    {
        Some(start) if start < bucket.len() => {
            let end = start.saturating_add(page_size).min(bucket.len());
            &bucket[start..end]
        }
        _ => &bucket[..0],
    };
    Page {
        number: page,
        items,
        total_pages,
    }
}

/// Inclusive range of page numbers to render as navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Window of `min(width, total_pages)` page numbers around `current_page`.
///
/// Centred on the current page when there is room, shifted to stay within
/// `1..=total_pages` near either end. With no pages the window is empty.
pub fn page_window(current_page: usize, total_pages: usize, width: usize) -> PageWindow {
    let width = width.min(total_pages);
    if width == 0 {
        return PageWindow { start: 1, end: 0 };
    }
    let current = current_page.clamp(1, total_pages);
    let mut start = current.saturating_sub(width / 2).max(1);
    let mut end = start + width - 1;
    if end > total_pages {
        end = total_pages;
        start = end + 1 - width;
    }
    PageWindow { start, end }
}

/// The selected letter and page of a browse surface.
///
/// Changing the letter always goes back to page 1, and page moves are kept
/// within the current bucket's pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CopyGetters)]
pub struct BrowseCursor {
    letter: Option<String>,
    #[getset(get_copy = "pub")]
    page: usize,
}

impl Default for BrowseCursor {
    fn default() -> Self {
        Self {
            letter: None,
            page: 1,
        }
    }
}

impl BrowseCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    pub fn select_letter(&mut self, letter: impl Into<String>) {
        self.letter = Some(letter.into());
        self.page = 1;
    }

    pub fn clear_letter(&mut self) {
        self.letter = None;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_add(1), total_pages);
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_sub(1), total_pages);
    }

    /// Pulls the page back into range after the bucket shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.go_to(self.page, total_pages);
    }

    /// Points the cursor at the bucket actually shown.
    /// Moving to another letter starts over at page 1.
    pub(crate) fn settle(&mut self, letter: &str, total_pages: usize) {
        if self.letter.as_deref() != Some(letter) {
            self.select_letter(letter);
        }
        self.clamp(total_pages);
    }
}

//! Paged result containers.
//!
//! The service layer hands pages of entities to mappers; mapping a page
//! converts its content and carries the metadata across untouched.

use serde::{Deserialize, Serialize};

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The current page number (0-indexed).
    pub page: usize,
    /// The requested page size.
    pub size: usize,
    /// The total number of elements across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates page info, deriving the page count from the totals.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page == 0
    }

    /// Returns true if no page follows this one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.page as u64 >= self.total_pages.saturating_sub(1)
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The elements on this page.
    pub content: Vec<T>,
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        Self {
            content,
            info: PageInfo::new(page, size, total_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    /// Maps the page content to a different type, keeping the page info.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of elements on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

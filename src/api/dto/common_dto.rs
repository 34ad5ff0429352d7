//! Shared DTO types used across list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Page, PageRequest, SortDirection, SortField};
use crate::error::BoardError;

/// Paging query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page index (zero-based). Defaults to 0.
    #[serde(default)]
    pub page: u32,
    /// Records per page. Defaults to the configured page size.
    #[serde(default)]
    pub size: Option<u32>,
    /// Sort field: one of `bno`, `title`, `writer`, `created_at`,
    /// `modified_at`. Defaults to `bno`.
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Sort direction: `asc` or `desc`. Defaults to `desc`.
    #[serde(default = "default_direction")]
    pub direction: String,
}

fn default_sort() -> String {
    "bno".to_string()
}

fn default_direction() -> String {
    "desc".to_string()
}

impl PageParams {
    /// Converts the raw query parameters into a validated
    /// [`PageRequest`], filling a missing `size` with `default_size`
    /// and clamping it to `max_size`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSortField`] for an unknown sort
    /// column and [`BoardError::Validation`] for a bad direction.
    pub fn into_request(self, default_size: u32, max_size: u32) -> Result<PageRequest, BoardError> {
        let sort: SortField = self.sort.parse()?;
        let direction: SortDirection = self.direction.parse()?;
        let size = self.size.unwrap_or(default_size).clamp(1, max_size);
        PageRequest::of(self.page, size, sort, direction)
    }
}

/// Paging metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageMeta {
    /// Zero-based page index.
    pub page: u32,
    /// Requested records per page.
    pub size: u32,
    /// Total number of records.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether a page follows this one.
    pub has_next: bool,
    /// Whether this is the first page.
    pub is_first: bool,
}

impl<T> From<&Page<T>> for PageMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page(),
            size: page.size(),
            total_elements: page.total_elements(),
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            is_first: page.is_first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, size: Option<u32>, sort: &str, direction: &str) -> PageParams {
        PageParams {
            page,
            size,
            sort: sort.to_string(),
            direction: direction.to_string(),
        }
    }

    #[test]
    fn missing_size_uses_default() {
        let result = params(0, None, "bno", "desc").into_request(10, 100);
        assert!(result.is_ok_and(|r| r.size() == 10));
    }

    #[test]
    fn oversized_page_is_clamped() {
        let result = params(0, Some(500), "bno", "desc").into_request(10, 100);
        assert!(result.is_ok_and(|r| r.size() == 100));
    }

    #[test]
    fn zero_size_is_clamped_up() {
        let result = params(0, Some(0), "bno", "desc").into_request(10, 100);
        assert!(result.is_ok_and(|r| r.size() == 1));
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let result = params(0, Some(10), "bno; DROP TABLE board", "desc").into_request(10, 100);
        assert!(matches!(result, Err(BoardError::InvalidSortField(_))));
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let result = params(0, Some(10), "bno", "sideways").into_request(10, 100);
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }
}

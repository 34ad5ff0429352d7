//! Paging and sorting types for the listing operation.
//!
//! [`PageRequest`] describes the slice a caller wants (zero-based page
//! index, positive page size, whitelisted sort field and direction);
//! [`Page`] carries the slice plus the navigation metadata computed
//! from the total record count.

use std::str::FromStr;

use crate::error::BoardError;

/// Columns a page may be ordered by.
///
/// An enumerated whitelist: arbitrary field names from request input
/// never reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Board identity.
    Bno,
    /// Post title.
    Title,
    /// Author identifier.
    Writer,
    /// First-save timestamp.
    CreatedAt,
    /// Last-save timestamp.
    ModifiedAt,
}

impl SortField {
    /// The column name used in SQL `ORDER BY` clauses.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Bno => "bno",
            Self::Title => "title",
            Self::Writer => "writer",
            Self::CreatedAt => "created_at",
            Self::ModifiedAt => "modified_at",
        }
    }
}

impl FromStr for SortField {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bno" => Ok(Self::Bno),
            "title" => Ok(Self::Title),
            "writer" => Ok(Self::Writer),
            "created_at" => Ok(Self::CreatedAt),
            "modified_at" => Ok(Self::ModifiedAt),
            other => Err(BoardError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort order applied to the chosen field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The keyword used in SQL `ORDER BY` clauses.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(BoardError::Validation(format!(
                "invalid sort direction: {other}"
            ))),
        }
    }
}

/// A request for one page of an ordered full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: SortField,
    direction: SortDirection,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// `page` is zero-based; `size` is the maximum number of records
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if `size` is zero.
    pub fn of(
        page: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::Validation(
                "page size must be positive".to_string(),
            ));
        }
        Ok(Self {
            page,
            size,
            sort,
            direction,
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Maximum records per page.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sort field.
    #[must_use]
    pub fn sort(&self) -> SortField {
        self.sort
    }

    /// Sort direction.
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Number of records to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One ordered slice of a larger result set plus navigation metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Wraps a content slice with the request it answered and the total
    /// record count at the time of the scan.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    /// Records in this page, in requested order.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consumes the page, returning its records.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based index of this page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size (the content may be shorter on the last page).
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total records across all pages.
    #[must_use]
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total page count: `ceil(total_elements / size)`.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    /// Whether this is page zero.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    /// Maps the content, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

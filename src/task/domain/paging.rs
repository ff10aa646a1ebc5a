//! Page arithmetic for task listings.

use super::TaskDomainError;
use std::num::NonZeroU32;

/// Page size used when a listing request does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: NonZeroU32,
    limit: NonZeroU32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPage`] or
    /// [`TaskDomainError::InvalidLimit`] when either value is zero.
    pub const fn new(page: u32, limit: u32) -> Result<Self, TaskDomainError> {
        let Some(valid_page) = NonZeroU32::new(page) else {
            return Err(TaskDomainError::InvalidPage(page));
        };
        let Some(valid_limit) = NonZeroU32::new(limit) else {
            return Err(TaskDomainError::InvalidLimit(limit));
        };
        Ok(Self {
            page: valid_page,
            limit: valid_limit,
        })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page.get()
    }

    /// Returns the maximum number of rows on the page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit.get()
    }

    /// Returns the number of rows to skip.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(self.limit.get())
    }

    /// Returns `true` if rows exist beyond this page given `total` matches.
    #[must_use]
    pub fn has_next(self, total: u64) -> bool {
        total > u64::from(self.page.get()) * u64::from(self.limit.get())
    }
}

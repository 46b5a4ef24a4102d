//! Pagination utilities for service layer
//!
//! Offset/limit window over an ordered listing, with helpers to normalize inputs.

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

/// Largest offset the SQL drivers can bind (signed 64-bit).
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip from the start
    pub skip: u64,
    /// max rows returned
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }
    }

    /// `(offset, limit)` to query with, or `None` when the page is empty
    /// without touching the store: a zero limit, or an offset past any
    /// possible row count. Limit is capped at `MAX_LIMIT`.
    pub fn normalize(self) -> Option<(u64, u64)> {
        if self.limit == 0 || self.skip > MAX_SKIP {
            return None;
        }
        Some((self.skip, self.limit.min(MAX_LIMIT)))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: DEFAULT_LIMIT }
    }
}

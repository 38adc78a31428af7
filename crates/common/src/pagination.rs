//! Offset pagination parameters shared by list endpoints.
//!
//! `Page` deserializes straight from a query string (`?skip=20&limit=10`);
//! missing values fall back to the defaults below.

use serde::Deserialize;

/// Default page size when `limit` is not given.
pub const DEFAULT_LIMIT: u64 = 100;
/// Hard cap on a single page.
pub const MAX_LIMIT: u64 = 1000;
/// Largest offset a SQL `OFFSET` can bind (signed 64-bit).
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// number of rows to skip from the start
    #[serde(default)]
    pub skip: u64,
    /// maximum number of rows returned
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl Page {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Clamp `skip` to `MAX_SKIP` and `limit` to `MAX_LIMIT`, returning `(skip, limit)`.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip.min(MAX_SKIP), self.limit.min(MAX_LIMIT))
    }
}

impl Default for Page {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

//! Offset-based pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items returned by list endpoints.
const DEFAULT_LIMIT: u64 = 100;
/// Maximum number of items a single request may ask for.
const MAX_LIMIT: u64 = 500;

/// `skip`/`limit` query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListQuery {
    /// Number of items to skip from the start of the result set.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of items to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl ListQuery {
    /// Create a new query with the limit clamped to the allowed range.
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.skip as i64
    }

    /// The SQL `LIMIT` value, clamped to the allowed range.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT) as i64
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};
use validator::Validate;

use quickinit_core::types::PageRequest;
use quickinit_core::types::pagination::MAX_PAGE;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    #[validate(range(max = MAX_PAGE, message = "page must be at most 1000000"))]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}

impl PaginationParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

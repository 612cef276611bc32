//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page sizes the listing endpoint accepts.
pub const ALLOWED_PAGE_SIZES: [i32; 3] = [5, 10, 15];

/// Page size applied when the client omits or sends an unsupported value.
pub const DEFAULT_PAGE_SIZE: i32 = 5;

/// Pagination parameters (`?pageNumber=&pageSize=`).
///
/// Both are optional; [`PaginationParams::normalize`] applies defaults and
/// snaps out-of-range values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

impl PaginationParams {
    /// Effective `(page_number, page_size)`.
    ///
    /// The page number defaults to 1 and is clamped to at least 1. The page
    /// size must be one of [`ALLOWED_PAGE_SIZES`]; anything else (including
    /// zero and negatives) falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn normalize(&self) -> (u32, u32) {
        let page_number = self.page_number.unwrap_or(1).max(1) as u32;
        let page_size = match self.page_size {
            Some(size) if ALLOWED_PAGE_SIZES.contains(&size) => size as u32,
            _ => DEFAULT_PAGE_SIZE as u32,
        };
        (page_number, page_size)
    }
}

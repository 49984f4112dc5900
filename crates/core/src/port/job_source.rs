// Job Source Port (Interface)

use crate::domain::JobRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Record count of a nominally full page. The board reports no total, so a
/// page shorter than this is the only end-of-results signal.
pub const NOMINAL_PAGE_SIZE: usize = 100;

/// Errors a job source can fail with. Fetches are not retried here; the
/// caller decides what to surface.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("job board returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Source of paginated job postings.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch one page of postings. Pages are 1-based; an empty page means
    /// the caller walked past the end of the listing.
    async fn fetch_page(&self, page: u32) -> Result<Vec<JobRecord>, FetchError>;
}

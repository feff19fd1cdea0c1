use thiserror::Error;

use crate::types::SourceId;

/// Error type for outbound fetch plumbing.
///
/// These errors never escape the feed API; the fallback policy converts
/// every failure into a substituted dataset.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The export endpoint could not be reached or read.
    #[error("sheet source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Source whose fetch failed.
        source_id: SourceId,
        /// Human-readable failure description.
        reason: String,
    },
}

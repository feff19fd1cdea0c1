//! Outbound fetch seam for spreadsheet CSV exports.

use tracing::debug;

use crate::config::SheetSource;
use crate::errors::FeedError;

/// Raw result of one CSV export fetch.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    /// HTTP status code returned by the export endpoint.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl FetchResponse {
    /// Whether the status code is in the success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches the CSV export for a sheet source.
///
/// Implementations perform exactly one attempt per call; retries and
/// deadlines belong to the hosting request layer. Tests drive the pipeline
/// through fixture implementations of this trait.
pub trait SheetFetcher: Send + Sync {
    /// Fetch the CSV export body for `source`.
    fn fetch_csv(&self, source: &SheetSource) -> Result<FetchResponse, FeedError>;
}

/// Live HTTP fetcher for published spreadsheet exports.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSheetFetcher;

impl SheetFetcher for HttpSheetFetcher {
    fn fetch_csv(&self, source: &SheetSource) -> Result<FetchResponse, FeedError> {
        let url = source.export_url();
        debug!(
            "[sheetfeed] fetching CSV export for source '{}'",
            source.source_id
        );
        match ureq::get(&url).call() {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.into_body().read_to_string().map_err(|err| {
                    FeedError::SourceUnavailable {
                        source_id: source.source_id.clone(),
                        reason: format!("failed reading CSV export body: {err}"),
                    }
                })?;
                Ok(FetchResponse { status, body })
            }
            // A non-2xx status is a policy input, not a transport failure.
            Err(ureq::Error::StatusCode(code)) => Ok(FetchResponse {
                status: code,
                body: String::new(),
            }),
            Err(err) => Err(FeedError::SourceUnavailable {
                source_id: source.source_id.clone(),
                reason: format!("failed fetching CSV export: {err}"),
            }),
        }
    }
}

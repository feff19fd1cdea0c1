//! Sheet source configuration.

use crate::constants::export;
use crate::types::{SourceId, SpreadsheetId, TabGid};

/// Identity of one published spreadsheet tab served by the pipeline.
///
/// Spreadsheet and tab identifiers are always injected here rather than
/// written inline at fetch sites, so the pipeline can run against arbitrary
/// fixtures.
#[derive(Clone, Debug)]
pub struct SheetSource {
    /// Stable source id used in logs and errors.
    pub source_id: SourceId,
    /// Spreadsheet document identifier.
    pub spreadsheet_id: SpreadsheetId,
    /// Tab identifier within the spreadsheet (`gid` query value).
    pub gid: TabGid,
}

impl SheetSource {
    /// Create a source from injected spreadsheet and tab identifiers.
    pub fn new(
        source_id: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        gid: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            spreadsheet_id: spreadsheet_id.into(),
            gid: gid.into(),
        }
    }

    /// CSV export URL for this tab.
    pub fn export_url(&self) -> String {
        format!(
            "{}/{}/export?format=csv&gid={}",
            export::EXPORT_BASE_URL,
            self.spreadsheet_id,
            self.gid
        )
    }
}

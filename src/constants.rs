/// Constants used when building spreadsheet export URLs.
pub mod export {
    /// Base endpoint for published spreadsheet CSV exports.
    pub const EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
}

/// Constants used by markup-page sniffing before CSV parsing.
pub mod markup {
    /// Leading document-type marker carried by HTML error pages.
    pub const DOCTYPE_MARKER: &str = "<!doctype";
    /// Markup root tag indicating an HTML body instead of tabular text.
    pub const HTML_ROOT_TAG: &str = "<html";
    /// Number of leading characters inspected when sniffing for markup.
    pub const SNIFF_WINDOW: usize = 512;
}

/// Constants used by record mapping and field normalization.
pub mod mapping {
    /// Scheme prefix a resource link must carry to be kept.
    pub const LINK_PREFIX: &str = "http";
    /// Source-side separator rewritten in learn-notes fields.
    pub const LEARN_NOTES_SEPARATOR: &str = " - ";
    /// Presentation bullet substituted for the learn-notes separator.
    pub const LEARN_NOTES_BULLET: &str = " • ";
    /// Date format used for the parse-time date-added default.
    pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d";
}

/// Stable identifier for a configured sheet source.
/// Examples: `resources`, `tools`, `learning-modules`
pub type SourceId = String;
/// Spreadsheet document identifier from the published sheet URL.
/// Example: `1JbqFSwtCEmg51txSvDM4UpJ-4fsY8kqhO9YSG8OUgxE`
pub type SpreadsheetId = String;
/// Tab identifier within a spreadsheet (the `gid` query value).
/// Examples: `0`, `567183491`
pub type TabGid = String;
/// Grouping key taken verbatim from a record field.
/// Examples: `AI Basics`, `Prompt Engineering`
pub type GroupKey = String;

//! Row schema configuration and the generic record-mapping driver.
//!
//! One parameterized pass replaces per-content-type parser copies: a
//! [`RowSchema`] describes the shape a row must satisfy, and record types
//! implement [`SheetRecord`] to map accepted field lists into themselves.

use crate::parser::{logical_lines, parse_fields};

/// Per-content-type row shape configuration.
#[derive(Clone, Debug)]
pub struct RowSchema {
    /// Minimum field count a row must have to be mapped.
    pub min_fields: usize,
    /// First two header labels, used to drop header rows repeated mid-export.
    pub header_guard: [&'static str; 2],
}

/// A typed record mapped from one spreadsheet row.
pub trait SheetRecord: Sized {
    /// Row shape configuration for this record variant.
    fn schema() -> &'static RowSchema;

    /// Map an accepted field list into a record.
    ///
    /// Called only for rows that passed the schema's minimum field count.
    /// Positions past the end of the list still read as empty strings via
    /// [`field`], so every record field is always defined.
    fn from_fields(fields: &[String]) -> Self;
}

/// Return the field at `idx`, or `""` when the row is short.
pub fn field(fields: &[String], idx: usize) -> &str {
    fields.get(idx).map(String::as_str).unwrap_or_default()
}

/// Parse an entire CSV export into typed records.
///
/// The first logical line is always treated as the header and skipped by
/// position. After that, a row is silently skipped when it is blank, has
/// fewer fields than the schema minimum, or repeats the header labels
/// (concatenated exports repeat headers mid-file). Never fails; dirty rows
/// reduce the result size, not the availability of the pipeline.
pub fn parse_records<R: SheetRecord>(text: &str) -> Vec<R> {
    let schema = R::schema();
    let mut records = Vec::new();

    for line in logical_lines(text).into_iter().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(line);
        if fields.len() < schema.min_fields {
            continue;
        }
        if is_repeated_header(&fields, schema) {
            continue;
        }
        records.push(R::from_fields(&fields));
    }

    records
}

fn is_repeated_header(fields: &[String], schema: &RowSchema) -> bool {
    field(fields, 0) == schema.header_guard[0] && field(fields, 1) == schema.header_guard[1]
}

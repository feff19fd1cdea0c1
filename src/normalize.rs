//! Field normalization helpers shared by record mappers.

use crate::constants::mapping;

/// Split a comma-joined link field into trimmed URL entries.
///
/// Pieces that do not look like a URL are discarded, so prose fragments
/// left in the link column never leak into the list. An empty field yields
/// an empty list, never a missing one.
pub fn split_resource_links(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| piece.starts_with(mapping::LINK_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Rewrite the source-side ` - ` separators in learn-notes text to bullets.
pub fn bulletize(raw: &str) -> String {
    raw.replace(mapping::LEARN_NOTES_SEPARATOR, mapping::LEARN_NOTES_BULLET)
}

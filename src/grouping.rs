//! First-seen-order grouping of typed records.

use indexmap::IndexMap;

use crate::types::GroupKey;

/// Partition `records` into groups keyed by `key`, preserving order.
///
/// Pure partition: no sorting, filtering, or deduplication. Group order is
/// the order of each key's first appearance; records keep their relative
/// input order inside a group. Keys are taken verbatim from the selected
/// field — case- and whitespace-sensitive, so two spellings of the same
/// label form two groups.
pub fn group_by_first_seen<R, K>(records: Vec<R>, key: K) -> IndexMap<GroupKey, Vec<R>>
where
    K: Fn(&R) -> &str,
{
    let mut groups: IndexMap<GroupKey, Vec<R>> = IndexMap::new();
    for record in records {
        let group = key(&record).to_string();
        groups.entry(group).or_default().push(record);
    }
    groups
}

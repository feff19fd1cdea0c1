//! Feed pipeline: fetch, parse, group, and the fallback policy.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::SheetSource;
use crate::constants::markup;
use crate::fallback;
use crate::fetch::SheetFetcher;
use crate::grouping::group_by_first_seen;
use crate::record::{LearningModule, Resource, Tool};
use crate::schema::{parse_records, SheetRecord};
use crate::types::GroupKey;

/// Where a feed result came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedOrigin {
    /// Records parsed from the live export.
    Live,
    /// The static fallback dataset was substituted.
    Fallback,
}

/// Flat ordered feed output plus its origin.
#[derive(Clone, Debug)]
pub struct FeedResult<R> {
    /// Records in source order.
    pub records: Vec<R>,
    /// Whether the records are live or substituted.
    pub origin: FeedOrigin,
}

impl<R> FeedResult<R> {
    fn fallback(records: Vec<R>) -> Self {
        Self {
            records,
            origin: FeedOrigin::Fallback,
        }
    }
}

/// Grouped feed output plus its origin.
#[derive(Clone, Debug)]
pub struct GroupedFeedResult<R> {
    /// Groups in first-seen key order; records in source order within each.
    pub groups: IndexMap<GroupKey, Vec<R>>,
    /// Whether the records are live or substituted.
    pub origin: FeedOrigin,
}

/// Fetch and parse one sheet source into typed records.
///
/// The fallback dataset is substituted when, in order: the fetch raised a
/// transport error; the export returned a non-success status; the body looks
/// like a markup error page (parsing is skipped entirely); or the parsed
/// result set is empty. Otherwise the live records are returned and the
/// fallback is never built. Never returns an error; zero records is a valid
/// outcome and [`FeedOrigin`] is the only failure signal.
pub fn load_records<R, F, D>(fetcher: &F, source: &SheetSource, fallback: D) -> FeedResult<R>
where
    R: SheetRecord,
    F: SheetFetcher + ?Sized,
    D: FnOnce() -> Vec<R>,
{
    let body = match fetcher.fetch_csv(source) {
        Ok(response) if response.is_success() => response.body,
        Ok(response) => {
            warn!(
                "[sheetfeed] source '{}' returned status {}; serving fallback",
                source.source_id, response.status
            );
            return FeedResult::fallback(fallback());
        }
        Err(err) => {
            warn!("[sheetfeed] {err}; serving fallback");
            return FeedResult::fallback(fallback());
        }
    };

    if looks_like_markup(&body) {
        warn!(
            "[sheetfeed] source '{}' returned a markup page instead of CSV; serving fallback",
            source.source_id
        );
        return FeedResult::fallback(fallback());
    }

    let records = parse_records::<R>(&body);
    if records.is_empty() {
        warn!(
            "[sheetfeed] source '{}' parsed zero rows; serving fallback",
            source.source_id
        );
        return FeedResult::fallback(fallback());
    }

    debug!(
        "[sheetfeed] source '{}' parsed {} rows",
        source.source_id,
        records.len()
    );
    FeedResult {
        records,
        origin: FeedOrigin::Live,
    }
}

/// Fetch, parse, and group one sheet source by `key`.
///
/// Same fallback policy as [`load_records`]; the substituted dataset is
/// grouped with the same key selector.
pub fn load_grouped<R, F, D, K>(
    fetcher: &F,
    source: &SheetSource,
    key: K,
    fallback: D,
) -> GroupedFeedResult<R>
where
    R: SheetRecord,
    F: SheetFetcher + ?Sized,
    D: FnOnce() -> Vec<R>,
    K: Fn(&R) -> &str,
{
    let result = load_records(fetcher, source, fallback);
    GroupedFeedResult {
        groups: group_by_first_seen(result.records, key),
        origin: result.origin,
    }
}

/// Heuristic pre-parse check for HTML error pages served with a 200.
fn looks_like_markup(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(markup::SNIFF_WINDOW)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with(markup::DOCTYPE_MARKER) || head.contains(markup::HTML_ROOT_TAG)
}

/// Configured catalog feeds over one fetcher.
///
/// Each call re-fetches and re-parses from scratch; the pipeline holds no
/// state between invocations.
pub struct CatalogFeeds<F: SheetFetcher> {
    fetcher: F,
    resources: SheetSource,
    tools: SheetSource,
    learning_modules: SheetSource,
}

impl<F: SheetFetcher> CatalogFeeds<F> {
    /// Create catalog feeds from a fetcher and the three tab sources.
    pub fn new(
        fetcher: F,
        resources: SheetSource,
        tools: SheetSource,
        learning_modules: SheetSource,
    ) -> Self {
        Self {
            fetcher,
            resources,
            tools,
            learning_modules,
        }
    }

    /// Flat resource listing from the resources tab.
    pub fn resources(&self) -> FeedResult<Resource> {
        load_records(&self.fetcher, &self.resources, fallback::resources)
    }

    /// Flat tool listing from the tools tab.
    pub fn tools(&self) -> FeedResult<Tool> {
        load_records(&self.fetcher, &self.tools, fallback::tools)
    }

    /// Learning modules grouped by path name, in first-seen path order.
    pub fn learning_paths(&self) -> GroupedFeedResult<LearningModule> {
        load_grouped(
            &self.fetcher,
            &self.learning_modules,
            |module| module.path_name.as_str(),
            fallback::learning_modules,
        )
    }
}

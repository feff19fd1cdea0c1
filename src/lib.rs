#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Sheet source configuration.
pub mod config;
/// Constants used across parsing, mapping, and fetching.
pub mod constants;
/// Fallback datasets substituted when a live source cannot be served.
pub mod fallback;
/// Feed pipeline: fetch, parse, group, and the fallback policy.
pub mod feed;
/// Outbound fetch seam and the live HTTP fetcher.
pub mod fetch;
/// First-seen-order grouping of typed records.
pub mod grouping;
/// Field normalization helpers.
pub mod normalize;
/// Line tokenizer and quote-aware field parser.
pub mod parser;
/// Typed catalog records and their row schemas.
pub mod record;
/// Row schema configuration and the generic record-mapping driver.
pub mod schema;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::SheetSource;
pub use errors::FeedError;
pub use feed::{load_grouped, load_records, CatalogFeeds, FeedOrigin, FeedResult, GroupedFeedResult};
pub use fetch::{FetchResponse, HttpSheetFetcher, SheetFetcher};
pub use grouping::group_by_first_seen;
pub use record::{Difficulty, LearningModule, Recommended, Resource, Tool};
pub use schema::{parse_records, RowSchema, SheetRecord};
pub use types::{GroupKey, SourceId};

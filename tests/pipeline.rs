use sheetfeed::{
    fallback, parse_records, CatalogFeeds, Difficulty, FeedError, FeedOrigin, FetchResponse,
    LearningModule, Recommended, Resource, SheetFetcher, SheetSource, Tool,
};

const MODULES_CSV: &str = "\
PathName,ModuleNumber,ModuleName,Description,Resources,EstimatedHours,Difficulty
AI Basics,1,Intro to AI,\"Learn the basics, and more\",\"http://a.com, http://b.com\",3,Beginner
";

const RESOURCES_CSV: &str = "\
ResourceName,Type,Platform,Description,URL,Difficulty,WhatYouLearn,DateAdded,Recommended
Claude AI Free,AI Tool,Anthropic,Long-context assistant,https://claude.ai,Beginner,Analysis - Code - Research,2024-01-01,Y
Kaggle,Practice Platform,Google,Competitions and datasets,https://kaggle.com,Intermediate,ML practice,2024-02-01,N
";

const TOOLS_CSV: &str = "\
Name,Category,Description,Link,Pricing,WeekAdded,Difficulty
Cursor,Coding,AI-first editor,https://cursor.com,Freemium,W12,Intermediate
NotebookLM,Research,Source-grounded notebook,https://notebooklm.google.com,Free,W13,Beginner
";

/// Scripted fetch outcome for one source.
enum Outcome {
    Body(String),
    Status(u16),
    Transport,
}

struct ScriptedFetcher {
    outcome: Outcome,
}

impl ScriptedFetcher {
    fn body(body: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Body(body.into()),
        }
    }

    fn status(status: u16) -> Self {
        Self {
            outcome: Outcome::Status(status),
        }
    }

    fn transport_failure() -> Self {
        Self {
            outcome: Outcome::Transport,
        }
    }
}

impl SheetFetcher for ScriptedFetcher {
    fn fetch_csv(&self, source: &SheetSource) -> Result<FetchResponse, FeedError> {
        match &self.outcome {
            Outcome::Body(body) => Ok(FetchResponse {
                status: 200,
                body: body.clone(),
            }),
            Outcome::Status(status) => Ok(FetchResponse {
                status: *status,
                body: String::new(),
            }),
            Outcome::Transport => Err(FeedError::SourceUnavailable {
                source_id: source.source_id.clone(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

fn feeds(fetcher: ScriptedFetcher) -> CatalogFeeds<ScriptedFetcher> {
    CatalogFeeds::new(
        fetcher,
        SheetSource::new("resources", "sheet-id", "0"),
        SheetSource::new("tools", "sheet-id", "101"),
        SheetSource::new("learning-modules", "sheet-id", "202"),
    )
}

#[test]
fn end_to_end_module_row_parses_and_groups() {
    let result = feeds(ScriptedFetcher::body(MODULES_CSV)).learning_paths();

    assert_eq!(result.origin, FeedOrigin::Live);
    assert_eq!(result.groups.len(), 1);

    let modules = &result.groups["AI Basics"];
    assert_eq!(modules.len(), 1);
    let module = &modules[0];
    assert_eq!(module.path_name, "AI Basics");
    assert_eq!(module.module_number, "1");
    assert_eq!(module.module_name, "Intro to AI");
    assert_eq!(module.description, "Learn the basics, and more");
    assert_eq!(module.resources, vec!["http://a.com", "http://b.com"]);
    assert_eq!(module.estimated_hours, "3");
    assert_eq!(module.difficulty, Difficulty::Beginner);
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_records::<Resource>(RESOURCES_CSV);
    let second = parse_records::<Resource>(RESOURCES_CSV);
    assert_eq!(first, second);
}

#[test]
fn accepted_rows_meet_the_minimum_field_count() {
    // Rows below the 9-field resource minimum never reach the output.
    let text = "ResourceName,Type,Platform,Description,URL,Difficulty,WhatYouLearn,DateAdded,Recommended\n\
                short,row,only,five,fields\n\
                Full,AI Tool,Here,Desc,https://x.com,Beginner,Notes,2024-01-01,Y\n";
    let resources = parse_records::<Resource>(text);
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].resource_name, "Full");
}

#[test]
fn repeated_header_rows_are_excluded() {
    let text = format!(
        "{}PathName,ModuleNumber,ModuleName,Description,Resources,EstimatedHours,Difficulty\n\
         AI Basics,2,Next Steps,More,https://c.com,2,Beginner\n",
        MODULES_CSV
    );
    let modules = parse_records::<LearningModule>(&text);
    assert_eq!(modules.len(), 2);
    assert!(modules.iter().all(|module| module.path_name != "PathName"));
}

#[test]
fn group_keys_follow_first_appearance_order() {
    let text = "PathName,ModuleNumber,ModuleName,Description,Resources,EstimatedHours,Difficulty\n\
                Prompting,1,A,d,https://a.com,1,Beginner\n\
                AI Basics,1,B,d,https://b.com,1,Beginner\n\
                Prompting,2,C,d,https://c.com,1,Beginner\n";
    let result = feeds(ScriptedFetcher::body(text)).learning_paths();

    let keys: Vec<&String> = result.groups.keys().collect();
    assert_eq!(keys, vec!["Prompting", "AI Basics"]);
    let prompting = &result.groups["Prompting"];
    assert_eq!(prompting[0].module_name, "A");
    assert_eq!(prompting[1].module_name, "C");
}

#[test]
fn fallback_on_error_status_matches_fallback_dataset() {
    let result = feeds(ScriptedFetcher::status(403)).resources();
    assert_eq!(result.origin, FeedOrigin::Fallback);
    assert_eq!(result.records, fallback::resources());
}

#[test]
fn fallback_on_markup_body() {
    let result =
        feeds(ScriptedFetcher::body("<!DOCTYPE html><html>Sign in</html>")).resources();
    assert_eq!(result.origin, FeedOrigin::Fallback);
    assert_eq!(result.records, fallback::resources());
}

#[test]
fn fallback_on_transport_error() {
    let result = feeds(ScriptedFetcher::transport_failure()).resources();
    assert_eq!(result.origin, FeedOrigin::Fallback);
    assert_eq!(result.records, fallback::resources());
}

#[test]
fn fallback_on_header_only_export() {
    let result = feeds(ScriptedFetcher::body(
        "ResourceName,Type,Platform,Description,URL,Difficulty,WhatYouLearn,DateAdded,Recommended\n",
    ))
    .resources();
    assert_eq!(result.origin, FeedOrigin::Fallback);
}

#[test]
fn tools_fall_back_to_empty_dataset() {
    let result = feeds(ScriptedFetcher::status(500)).tools();
    assert_eq!(result.origin, FeedOrigin::Fallback);
    assert!(result.records.is_empty());
}

#[test]
fn live_results_are_tagged_live() {
    let result = feeds(ScriptedFetcher::body(RESOURCES_CSV)).resources();
    assert_eq!(result.origin, FeedOrigin::Live);
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].what_you_learn, "Analysis • Code • Research");
    assert_eq!(result.records[1].recommended, Recommended::No);
}

#[test]
fn empty_body_parses_to_zero_records() {
    assert!(parse_records::<LearningModule>("").is_empty());
    assert!(parse_records::<Resource>("").is_empty());
    assert!(parse_records::<Tool>("").is_empty());
}

#[test]
fn tools_feed_fills_defaults_from_live_rows() {
    let result = feeds(ScriptedFetcher::body(TOOLS_CSV)).tools();
    assert_eq!(result.origin, FeedOrigin::Live);
    assert_eq!(result.records.len(), 2);
    for tool in &result.records {
        assert_eq!(tool.recommended, Recommended::Yes);
        assert!(!tool.date_added.is_empty());
    }
    assert_eq!(result.records[0].name, "Cursor");
    assert_eq!(result.records[1].difficulty, Difficulty::Beginner);
}

#[test]
fn grouped_output_serializes_in_group_order() {
    let result = feeds(ScriptedFetcher::body(MODULES_CSV)).learning_paths();
    let json = serde_json::to_string(&result.groups).unwrap();
    assert!(json.starts_with("{\"AI Basics\":["));
    assert!(json.contains("\"PathName\":\"AI Basics\""));
    assert!(json.contains("\"Resources\":[\"http://a.com\",\"http://b.com\"]"));
}

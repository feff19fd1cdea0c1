//! Typed catalog records and their row schemas.
//!
//! Wire field names match the source spreadsheet headers, so serialized
//! records read the same as the rows they came from.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::mapping;
use crate::normalize::{bulletize, split_resource_links};
use crate::schema::{field, RowSchema, SheetRecord};

/// Difficulty tier attached to catalog entries.
///
/// Raw difficulty fields are validated into this closed set; anything
/// outside it is tagged [`Difficulty::Unrecognized`] rather than passed
/// through unchecked.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    /// Entry-level content.
    Beginner,
    /// Assumes prior exposure to the topic.
    Intermediate,
    /// Deep or research-adjacent content.
    Advanced,
    /// Tagged fallback for values outside the closed set.
    Unrecognized,
}

impl Difficulty {
    /// Validate a raw difficulty field into the closed set.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Beginner" => Self::Beginner,
            "Intermediate" => Self::Intermediate,
            "Advanced" => Self::Advanced,
            _ => Self::Unrecognized,
        }
    }
}

/// Recommendation flag, `Y`/`N` on the wire.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommended {
    /// Recommended entry.
    #[serde(rename = "Y")]
    Yes,
    /// Explicitly not recommended.
    #[serde(rename = "N")]
    No,
}

impl Recommended {
    /// Validate a raw flag field.
    ///
    /// Only a literal `N` opts out; anything else takes the affirmative
    /// default, matching the absent-column default on the tools tab.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "N" => Self::No,
            _ => Self::Yes,
        }
    }
}

/// Row schema for the resources tab.
pub static RESOURCE_SCHEMA: RowSchema = RowSchema {
    min_fields: 9,
    header_guard: ["ResourceName", "Type"],
};

/// One row of the resources tab.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    /// Display name of the resource.
    pub resource_name: String,
    /// Category label, e.g. `AI Tool`, `Free Course`.
    #[serde(rename = "Type")]
    pub kind: String,
    /// Hosting platform or publisher.
    pub platform: String,
    /// One-line description.
    pub description: String,
    /// Landing page for the resource.
    #[serde(rename = "URL")]
    pub url: String,
    /// Validated difficulty tier.
    pub difficulty: Difficulty,
    /// Learn-notes summary with ` • ` separators.
    pub what_you_learn: String,
    /// Date the entry was added, as written in the sheet.
    pub date_added: String,
    /// Editorial recommendation flag.
    pub recommended: Recommended,
}

impl SheetRecord for Resource {
    fn schema() -> &'static RowSchema {
        &RESOURCE_SCHEMA
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            resource_name: field(fields, 0).to_string(),
            kind: field(fields, 1).to_string(),
            platform: field(fields, 2).to_string(),
            description: field(fields, 3).to_string(),
            url: field(fields, 4).to_string(),
            difficulty: Difficulty::parse(field(fields, 5)),
            what_you_learn: bulletize(field(fields, 6)),
            date_added: field(fields, 7).to_string(),
            recommended: Recommended::parse(field(fields, 8)),
        }
    }
}

/// Row schema for the tools tab.
pub static TOOL_SCHEMA: RowSchema = RowSchema {
    min_fields: 7,
    header_guard: ["Name", "Category"],
};

/// One row of the tools tab.
///
/// The tools tab carries no `DateAdded` or `Recommended` columns; both are
/// filled with policy defaults at parse time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Tool {
    /// Display name of the tool.
    pub name: String,
    /// Category label used for filtering.
    pub category: String,
    /// One-line description.
    pub description: String,
    /// Landing page for the tool.
    pub link: String,
    /// Pricing note, e.g. `Free`, `Freemium`.
    pub pricing: String,
    /// Week label the tool was featured, as written in the sheet.
    pub week_added: String,
    /// Validated difficulty tier.
    pub difficulty: Difficulty,
    /// Defaulted to the current UTC date at parse time.
    pub date_added: String,
    /// Defaulted to the affirmative flag.
    pub recommended: Recommended,
}

impl SheetRecord for Tool {
    fn schema() -> &'static RowSchema {
        &TOOL_SCHEMA
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            name: field(fields, 0).to_string(),
            category: field(fields, 1).to_string(),
            description: field(fields, 2).to_string(),
            link: field(fields, 3).to_string(),
            pricing: field(fields, 4).to_string(),
            week_added: field(fields, 5).to_string(),
            difficulty: Difficulty::parse(field(fields, 6)),
            date_added: Utc::now().format(mapping::DATE_ADDED_FORMAT).to_string(),
            recommended: Recommended::Yes,
        }
    }
}

/// Row schema for the learning-modules tab.
pub static LEARNING_MODULE_SCHEMA: RowSchema = RowSchema {
    min_fields: 7,
    header_guard: ["PathName", "ModuleNumber"],
};

/// One row of the learning-modules tab.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LearningModule {
    /// Learning path this module belongs to; the grouping key.
    pub path_name: String,
    /// Module position within its path, as written in the sheet.
    pub module_number: String,
    /// Display name of the module.
    pub module_name: String,
    /// One-line description.
    pub description: String,
    /// Resource links split out of the comma-joined source field.
    pub resources: Vec<String>,
    /// Estimated effort in hours, as written in the sheet.
    pub estimated_hours: String,
    /// Validated difficulty tier.
    pub difficulty: Difficulty,
}

impl SheetRecord for LearningModule {
    fn schema() -> &'static RowSchema {
        &LEARNING_MODULE_SCHEMA
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            path_name: field(fields, 0).to_string(),
            module_number: field(fields, 1).to_string(),
            module_name: field(fields, 2).to_string(),
            description: field(fields, 3).to_string(),
            resources: split_resource_links(field(fields, 4)),
            estimated_hours: field(fields, 5).to_string(),
            difficulty: Difficulty::parse(field(fields, 6)),
        }
    }
}

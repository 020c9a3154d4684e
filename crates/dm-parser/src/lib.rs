mod csv_source;
mod json_source;

pub use csv_source::parse_csv_script;
pub use json_source::parse_json_script;

use dm_core::{DialogueError, ScriptRow};

pub const SCRIPT_COLUMNS: [&str; 5] = [
    "action",
    "reaction",
    "tag",
    "next_tags",
    "negative_reaction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Csv,
    Json,
}

impl ScriptFormat {
    pub fn from_path_hint(path_hint: &str) -> Option<Self> {
        let lowered = path_hint.to_ascii_lowercase();
        if lowered.ends_with(".csv") {
            Some(Self::Csv)
        } else if lowered.ends_with(".json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

pub fn parse_script_source(path_hint: &str, source: &str) -> Result<Vec<ScriptRow>, DialogueError> {
    match ScriptFormat::from_path_hint(path_hint) {
        Some(ScriptFormat::Csv) => parse_csv_script(source),
        Some(ScriptFormat::Json) => parse_json_script(source),
        None => Err(DialogueError::new(
            "DM_SOURCE_FORMAT",
            format!(
                "Unsupported script format for \"{}\", expected .csv or .json.",
                path_hint
            ),
        )),
    }
}

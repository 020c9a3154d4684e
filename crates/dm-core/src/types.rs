use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// One row of a tabular script, as it arrives from a loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRow {
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub reaction: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub next_tags: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub negative_reaction: Option<String>,
}

impl ScriptRow {
    pub fn new(action: impl Into<String>, reaction: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            reaction: Some(reaction.into()),
            ..Self::default()
        }
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn branching(mut self, next_tags: impl Into<String>) -> Self {
        self.next_tags = Some(next_tags.into());
        self
    }

    pub fn with_negative(mut self, negative_reaction: impl Into<String>) -> Self {
        self.negative_reaction = Some(negative_reaction.into());
        self
    }
}

/// Accepts spreadsheet-style cells: strings, numbers, booleans or null.
pub fn deserialize_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CellVisitor;

    impl<'de> Visitor<'de> for CellVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null cell")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, inner: D2) -> Result<Self::Value, D2::Error> {
            inner.deserialize_any(CellVisitor)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }
    }

    deserializer.deserialize_any(CellVisitor)
}

/// Expected-action dialect, classified once at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PatternKind {
    /// `/start`, `/help`, ...
    Command { name: String },
    /// `[anytext]` or `[initial]`.
    Wildcard,
    /// `[pause]`, `[pause 10]`.
    Pause { seconds: Option<u64> },
    /// `[location ...]`, resolved by a pluggable matcher.
    Location { raw: String },
    /// `yes|y`: lower-cased, trimmed alternatives.
    Literal { alternatives: Vec<String> },
    /// Any other bracket form. Never matches.
    Unsupported { raw: String },
}

impl PatternKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Wildcard => "wildcard",
            Self::Pause { .. } => "pause",
            Self::Location { .. } => "location",
            Self::Literal { .. } => "literal",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub index: usize,
    pub action: String,
    pub reaction: String,
    pub tag: Option<String>,
    pub next_tags: Option<String>,
    pub negative_reaction: Option<String>,
    pub pattern: PatternKind,
    pub candidate_positions: Vec<usize>,
}

impl Step {
    pub fn has_pause_marker(&self) -> bool {
        self.action.contains("[pause")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompileWarningKind {
    EmptyAction,
    UnsupportedPattern,
    UnreachableStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileWarning {
    pub kind: CompileWarningKind,
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledScript {
    pub steps: Vec<Step>,
    pub tags: BTreeMap<String, usize>,
    pub warnings: Vec<CompileWarning>,
}

impl CompiledScript {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

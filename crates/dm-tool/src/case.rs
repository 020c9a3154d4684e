use dm_api::EngineConfig;
use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "dm-tool-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub turns: Vec<TestTurn>,
    #[serde(default)]
    pub expected_turns: Vec<ExpectedTurn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TestTurn {
    /// User input, `/command` lines included.
    React { text: String },
    /// Advance without input.
    Next,
    /// Timer fire handled by `next`; skipped unless a pause is pending.
    Tick,
    /// Timer fire delivered to `react` as an event; skipped unless a pause
    /// is pending.
    Timer,
    Reset,
}

impl TestTurn {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::React { .. } => "react",
            Self::Next => "next",
            Self::Tick => "tick",
            Self::Timer => "timer",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedTurn {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub position: Option<usize>,
}

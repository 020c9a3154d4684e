mod case;
mod runner;
mod source;

pub use case::{ExpectedTurn, TestCase, TestTurn, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, assert_demo_dir, run_case, ObservedTurn, RunReport};
pub use source::{discover_case_dirs, find_script_in_dir, read_script_source, read_test_case};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DmToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No script.csv/script.json under {path}.")]
    ScriptMissing { path: PathBuf },
    #[error("Engine error: {0}")]
    Engine(#[from] dm_core::DialogueError),
    #[error("Expected turn count {expected}, actual {actual}. observed={observed}")]
    TurnCountMismatch {
        expected: usize,
        actual: usize,
        observed: String,
    },
    #[error("Response mismatch at turn {index}. expected={expected:?} actual={actual:?}")]
    ResponseMismatch {
        index: usize,
        expected: Option<String>,
        actual: Option<String>,
    },
    #[error("Position mismatch at turn {index}. expected={expected} actual={actual}")]
    PositionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Failed to serialize turns for diff: {0}")]
    TurnSerialize(serde_json::Error),
}

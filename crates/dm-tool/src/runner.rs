use std::path::Path;

use dm_api::{create_engine_from_source, CreateEngineOptions};
use dm_core::UserAction;
use dm_runtime::DialogueEngine;
use serde::Serialize;

use crate::source::{find_script_in_dir, read_script_source, read_test_case};
use crate::{DmToolError, TestCase, TestTurn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedTurn {
    pub response: Option<String>,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub observed_turns: Vec<ObservedTurn>,
}

pub fn run_case(script_path: &Path, case: &TestCase) -> Result<RunReport, DmToolError> {
    let source = read_script_source(script_path)?;
    let mut engine = create_engine_from_source(
        &script_path.to_string_lossy(),
        &source,
        CreateEngineOptions {
            config: case.config.clone(),
            location_matcher: None,
        },
    )?;

    let observed_turns = case
        .turns
        .iter()
        .map(|turn| ObservedTurn {
            response: play_turn(&mut engine, turn),
            position: engine.position(),
        })
        .collect();

    Ok(RunReport { observed_turns })
}

fn play_turn(engine: &mut DialogueEngine, turn: &TestTurn) -> Option<String> {
    match turn {
        TestTurn::React { text } => Some(engine.react(UserAction::from_line(text))),
        TestTurn::Next => Some(engine.next()),
        TestTurn::Tick => engine.needs_proactive().then(|| engine.next()),
        TestTurn::Timer => engine
            .needs_proactive()
            .then(|| engine.react(UserAction::Timer)),
        TestTurn::Reset => {
            engine.reset();
            None
        }
    }
}

pub fn assert_case(script_path: &Path, case_path: &Path) -> Result<(), DmToolError> {
    let case = read_test_case(case_path)?;
    let report = run_case(script_path, &case)?;

    if report.observed_turns.len() != case.expected_turns.len() {
        let observed = serde_json::to_string_pretty(&report.observed_turns)
            .map_err(DmToolError::TurnSerialize)?;
        return Err(DmToolError::TurnCountMismatch {
            expected: case.expected_turns.len(),
            actual: report.observed_turns.len(),
            observed,
        });
    }

    for (index, (expected, actual)) in case
        .expected_turns
        .iter()
        .zip(report.observed_turns.iter())
        .enumerate()
    {
        if expected.response != actual.response {
            return Err(DmToolError::ResponseMismatch {
                index,
                expected: expected.response.clone(),
                actual: actual.response.clone(),
            });
        }
        if let Some(position) = expected.position {
            if position != actual.position {
                return Err(DmToolError::PositionMismatch {
                    index,
                    expected: position,
                    actual: actual.position,
                });
            }
        }
    }

    Ok(())
}

/// Runs `<dir>/testcase.json` against the script found in `dir`.
pub fn assert_demo_dir(dir: &Path) -> Result<(), DmToolError> {
    let script_path = find_script_in_dir(dir)?;
    assert_case(&script_path, &dir.join("testcase.json"))
}

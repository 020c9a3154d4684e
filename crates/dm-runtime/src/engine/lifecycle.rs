use super::*;

pub const DEFAULT_RESTART_MESSAGE: &str = "Scenario finished. Starting over.";
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// Decides whether an event satisfies a `[location ...]` placeholder.
///
/// Without one, location placeholders accept every event.
pub trait LocationMatcher: Send + Sync {
    fn matches(&self, pattern: &str, action: &dyn ActionEvent) -> bool;
}

impl<F> LocationMatcher for F
where
    F: Fn(&str, &dyn ActionEvent) -> bool + Send + Sync,
{
    fn matches(&self, pattern: &str, action: &dyn ActionEvent) -> bool {
        self(pattern, action)
    }
}

#[derive(Clone, Default)]
pub struct DialogueEngineOptions {
    pub default_negative_response: Option<String>,
    /// Delay suggested for `[pause]` markers that carry no number.
    pub default_pause: Option<Duration>,
    pub restart_message: Option<String>,
    pub location_matcher: Option<Arc<dyn LocationMatcher>>,
}

/// One conversation over one compiled script.
pub struct DialogueEngine {
    pub(super) script: CompiledScript,
    pub(super) default_negative_response: Option<String>,
    pub(super) default_pause: Duration,
    pub(super) restart_message: String,
    pub(super) location_matcher: Option<Arc<dyn LocationMatcher>>,

    pub(super) position: usize,
    pub(super) count: usize,
}

impl DialogueEngine {
    pub fn new(
        script: CompiledScript,
        options: DialogueEngineOptions,
    ) -> Result<Self, DialogueError> {
        validate_graph(&script)?;

        let mut engine = Self {
            script,
            default_negative_response: options.default_negative_response,
            default_pause: options.default_pause.unwrap_or(DEFAULT_PAUSE),
            restart_message: options
                .restart_message
                .unwrap_or_else(|| DEFAULT_RESTART_MESSAGE.to_string()),
            location_matcher: options.location_matcher,
            position: 0,
            count: 0,
        };
        engine.reset();
        Ok(engine)
    }

    pub fn from_rows(
        rows: &[ScriptRow],
        options: DialogueEngineOptions,
    ) -> Result<Self, DialogueError> {
        let script = dm_compiler::compile_script(rows)?;
        Self::new(script, options)
    }

    /// Rolls the conversation back to the first step. Idempotent.
    pub fn reset(&mut self) {
        self.position = 0;
        self.count = self.script.len();
        tracing::debug!(count = self.count, "dialogue reset");
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn script(&self) -> &CompiledScript {
        &self.script
    }

    pub fn current_step(&self) -> &Step {
        &self.script.steps[self.current_index()]
    }

    pub fn candidate_positions(&self) -> &[usize] {
        &self.current_step().candidate_positions
    }

    pub fn has_location_matcher(&self) -> bool {
        self.location_matcher.is_some()
    }

    /// `position` may sit one past the end after `next` walks off the last
    /// step; queries treat that as the start of the next cycle.
    pub(super) fn current_index(&self) -> usize {
        if self.position < self.count {
            self.position
        } else {
            0
        }
    }
}

fn validate_graph(script: &CompiledScript) -> Result<(), DialogueError> {
    if script.is_empty() {
        return Err(DialogueError::new(
            "DM_SCRIPT_EMPTY",
            "Script must contain at least one row.",
        ));
    }

    for step in &script.steps {
        if step.candidate_positions.is_empty() {
            return Err(DialogueError::with_row(
                "DM_SCRIPT_INVALID",
                format!("Row {} has no candidate positions.", step.index),
                step.index,
            ));
        }
        if let Some(bad) = step
            .candidate_positions
            .iter()
            .find(|candidate| **candidate >= script.len())
        {
            return Err(DialogueError::with_row(
                "DM_SCRIPT_INVALID",
                format!(
                    "Row {} points at candidate {} outside the script.",
                    step.index, bad
                ),
                step.index,
            ));
        }
    }
    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use dm_compiler::compile_script;
use dm_core::{CompiledScript, DialogueError, ScriptRow};
use dm_parser::parse_script_source;
use dm_runtime::{DialogueEngine, DialogueEngineOptions, LocationMatcher};
use serde::{Deserialize, Serialize};

/// Engine settings that can live next to a script as a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub default_negative_response: Option<String>,
    #[serde(default)]
    pub default_pause_secs: Option<u64>,
    #[serde(default)]
    pub restart_message: Option<String>,
}

impl EngineConfig {
    pub fn into_options(
        self,
        location_matcher: Option<Arc<dyn LocationMatcher>>,
    ) -> DialogueEngineOptions {
        DialogueEngineOptions {
            default_negative_response: self.default_negative_response,
            default_pause: self.default_pause_secs.map(Duration::from_secs),
            restart_message: self.restart_message,
            location_matcher,
        }
    }
}

pub fn load_engine_config(raw: &str) -> Result<EngineConfig, DialogueError> {
    serde_json::from_str(raw)
        .map_err(|error| DialogueError::new("API_CONFIG_INVALID", error.to_string()))
}

#[derive(Clone, Default)]
pub struct CreateEngineOptions {
    pub config: EngineConfig,
    pub location_matcher: Option<Arc<dyn LocationMatcher>>,
}

pub fn create_engine_from_rows(
    rows: &[ScriptRow],
    options: CreateEngineOptions,
) -> Result<DialogueEngine, DialogueError> {
    let script = compile_script(rows)?;
    DialogueEngine::new(
        script,
        options.config.into_options(options.location_matcher),
    )
}

/// Parses a script by its file extension (`.csv` or `.json`) and builds an
/// engine for it.
pub fn create_engine_from_source(
    path_hint: &str,
    source: &str,
    options: CreateEngineOptions,
) -> Result<DialogueEngine, DialogueError> {
    let rows = parse_script_source(path_hint, source)?;
    create_engine_from_rows(&rows, options)
}

pub fn check_script_source(path_hint: &str, source: &str) -> Result<CompiledScript, DialogueError> {
    let rows = parse_script_source(path_hint, source)?;
    compile_script(&rows)
}

use std::fs;
use std::path::Path;

use dm_api::{load_engine_config, EngineConfig};
use dm_core::DialogueError;

use crate::{map_cli_config_read, map_cli_script_read, LoadedScript};

pub(crate) fn load_script(script: &str) -> Result<LoadedScript, DialogueError> {
    let path = Path::new(script);
    if !path.exists() {
        return Err(DialogueError::new(
            "CLI_SCRIPT_NOT_FOUND",
            format!("Script file does not exist: {}", path.display()),
        ));
    }
    if !path.is_file() {
        return Err(DialogueError::new(
            "CLI_SCRIPT_NOT_FILE",
            format!("Script path is not a file: {}", path.display()),
        ));
    }

    let source = fs::read_to_string(path).map_err(map_cli_script_read)?;
    Ok(LoadedScript {
        path: script.to_string(),
        source,
    })
}

pub(crate) fn load_config(config: Option<&str>) -> Result<EngineConfig, DialogueError> {
    let Some(config) = config else {
        return Ok(EngineConfig::default());
    };

    let raw = fs::read_to_string(config).map_err(map_cli_config_read)?;
    load_engine_config(&raw)
}

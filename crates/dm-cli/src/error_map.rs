use std::fmt::Display;
use std::io::Write;

use dm_core::DialogueError;

fn map_error(code: &'static str, error: impl Display) -> DialogueError {
    DialogueError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: DialogueError, writer: &mut dyn Write) -> i32 {
    let message = serde_json::to_string(&error.message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = writeln!(writer, "RESULT:ERROR");
    let _ = writeln!(writer, "ERROR_CODE:{}", error.code);
    if let Some(row) = error.row {
        let _ = writeln!(writer, "ERROR_ROW:{}", row);
    }
    let _ = writeln!(writer, "ERROR_MSG_JSON:{}", message);
    1
}

pub(crate) fn map_cli_io(error: std::io::Error) -> DialogueError {
    map_error("CLI_IO", error)
}

pub(crate) fn map_cli_script_read(error: std::io::Error) -> DialogueError {
    map_error("CLI_SCRIPT_READ", error)
}

pub(crate) fn map_cli_config_read(error: std::io::Error) -> DialogueError {
    map_error("CLI_CONFIG_READ", error)
}

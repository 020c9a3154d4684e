use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use clap::Parser;
use dm_api::{check_script_source, create_engine_from_source, CreateEngineOptions};
use dm_core::{DialogueError, UserAction};
use dm_runtime::DialogueEngine;

mod cli_args;
mod error_map;
mod line_chat;
mod models;
mod source_loader;

pub(crate) use cli_args::{CheckArgs, Cli, Mode, PlayArgs, SayArgs};
pub(crate) use error_map::{emit_error, map_cli_config_read, map_cli_io, map_cli_script_read};
pub(crate) use line_chat::run_line_chat;
#[cfg(test)]
pub(crate) use line_chat::handle_chat_command;
pub(crate) use models::{ChatCommandAction, LoadedScript};
pub(crate) use source_loader::{load_config, load_script};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    run_cli_with_io(args, &mut reader, &mut writer)
}

pub fn run_cli_with_io<I, T>(args: I, reader: &mut dyn BufRead, writer: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli, reader, writer) {
        Ok(code) => code,
        Err(error) => {
            tracing::debug!(code = %error.code, "command failed");
            emit_error(error, writer)
        }
    }
}

fn run(cli: Cli, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<i32, DialogueError> {
    match cli.command {
        Mode::Play(args) => run_play(args, reader, writer),
        Mode::Check(args) => run_check(args, writer),
        Mode::Say(args) => run_say(args, writer),
    }
}

fn create_engine(script: &str, config: Option<&str>) -> Result<DialogueEngine, DialogueError> {
    let loaded = load_script(script)?;
    let config = load_config(config)?;
    create_engine_from_source(
        &loaded.path,
        &loaded.source,
        CreateEngineOptions {
            config,
            location_matcher: None,
        },
    )
}

fn run_play(
    args: PlayArgs,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, DialogueError> {
    let mut engine = create_engine(&args.script, args.config.as_deref())?;
    run_line_chat(&mut engine, reader, writer)
}

fn run_check(args: CheckArgs, writer: &mut dyn Write) -> Result<i32, DialogueError> {
    let loaded = load_script(&args.script)?;
    let compiled = check_script_source(&loaded.path, &loaded.source)?;

    writeln!(writer, "RESULT:OK").map_err(map_cli_io)?;
    writeln!(writer, "STEPS:{}", compiled.len()).map_err(map_cli_io)?;
    writeln!(writer, "TAGS:{}", compiled.tags.len()).map_err(map_cli_io)?;
    for warning in &compiled.warnings {
        let kind = serde_json::to_value(warning.kind)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        writeln!(
            writer,
            "WARNING:row={} kind={} {}",
            warning.row, kind, warning.message
        )
        .map_err(map_cli_io)?;
    }
    Ok(0)
}

fn run_say(args: SayArgs, writer: &mut dyn Write) -> Result<i32, DialogueError> {
    let mut engine = create_engine(&args.script, args.config.as_deref())?;

    writeln!(writer, "RESULT:OK").map_err(map_cli_io)?;
    for input in &args.inputs {
        let response = engine.react(UserAction::from_line(input));
        let response_json = serde_json::to_string(&response)
            .map_err(|error| DialogueError::new("CLI_OUTPUT", error.to_string()))?;
        writeln!(writer, "RESPONSE_JSON:{}", response_json).map_err(map_cli_io)?;
        writeln!(writer, "POSITION:{}", engine.position()).map_err(map_cli_io)?;
    }
    Ok(0)
}

use std::io::{BufRead, Write};

use dm_core::{DialogueError, UserAction};
use dm_runtime::DialogueEngine;

use crate::{map_cli_io, ChatCommandAction};

const HELP_LINES: [&str; 7] = [
    ":help     show this list",
    ":next     advance without input",
    ":tick     advance only if a pause is pending",
    ":timer    send a timer event if a pause is pending",
    ":restart  go back to the first step",
    ":where    show the current position",
    ":quit     leave",
];

pub(crate) fn run_line_chat(
    engine: &mut DialogueEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, DialogueError> {
    writeln!(writer, "Dialogue player").map_err(map_cli_io)?;
    writeln!(writer, "commands: :help :next :tick :timer :restart :where :quit")
        .map_err(map_cli_io)?;

    loop {
        write!(writer, "> ").map_err(map_cli_io)?;
        writer.flush().map_err(map_cli_io)?;

        let mut line = String::new();
        if reader.read_line(&mut line).map_err(map_cli_io)? == 0 {
            writeln!(writer).map_err(map_cli_io)?;
            return Ok(0);
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let mut emit = |text: String| writeln!(writer, "{}", text);
        match handle_chat_command(line, engine, &mut emit).map_err(map_cli_io)? {
            ChatCommandAction::Quit => return Ok(0),
            ChatCommandAction::Continue => continue,
            ChatCommandAction::NotHandled => {}
        }

        let response = engine.react(UserAction::from_line(line));
        writeln!(writer, "bot> {}", response).map_err(map_cli_io)?;
    }
}

pub(crate) fn handle_chat_command(
    raw: &str,
    engine: &mut DialogueEngine,
    emit: &mut dyn FnMut(String) -> std::io::Result<()>,
) -> std::io::Result<ChatCommandAction> {
    match raw.trim() {
        ":help" => {
            for line in HELP_LINES {
                emit(line.to_string())?;
            }
        }
        ":next" => emit(format!("bot> {}", engine.next()))?,
        ":tick" => {
            if engine.needs_proactive() {
                emit(format!("bot> {}", engine.next()))?;
            } else {
                emit("(no pause pending)".to_string())?;
            }
        }
        ":timer" => {
            if engine.needs_proactive() {
                emit(format!("bot> {}", engine.react(UserAction::Timer)))?;
            } else {
                emit("(no pause pending)".to_string())?;
            }
        }
        ":restart" => {
            engine.reset();
            emit("(restarted)".to_string())?;
        }
        ":where" => emit(describe_position(engine))?,
        ":quit" => return Ok(ChatCommandAction::Quit),
        _ => return Ok(ChatCommandAction::NotHandled),
    }
    Ok(ChatCommandAction::Continue)
}

fn describe_position(engine: &DialogueEngine) -> String {
    let pause = match engine.proactive_delay() {
        Some(delay) => format!("pause pending ({}s)", delay.as_secs()),
        None => "no pause pending".to_string(),
    };
    format!(
        "position {}/{} candidates {:?}, {}",
        engine.position(),
        engine.count(),
        engine.candidate_positions(),
        pause
    )
}

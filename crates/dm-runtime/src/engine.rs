use std::sync::Arc;
use std::time::Duration;

use dm_core::{ActionEvent, CompiledScript, DialogueError, PatternKind, ScriptRow, Step};

mod lifecycle;
mod matching;
mod proactive;
mod step;

pub use lifecycle::{
    DialogueEngine, DialogueEngineOptions, LocationMatcher, DEFAULT_PAUSE,
    DEFAULT_RESTART_MESSAGE,
};

#[cfg(test)]
mod tests;

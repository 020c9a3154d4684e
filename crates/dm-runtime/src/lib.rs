mod engine;

pub use engine::{
    DialogueEngine, DialogueEngineOptions, LocationMatcher, DEFAULT_PAUSE,
    DEFAULT_RESTART_MESSAGE,
};

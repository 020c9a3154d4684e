pub mod action;
pub mod error;
pub mod types;

pub use action::*;
pub use error::DialogueError;
pub use types::*;

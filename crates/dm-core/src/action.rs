use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the engine needs to know about an incoming event.
///
/// Literal patterns only match events that carry text; commands, pauses,
/// wildcards and location placeholders do not look at it.
pub trait ActionEvent {
    fn text(&self) -> Option<&str>;

    fn location(&self) -> Option<GeoPoint> {
        None
    }
}

impl ActionEvent for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ActionEvent for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ActionEvent + ?Sized> ActionEvent for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    fn location(&self) -> Option<GeoPoint> {
        (**self).location()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UserAction {
    Text { text: String },
    Command { name: String, raw: String },
    Location { point: GeoPoint },
    Timer,
}

impl UserAction {
    /// Turns a raw chat line into an action: `/name args` becomes a command.
    pub fn from_line(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.strip_prefix('/') {
            Some(rest) => Self::Command {
                name: rest.split_whitespace().next().unwrap_or_default().to_string(),
                raw: trimmed.to_string(),
            },
            None => Self::Text {
                text: line.to_string(),
            },
        }
    }
}

impl ActionEvent for UserAction {
    fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text.as_str()),
            Self::Command { raw, .. } => Some(raw.as_str()),
            Self::Location { .. } | Self::Timer => None,
        }
    }

    fn location(&self) -> Option<GeoPoint> {
        match self {
            Self::Location { point } => Some(*point),
            _ => None,
        }
    }
}

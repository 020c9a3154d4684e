use std::sync::OnceLock;

use dm_core::PatternKind;
use regex::Regex;

/// Classifies an expected-action cell. Precedence follows the dialect:
/// command, wildcard, pause, location, other brackets, literal alternatives.
pub fn classify_pattern(expected: &str) -> PatternKind {
    if let Some(rest) = expected.strip_prefix('/') {
        return PatternKind::Command {
            name: rest.split_whitespace().next().unwrap_or_default().to_string(),
        };
    }

    if expected.starts_with('[') {
        if expected == "[anytext]" || expected == "[initial]" {
            return PatternKind::Wildcard;
        }
        if expected.starts_with("[pause") {
            return PatternKind::Pause {
                seconds: pause_seconds(expected),
            };
        }
        if expected.starts_with("[location") {
            return PatternKind::Location {
                raw: expected.to_string(),
            };
        }
        return PatternKind::Unsupported {
            raw: expected.to_string(),
        };
    }

    PatternKind::Literal {
        alternatives: expected
            .to_lowercase()
            .split('|')
            .map(|alternative| alternative.trim().to_string())
            .collect(),
    }
}

/// Reads the number out of `[pause 10]` / `[pause:10]`.
pub fn pause_seconds(expected: &str) -> Option<u64> {
    pause_regex()
        .captures(expected)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse::<u64>().ok())
}

fn pause_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\[pause\W*(\d+)").expect("pause regex"))
}

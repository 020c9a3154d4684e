use super::*;

impl DialogueEngine {
    /// Tests a raw expected-action cell against an event.
    pub fn is_valid_action<A: ActionEvent>(&self, expected: &str, action: &A) -> bool {
        self.kind_matches(&dm_compiler::classify_pattern(expected), expected, action)
    }

    pub(super) fn pattern_matches<A: ActionEvent>(&self, step: &Step, action: &A) -> bool {
        self.kind_matches(&step.pattern, &step.action, action)
    }

    fn kind_matches<A: ActionEvent>(&self, pattern: &PatternKind, raw: &str, action: &A) -> bool {
        match pattern {
            PatternKind::Command { .. } | PatternKind::Wildcard => true,
            // TODO: compare elapsed time against the pause length once the
            // engine tracks when the pause started.
            PatternKind::Pause { .. } => true,
            PatternKind::Location { .. } => match &self.location_matcher {
                Some(matcher) => matcher.matches(raw, action),
                None => true,
            },
            PatternKind::Literal { alternatives } => action
                .text()
                .map(|text| text.trim().to_lowercase())
                .is_some_and(|text| alternatives.iter().any(|alternative| *alternative == text)),
            PatternKind::Unsupported { .. } => false,
        }
    }

    /// Fallback text when no candidate of `position` matched: the step's own
    /// negative reaction, then the engine default, then the reaction of the
    /// current position.
    pub fn get_negative_response(&self, position: usize) -> String {
        let specific = self
            .script
            .step(position)
            .and_then(|step| step.negative_reaction.as_deref())
            .filter(|text| !text.is_empty());
        if let Some(specific) = specific {
            return specific.to_string();
        }

        if let Some(default) = self
            .default_negative_response
            .as_deref()
            .filter(|text| !text.is_empty())
        {
            return default.to_string();
        }

        self.current_step().reaction.clone()
    }
}

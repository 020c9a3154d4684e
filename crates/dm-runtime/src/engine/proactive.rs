use super::*;

impl DialogueEngine {
    /// Whether any step reachable from here waits on a `[pause` marker.
    pub fn needs_proactive(&self) -> bool {
        self.pause_candidate().is_some()
    }

    /// How long a timer should wait before calling [`DialogueEngine::next`].
    /// The engine itself never checks elapsed time.
    pub fn proactive_delay(&self) -> Option<Duration> {
        self.pause_candidate().map(|step| match step.pattern {
            PatternKind::Pause {
                seconds: Some(seconds),
            } => Duration::from_secs(seconds),
            _ => self.default_pause,
        })
    }

    fn pause_candidate(&self) -> Option<&Step> {
        self.candidate_positions()
            .iter()
            .map(|candidate| &self.script.steps[*candidate])
            .find(|step| step.has_pause_marker())
    }
}

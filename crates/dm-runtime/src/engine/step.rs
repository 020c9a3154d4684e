use super::*;

impl DialogueEngine {
    /// Advances strictly sequentially without looking at user input.
    ///
    /// Walking past the last step restarts the script and returns the restart
    /// message instead of a reaction.
    pub fn next(&mut self) -> String {
        if self.position >= self.count {
            self.reset();
            tracing::debug!("dialogue wrapped around");
            return self.restart_message.clone();
        }

        let response = self.script.steps[self.position].reaction.clone();
        self.position += 1;
        tracing::debug!(position = self.position, "dialogue advanced");
        response
    }

    /// Matches `action` against the candidates of the current step, in
    /// order. The first match wins and becomes the new position; with no
    /// match the position stays and the negative response is returned.
    pub fn react<A: ActionEvent>(&mut self, action: A) -> String {
        if self.position >= self.count {
            self.reset();
        }

        let from = self.position;
        let matched = self.script.steps[from]
            .candidate_positions
            .iter()
            .copied()
            .find(|candidate| self.pattern_matches(&self.script.steps[*candidate], &action));

        let Some(candidate) = matched else {
            tracing::debug!(position = from, "no candidate matched");
            return self.get_negative_response(from);
        };

        self.position = candidate;
        tracing::debug!(from, to = candidate, "dialogue transitioned");

        let reaction = &self.script.steps[candidate].reaction;
        if reaction.is_empty() {
            self.get_negative_response(candidate)
        } else {
            reaction.clone()
        }
    }
}

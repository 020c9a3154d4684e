use std::collections::BTreeMap;

use dm_core::{CompiledScript, DialogueError, ScriptRow, Step};

mod diagnostics;
mod graph;
mod pattern;

pub use graph::{default_candidates, resolve_tag_map};
pub use pattern::{classify_pattern, pause_seconds};

/// Compiles tabular rows into the step graph the runtime walks.
///
/// Rows stay at their input index. Linear order is the default; a non-empty
/// `next_tags` cell replaces the default with the listed tags, in order.
pub fn compile_script(rows: &[ScriptRow]) -> Result<CompiledScript, DialogueError> {
    if rows.is_empty() {
        return Err(DialogueError::new(
            "DM_SCRIPT_EMPTY",
            "Script must contain at least one row.",
        ));
    }

    let tags = resolve_tag_map(rows)?;
    let mut candidates = default_candidates(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if let Some(next_tags) = non_blank(&row.next_tags) {
            candidates[index] = graph::resolve_next_tags(index, next_tags, &tags)?;
        }
    }

    let steps = rows
        .iter()
        .zip(candidates)
        .enumerate()
        .map(|(index, (row, candidate_positions))| build_step(index, row, candidate_positions))
        .collect::<Vec<_>>();

    let warnings = diagnostics::collect_warnings(&steps);
    for warning in &warnings {
        tracing::warn!(row = warning.row, kind = ?warning.kind, "{}", warning.message);
    }
    tracing::debug!(steps = steps.len(), tags = tags.len(), "compiled dialogue script");

    Ok(CompiledScript {
        steps,
        tags: tags
            .into_iter()
            .map(|(tag, index)| (tag.to_string(), index))
            .collect::<BTreeMap<_, _>>(),
        warnings,
    })
}

fn build_step(index: usize, row: &ScriptRow, candidate_positions: Vec<usize>) -> Step {
    let action = row.action.clone().unwrap_or_default();
    Step {
        index,
        pattern: classify_pattern(&action),
        action,
        reaction: row.reaction.clone().unwrap_or_default(),
        tag: non_blank(&row.tag).map(str::to_string),
        next_tags: non_blank(&row.next_tags).map(str::to_string),
        negative_reaction: row
            .negative_reaction
            .clone()
            .filter(|value| !value.is_empty()),
        candidate_positions,
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

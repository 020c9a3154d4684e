use std::collections::BTreeMap;

use dm_core::{DialogueError, ScriptRow};

use crate::non_blank;

/// `[i + 1]` for every row, `[0]` for the last one.
pub fn default_candidates(count: usize) -> Vec<Vec<usize>> {
    (0..count)
        .map(|index| vec![if index + 1 < count { index + 1 } else { 0 }])
        .collect()
}

pub fn resolve_tag_map(rows: &[ScriptRow]) -> Result<BTreeMap<&str, usize>, DialogueError> {
    let mut tags = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(tag) = non_blank(&row.tag) else {
            continue;
        };
        if let Some(previous) = tags.insert(tag, index) {
            return Err(DialogueError::with_row(
                "DM_TAG_DUPLICATE",
                format!(
                    "Tag \"{}\" on row {} is already used by row {}.",
                    tag, index, previous
                ),
                index,
            ));
        }
    }
    Ok(tags)
}

pub(crate) fn resolve_next_tags(
    row: usize,
    next_tags: &str,
    tags: &BTreeMap<&str, usize>,
) -> Result<Vec<usize>, DialogueError> {
    next_tags
        .split('|')
        .map(str::trim)
        .map(|tag| {
            tags.get(tag).copied().ok_or_else(|| {
                DialogueError::with_row(
                    "DM_TAG_UNRESOLVED",
                    format!(
                        "Row {} branches to tag \"{}\" which no row declares.",
                        row, tag
                    ),
                    row,
                )
            })
        })
        .collect()
}

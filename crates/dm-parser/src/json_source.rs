use dm_core::{DialogueError, ScriptRow};

/// Reads a JSON array of row objects. Cells may be strings, numbers,
/// booleans or null, the way spreadsheet exports usually come out.
pub fn parse_json_script(source: &str) -> Result<Vec<ScriptRow>, DialogueError> {
    let rows: Vec<ScriptRow> = serde_json::from_str(source)
        .map_err(|error| DialogueError::new("DM_SOURCE_JSON", error.to_string()))?;

    Ok(rows.into_iter().map(blank_to_none).collect())
}

fn blank_to_none(row: ScriptRow) -> ScriptRow {
    let keep = |value: Option<String>| value.filter(|value| !value.is_empty());
    ScriptRow {
        action: keep(row.action),
        reaction: keep(row.reaction),
        tag: keep(row.tag),
        next_tags: keep(row.next_tags),
        negative_reaction: keep(row.negative_reaction),
    }
}

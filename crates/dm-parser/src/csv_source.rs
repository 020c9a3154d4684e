use std::collections::BTreeMap;

use csv::{ReaderBuilder, StringRecord, Trim};
use dm_core::{DialogueError, ScriptRow};

use crate::SCRIPT_COLUMNS;

/// Reads a header-first CSV table. `action` and `reaction` columns are
/// required; the remaining script columns are optional and unknown columns
/// are ignored.
pub fn parse_csv_script(source: &str) -> Result<Vec<ScriptRow>, DialogueError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source.as_bytes());

    let headers = reader.headers().map_err(map_csv_error)?.clone();
    let columns = column_indices(&headers);
    for required in ["action", "reaction"] {
        if !columns.contains_key(required) {
            return Err(DialogueError::new(
                "DM_SOURCE_COLUMNS",
                format!("CSV script is missing required column \"{}\".", required),
            ));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(map_csv_error)?;
        let cell = |name: &str| {
            columns
                .get(name)
                .and_then(|index| record.get(*index))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        rows.push(ScriptRow {
            action: cell("action"),
            reaction: cell("reaction"),
            tag: cell("tag"),
            next_tags: cell("next_tags"),
            negative_reaction: cell("negative_reaction"),
        });
    }

    Ok(rows)
}

fn column_indices(headers: &StringRecord) -> BTreeMap<&'static str, usize> {
    let mut columns = BTreeMap::new();
    for (index, header) in headers.iter().enumerate() {
        let lowered = header.to_ascii_lowercase();
        if let Some(known) = SCRIPT_COLUMNS.iter().find(|column| **column == lowered) {
            columns.entry(*known).or_insert(index);
        }
    }
    columns
}

fn map_csv_error(error: csv::Error) -> DialogueError {
    let row = error
        .position()
        .map(|position| position.record().saturating_sub(1) as usize);
    let mut mapped = DialogueError::new("DM_SOURCE_CSV", error.to_string());
    mapped.row = row;
    mapped
}

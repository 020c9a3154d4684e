use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{DmToolError, TestCase, TESTCASE_SCHEMA_V1};

const SCRIPT_FILE_NAMES: [&str; 2] = ["script.csv", "script.json"];

pub fn read_script_source(script_path: &Path) -> Result<String, DmToolError> {
    fs::read_to_string(script_path).map_err(|source| DmToolError::ReadFile {
        path: script_path.to_path_buf(),
        source,
    })
}

pub fn find_script_in_dir(dir: &Path) -> Result<PathBuf, DmToolError> {
    SCRIPT_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| DmToolError::ScriptMissing {
            path: dir.to_path_buf(),
        })
}

/// Every directory under `root` that holds a `testcase.json`, sorted.
pub fn discover_case_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == "testcase.json")
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect::<Vec<_>>();
    dirs.sort();
    dirs
}

pub fn read_test_case(case_path: &Path) -> Result<TestCase, DmToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| DmToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: TestCase = serde_json::from_str(&raw).map_err(|source| DmToolError::ParseCase {
        path: case_path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(DmToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}

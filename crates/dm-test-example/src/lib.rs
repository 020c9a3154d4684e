use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos")
}

pub fn demo_dir(name: &str) -> PathBuf {
    demos_root().join(name)
}

pub fn testcase_path(name: &str) -> PathBuf {
    demo_dir(name).join("testcase.json")
}

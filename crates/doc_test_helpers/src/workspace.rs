//! Workspace initialization utilities for tests

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Config path inside a workspace, mirrors `doc_config::CONFIG_RELATIVE_PATH`
const CONFIG_PATH: &str = ".docdeck/config.toml";

/// Create a temporary directory, removed when dropped
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a workspace whose `.docdeck/config.toml` holds `toml`
pub fn workspace_with_config(toml: &str) -> TempDir {
    let temp = temp_dir();
    temp.child(CONFIG_PATH)
        .write_str(toml)
        .expect("Failed to write config");
    temp
}

/// Create a workspace seeding the store with `(id, content)` pairs, in order
///
/// ```rust
/// use doc_test_helpers::workspace::workspace_with_documents;
///
/// let workspace = workspace_with_documents(&[("a.md", "alpha"), ("b.md", "beta")]);
/// assert!(workspace.path().join(".docdeck/config.toml").exists());
/// ```
pub fn workspace_with_documents(documents: &[(&str, &str)]) -> TempDir {
    let mut toml = String::new();
    for (id, content) in documents {
        toml.push_str("[[documents]]\n");
        toml.push_str(&format!("id = {}\n", toml_string(id)));
        toml.push_str(&format!("content = {}\n\n", toml_string(content)));
    }
    workspace_with_config(&toml)
}

/// Quote a value as a TOML basic string
fn toml_string(value: &str) -> String {
    // JSON string escaping is valid TOML basic-string escaping for text content
    serde_json::Value::String(value.to_string()).to_string()
}

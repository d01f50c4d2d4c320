//! Targeted env-var injection into the pict-rs deployment template.
//!
//! The template is version-controlled and hand-commented, so the whole
//! document is never re-serialized. Only the `pictrs_env_vars` block is
//! replaced: any existing block is stripped textually and a freshly
//! serialized one appended, leaving every other line byte-for-byte intact.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;
use crate::services::artifacts::write_staged;

const ENV_VARS_KEY: &str = "pictrs_env_vars";

#[derive(Serialize)]
struct EnvVarsBlock<'a> {
    pictrs_env_vars: &'a [String],
}

/// Set the top-level `pictrs_env_vars` list in the template at `path`.
pub fn write_env_vars(path: &Path, lines: &[String]) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    validate_mapping(path, &content)?;

    let mut output = strip_top_level_key(&content, ENV_VARS_KEY);
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    let block = serde_yaml::to_string(&EnvVarsBlock { pictrs_env_vars: lines }).map_err(|err| {
        AppError::config_error(format!("Failed to serialize {}: {}", path.display(), err))
    })?;
    output.push_str(&block);

    write_staged(path, output.as_bytes())
}

/// The template must be a YAML mapping (or empty) before a key can be set.
fn validate_mapping(path: &Path, content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Ok(());
    }

    let doc: serde_yaml::Value = serde_yaml::from_str(content).map_err(|err| {
        AppError::config_error(format!("Failed to parse {}: {}", path.display(), err))
    })?;

    match doc {
        serde_yaml::Value::Mapping(_) | serde_yaml::Value::Null => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{} is not a YAML mapping, refusing to set {}",
            path.display(),
            ENV_VARS_KEY
        ))),
    }
}

/// Remove a top-level key line and its indented or list-item continuation
/// lines, keeping everything else verbatim.
fn strip_top_level_key(content: &str, key: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut in_block = false;

    for line in content.split_inclusive('\n') {
        let stripped = line.trim_end_matches(['\r', '\n']);
        if is_key_line(stripped, key) {
            in_block = true;
            continue;
        }
        if in_block && is_block_continuation(stripped) {
            continue;
        }
        in_block = false;
        output.push_str(line);
    }

    output
}

fn is_key_line(line: &str, key: &str) -> bool {
    line.strip_prefix(key).is_some_and(|rest| rest.starts_with(':'))
}

fn is_block_continuation(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t') || line.starts_with("- ") || line == "-"
}

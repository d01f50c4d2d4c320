//! Literal line-by-line substitution for the inventory hosts file.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::services::artifacts::write_staged;

/// Ordered literal substitutions. Entries are applied to every line in
/// insertion order; matching is exact substring, case-sensitive, no regex.
#[derive(Debug, Default)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>, T: Into<String>>(&mut self, from: S, to: T) {
        self.entries.push((from.into(), to.into()));
    }
}

/// Rewrite `path` with every substitution applied to every line.
///
/// Line terminators are preserved; the whole file is read, transformed, and
/// staged back in one rename. An entry that matches no line at all means the
/// template no longer carries its placeholder, which is an error.
pub fn replace_in_file(path: &Path, substitutions: &Substitutions) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;

    let mut matched = vec![false; substitutions.entries.len()];
    let mut output = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let mut patched = line.to_string();
        for (index, (from, to)) in substitutions.entries.iter().enumerate() {
            if patched.contains(from.as_str()) {
                matched[index] = true;
                patched = patched.replace(from.as_str(), to);
            }
        }
        output.push_str(&patched);
    }

    if let Some(index) = matched.iter().position(|&hit| !hit) {
        return Err(AppError::PlaceholderNotFound {
            path: path.display().to_string(),
            placeholder: substitutions.entries[index].0.clone(),
        });
    }

    write_staged(path, output.as_bytes())
}

use crate::config::{CURRENT_VERSION_MARKER, NEW_VERSION_MARKER};
use crate::errors::Result;
use crate::instructions::Instruction;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// What happened to a single file during a version-bump pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The search phrase was found; every occurrence was (or, on a dry run,
    /// would have been) rewritten.
    Updated,
    /// The file was left untouched, with the reason why.
    Skipped(String),
}

/// Applies one instruction to its file.
///
/// The `{current_version}` marker in the search pattern and the
/// `{new_version}` marker in the replace pattern are substituted with the
/// concrete version strings, then every occurrence of the resulting search
/// phrase is replaced. The file is read and rewritten whole; no backup is
/// kept. On a dry run nothing is written.
///
/// A missing file and an absent search phrase are reported as
/// [`UpdateOutcome::Skipped`]; I/O failures on a file that exists propagate
/// as errors.
pub fn update_version_in_file(
    instruction: &Instruction,
    current_version: &str,
    new_version: &str,
    dry_run: bool,
) -> Result<UpdateOutcome> {
    if !instruction.file.exists() {
        return Ok(UpdateOutcome::Skipped("file not found".to_string()));
    }

    let content = fs::read_to_string(&instruction.file)?;
    let search_phrase = instruction
        .search_pattern
        .replace(CURRENT_VERSION_MARKER, current_version);
    let replace_phrase = instruction
        .replace_pattern
        .replace(NEW_VERSION_MARKER, new_version);
    if !content.contains(&search_phrase) {
        return Ok(UpdateOutcome::Skipped(format!(
            "file doesn't contain search phrase: {search_phrase}"
        )));
    }

    if !dry_run {
        debug!(
            "rewriting {}: {search_phrase:?} -> {replace_phrase:?}",
            instruction.file.display()
        );
        write_full(
            &instruction.file,
            &content.replace(&search_phrase, &replace_phrase),
        )?;
    }

    Ok(UpdateOutcome::Updated)
}

/// Rewrites `path` in one step: the new content goes to a temp file in the
/// same directory, which is then persisted over the original.
fn write_full(path: &Path, content: &str) -> Result<()> {
    // A bare relative file name has an empty parent.
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;

    // Preserve file permissions
    let perms = fs::metadata(path)?.permissions();
    fs::set_permissions(temp_file.path(), perms)?;

    temp_file.persist(path)?;
    Ok(())
}

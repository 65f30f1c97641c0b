use crate::config::PluginConfig;
use std::path::PathBuf;

/// A resolved order to process one file: where to look, what to search for,
/// and what to write in its place. Patterns still carry the version markers;
/// the updater substitutes them at use time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub file: PathBuf,
    pub search_pattern: String,
    pub replace_pattern: String,
}

/// Yields one [`Instruction`] per file reference found in `config`.
///
/// Replacement groups come first (in group order, then file order within
/// each group), followed by the single-file entries in the map's iteration
/// order. A file referenced several times yields that many independent
/// instructions. The sequence is lazy and finite.
pub fn read_instructions(config: &PluginConfig) -> impl Iterator<Item = Instruction> + '_ {
    let grouped = config.replacements.iter().flat_map(|group| {
        group.files.iter().map(|file| Instruction {
            file: PathBuf::from(file),
            search_pattern: group.search.clone(),
            replace_pattern: group.replace.clone(),
        })
    });
    let singles = config.file.iter().map(|(file, entry)| Instruction {
        file: PathBuf::from(file),
        search_pattern: entry.search.clone(),
        replace_pattern: entry.replace.clone(),
    });
    grouped.chain(singles)
}

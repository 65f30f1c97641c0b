use crate::errors::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Marker in a search pattern that stands for the package's current version.
pub const CURRENT_VERSION_MARKER: &str = "{current_version}";

/// Marker in a replace pattern that stands for the new version.
pub const NEW_VERSION_MARKER: &str = "{new_version}";

/// Name of the plugin's subsection of the project document's `tool` table.
pub const CONFIG_SECTION: &str = "poetry_bumpversion";

/// Search/replace overrides for a single configured file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// The phrase to search for. Defaults to the current-version marker.
    #[serde(default = "default_search")]
    pub search: String,
    /// The phrase written in place of every match. Defaults to the
    /// new-version marker.
    #[serde(default = "default_replace")]
    pub replace: String,
}

/// A replacement group: one search/replace pair applied to multiple files.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplacementConfig {
    /// The phrase to search for. Defaults to the current-version marker.
    #[serde(default = "default_search")]
    pub search: String,
    /// The phrase written in place of every match. Defaults to the
    /// new-version marker.
    #[serde(default = "default_replace")]
    pub replace: String,
    /// The files the pair applies to.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Plugin configuration extracted from the host's project document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    /// Per-file entries, keyed by file path.
    #[serde(default)]
    pub file: BTreeMap<String, FileConfig>,
    /// Ordered replacement groups.
    #[serde(default)]
    pub replacements: Vec<ReplacementConfig>,
}

impl PluginConfig {
    /// Extracts the plugin configuration from the host's parsed project
    /// document.
    ///
    /// A document without a `tool.poetry_bumpversion` section yields an
    /// empty configuration. A section that is present but has the wrong
    /// shape (for example `files` not being a list of strings) is a
    /// validation error.
    pub fn from_document(document: &toml::Value) -> Result<Self> {
        let Some(section) = document
            .get("tool")
            .and_then(|tool| tool.get(CONFIG_SECTION))
        else {
            return Ok(Self::default());
        };
        Ok(section.clone().try_into()?)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            search: default_search(),
            replace: default_replace(),
        }
    }
}

fn default_search() -> String {
    CURRENT_VERSION_MARKER.to_string()
}

fn default_replace() -> String {
    NEW_VERSION_MARKER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(text: &str) -> toml::Value {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_missing_section_yields_empty_config() {
        let config =
            PluginConfig::from_document(&document("[tool.other]\nkey = 1\n")).unwrap();
        assert!(config.file.is_empty());
        assert!(config.replacements.is_empty());

        let config = PluginConfig::from_document(&document("")).unwrap();
        assert!(config.file.is_empty());
        assert!(config.replacements.is_empty());
    }

    #[test]
    fn test_parses_both_configuration_shapes() {
        let config = PluginConfig::from_document(&document(
            r#"
            [[tool.poetry_bumpversion.replacements]]
            files = ["README.md", "docs/index.md"]
            search = "current: {current_version}"
            replace = "current: {new_version}"

            [tool.poetry_bumpversion.file."src/pkg/version.py"]
            search = "__version__ = \"{current_version}\""
            replace = "__version__ = \"{new_version}\""
            "#,
        ))
        .unwrap();

        assert_eq!(config.replacements.len(), 1);
        assert_eq!(
            config.replacements[0].files,
            vec!["README.md", "docs/index.md"]
        );
        assert_eq!(config.replacements[0].search, "current: {current_version}");
        let entry = &config.file["src/pkg/version.py"];
        assert_eq!(entry.replace, "__version__ = \"{new_version}\"");
    }

    #[test]
    fn test_omitted_fields_default_to_markers() {
        let config = PluginConfig::from_document(&document(
            r#"
            [[tool.poetry_bumpversion.replacements]]
            files = ["VERSION"]

            [tool.poetry_bumpversion.file."setup.cfg"]
            "#,
        ))
        .unwrap();

        assert_eq!(config.replacements[0].search, CURRENT_VERSION_MARKER);
        assert_eq!(config.replacements[0].replace, NEW_VERSION_MARKER);
        assert_eq!(config.file["setup.cfg"].search, CURRENT_VERSION_MARKER);
        assert_eq!(config.file["setup.cfg"].replace, NEW_VERSION_MARKER);
    }

    #[test]
    fn test_malformed_section_is_an_error() {
        let result = PluginConfig::from_document(&document(
            r#"
            [[tool.poetry_bumpversion.replacements]]
            files = "not-a-list"
            "#,
        ));
        assert!(result.is_err());
    }
}

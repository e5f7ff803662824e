use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub tree: TreeViewConfig,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

/// Tree view appearance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeViewConfig {
    /// Spaces of indentation per tree level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Indicator shown before an open folder
    #[serde(default = "default_open_indicator")]
    pub open_indicator: String,

    /// Indicator shown before a closed folder
    #[serde(default = "default_closed_indicator")]
    pub closed_indicator: String,

    /// Indicator shown before a leaf
    #[serde(default = "default_leaf_indicator")]
    pub leaf_indicator: String,
}

fn default_indent_width() -> usize {
    2
}

fn default_open_indicator() -> String {
    "▼ ".to_string()
}

fn default_closed_indicator() -> String {
    "> ".to_string()
}

fn default_leaf_indicator() -> String {
    "· ".to_string()
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            open_indicator: default_open_indicator(),
            closed_indicator: default_closed_indicator(),
            leaf_indicator: default_leaf_indicator(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            tree: TreeViewConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.theme, "dark");
        assert_eq!(config.tree.indent_width, 2);
        assert_eq!(config.tree.open_indicator, "▼ ");
        assert_eq!(config.tree.closed_indicator, "> ");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "tree": { "indent_width": 4 } }"#).unwrap();

        assert_eq!(config.tree.indent_width, 4);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.tree.leaf_indicator, "· ");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");

        assert!(Config::load(&dir.path().join("missing.json")).is_err());
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::input::EdgeFormat;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "dress.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DressConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub format: EdgeFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `pretty`, `text`, or `json`. Unset means TTY detection decides.
    #[serde(default)]
    pub format: Option<String>,
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `dress.toml` in `cwd` is used
/// when present and defaults otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`DressConfig`].
pub fn load_config(path: Option<&Path>, cwd: &Path) -> Result<DressConfig> {
    let path: PathBuf = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            if !default_path.exists() {
                return Ok(DressConfig::default());
            }
            default_path
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<DressConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let config = load_config(None, dir.path()).expect("load");
        assert_eq!(config, DressConfig::default());
        assert_eq!(config.input.format, EdgeFormat::Auto);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn default_file_is_picked_up() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[input]\nformat = \"json\"\n\n[output]\nformat = \"text\"\n",
        )
        .expect("write config");

        let config = load_config(None, dir.path()).expect("load");
        assert_eq!(config.input.format, EdgeFormat::Json);
        assert_eq!(config.output.format.as_deref(), Some("text"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").expect("write config");

        let config = load_config(Some(&path), dir.path()).expect("load");
        assert_eq!(config.input.format, EdgeFormat::Auto);
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_config(Some(&dir.path().join("nope.toml")), dir.path())
            .expect_err("missing file");
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[input]\nformat = \"yaml\"\n")
            .expect("write config");

        let err = load_config(None, dir.path()).expect_err("bad format");
        assert!(err.to_string().contains("Failed to parse"));
    }
}

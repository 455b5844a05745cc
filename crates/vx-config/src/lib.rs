//! Configuration management for VX.
//!
//! Parses `vx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [site]
//! root_dir = "."
//! views_root = "/Views/Documentation"
//!
//! [[versions]]
//! name = "NetJs"
//! url_name = "net"
//! caption = ".NET"
//! default = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use vx_versions::VersionInfo;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vx.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No config file found walking up from the start directory.
    #[error("no {CONFIG_FILENAME} found searching up from {}", .0.display())]
    NotFound(PathBuf),
    /// Config file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML.
    #[error("{}: {source}", .path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Versions the site serves. Empty disables versioning.
    pub versions: Vec<VersionInfo>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root directory. Relative paths resolve against the config
    /// file's directory.
    pub root_dir: PathBuf,
    /// Logical views root to index.
    pub views_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            views_root: "/Views".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// A relative `site.root_dir` is resolved against the config file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if config.site.root_dir.is_relative()
            && let Some(dir) = path.parent()
        {
            config.site.root_dir = dir.join(&config.site.root_dir);
        }
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Discover and load `vx.toml`, walking up from `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no config file exists in
    /// `start_dir` or any of its ancestors, and the [`load`](Self::load)
    /// errors otherwise.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut dir = Some(start_dir);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
            dir = current.parent();
        }

        Err(ConfigError::NotFound(start_dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_full_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vx.toml");
        fs::write(
            &path,
            concat!(
                "[site]\n",
                "root_dir = \"site\"\n",
                "views_root = \"/Views/Documentation\"\n",
                "\n",
                "[[versions]]\n",
                "name = \"NetJs\"\n",
                "url_name = \"net\"\n",
                "caption = \".NET\"\n",
                "default = true\n",
                "\n",
                "[[versions]]\n",
                "name = \"NodeJs\"\n",
                "url_name = \"node\"\n",
                "caption = \"Node\"\n",
            ),
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.site.views_root, "/Views/Documentation");
        assert_eq!(config.site.root_dir, temp.path().join("site"));
        assert_eq!(config.versions.len(), 2);
        assert!(config.versions[0].is_default);
        assert!(!config.versions[1].is_default);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_defaults_for_missing_sections() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vx.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.site.views_root, "/Views");
        assert_eq!(config.site.root_dir, temp.path().join("."));
        assert!(config.versions.is_empty());
    }

    #[test]
    fn test_load_absolute_root_dir_is_kept() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vx.toml");
        fs::write(&path, "[site]\nroot_dir = \"/srv/site\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.site.root_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vx.toml");
        fs::write(&path, "[site\n").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_discover_walks_up_to_config() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("vx.toml"), "[site]\nviews_root = \"/Views/Docs\"\n")
            .unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::discover(&nested).unwrap();

        assert_eq!(config.site.views_root, "/Views/Docs");
    }

    #[test]
    fn test_discover_without_config_is_not_found() {
        let temp = tempfile::tempdir().unwrap();

        let err = Config::discover(temp.path()).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}

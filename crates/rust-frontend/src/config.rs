//! Engine configuration.
//!
//! Settings live in an `[engine]` table of `rust-frontend.toml` (or the
//! hidden `.rust-frontend.toml`):
//!
//! ```toml
//! [engine]
//! max_depth = 4096
//! memoize = true
//! max_input_bytes = 4194304
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

pub(crate) const CONFIG_FILES: &[&str] = &["rust-frontend.toml", ".rust-frontend.toml"];

const DEFAULT_MAX_DEPTH: usize = 4096;

/// Resource bounds and switches for one matching session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of nested node-producing rule invocations before a
    /// match aborts with [`crate::EngineError::RecursionLimit`]. Inline
    /// rules do not count.
    pub max_depth: usize,
    /// Cache `(rule, position)` results. Turning this off only makes
    /// matching slower; results are identical.
    pub memoize: bool,
    /// Inputs longer than this many bytes are rejected before lexing.
    pub max_input_bytes: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            memoize: true,
            max_input_bytes: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    engine: EngineSection,
}

#[derive(Debug, Default, Deserialize)]
struct EngineSection {
    #[serde(default)]
    max_depth: Option<usize>,
    #[serde(default)]
    memoize: Option<bool>,
    #[serde(default)]
    max_input_bytes: Option<usize>,
}

impl EngineConfig {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for a zero `max_depth`.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigFile = toml::from_str(contents)?;
        let defaults = Self::default();
        let config = Self {
            max_depth: parsed.engine.max_depth.unwrap_or(defaults.max_depth),
            memoize: parsed.engine.memoize.unwrap_or(defaults.memoize),
            max_input_bytes: parsed.engine.max_input_bytes,
        };
        if config.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(config)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the errors of [`EngineConfig::from_toml`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Looks for a configuration file in `root`.
    ///
    /// Unreadable or invalid files are logged and the defaults are used.
    #[must_use]
    pub fn discover(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    "Failed to load rust-frontend config at {}: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

pub(crate) fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

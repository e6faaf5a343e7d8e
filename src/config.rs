//! Search configuration

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the engine picks among the evaluated candidate actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Stop at the first candidate that does not lose: X takes the first
    /// action worth more than -1, O the first worth less than +1. If every
    /// candidate loses, the first one is returned.
    #[default]
    FirstAcceptable,
    /// Evaluate every candidate and keep the first with the best value.
    Best,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::FirstAcceptable => "first-acceptable",
            SelectionPolicy::Best => "best",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-acceptable" | "first" => Ok(SelectionPolicy::FirstAcceptable),
            "best" | "argmax" => Ok(SelectionPolicy::Best),
            other => Err(format!(
                "unknown selection policy '{other}' (expected 'first-acceptable' or 'best')"
            )),
        }
    }
}

/// Configuration for a [`Minimax`](crate::minimax::Minimax) engine.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::config::{SearchConfig, SelectionPolicy};
///
/// let config = SearchConfig::new().with_selection(SelectionPolicy::Best);
/// assert_eq!(config.selection, SelectionPolicy::Best);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Candidate selection at the root of the search
    pub selection: SelectionPolicy,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root selection policy.
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| crate::Error::Io {
            operation: format!("write config file {}", path.display()),
            source,
        })
    }
}

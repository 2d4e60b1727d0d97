//! Configuration for the todo widget
//!
//! Settings are read from an optional TOML file. Every field has a default,
//! so a missing file or a partial file is valid.
//!
//! ```toml
//! [view]
//! title = "Todo"
//! prompt = "Create a new todo..."
//! placeholder = "Nothing to do yet"
//! show_ids = false
//!
//! [input]
//! reject_blank = false
//!
//! [ids]
//! strategy = "random"
//! length = 9
//! ```

use crate::todo::{
    DEFAULT_ID_LENGTH, ID_LENGTH_RANGE, IdGenerator, RandomIdGenerator, SequentialIdGenerator,
    SystemClock, TodoStore,
};
use anyhow::{Context as _, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub view: ViewConfig,
    pub input: InputConfig,
    pub ids: IdConfig,
}

/// How frames are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Heading shown at the top of every frame
    pub title: String,
    /// Hint shown on the input line
    pub prompt: String,
    /// Text of the single row shown when the list is empty
    pub placeholder: String,
    /// Append each item's id to its row
    pub show_ids: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Todo".to_string(),
            prompt: "Create a new todo...".to_string(),
            placeholder: "Nothing to do yet".to_string(),
            show_ids: false,
        }
    }
}

/// How input lines are turned into store calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Ignore confirmed entries that are empty or whitespace-only
    pub reject_blank: bool,
}

/// Id generation strategy
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Random lowercase alphanumeric tokens
    #[default]
    random,
    /// Session nonce plus counter
    sequential,
}

/// Id settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    pub strategy: IdStrategy,
    /// Token length for the random strategy
    pub length: usize,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::random,
            length: DEFAULT_ID_LENGTH,
        }
    }
}

impl IdConfig {
    /// Build the generator described by this configuration
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self.strategy {
            IdStrategy::random => Box::new(RandomIdGenerator::new(self.length)),
            IdStrategy::sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A path that does not exist yields the defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// The validated configuration or an error describing what is wrong
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.ids.strategy == IdStrategy::random && !ID_LENGTH_RANGE.contains(&self.ids.length)
        {
            bail!(
                "ids.length must be between {} and {}, got {}",
                ID_LENGTH_RANGE.start(),
                ID_LENGTH_RANGE.end(),
                self.ids.length
            );
        }
        Ok(())
    }

    /// Create an empty store using the configured id strategy and the system clock
    pub fn build_store(&self) -> TodoStore {
        TodoStore::with_parts(self.ids.generator(), Box::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.view.title, "Todo");
        assert_eq!(config.ids.length, 9);
        assert!(!config.input.reject_blank);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::parse("[view]\nshow_ids = true\n").unwrap();
        assert!(config.view.show_ids);
        assert_eq!(config.view.prompt, "Create a new todo...");
        assert_eq!(config.ids.strategy, IdStrategy::random);
    }

    #[test]
    fn test_sequential_strategy() {
        let config = Config::parse("[ids]\nstrategy = \"sequential\"\n").unwrap();
        assert_eq!(config.ids.strategy, IdStrategy::sequential);

        let mut store = config.build_store();
        let id = store.add("x");
        assert!(id.as_str().ends_with("-1"));
    }

    #[test]
    fn test_invalid_id_length_rejected() {
        let err = Config::parse("[ids]\nlength = 0\n").unwrap_err();
        assert!(err.to_string().contains("ids.length"));

        assert!(Config::parse("[ids]\nlength = 33\n").is_err());
        assert!(Config::parse("[ids]\nlength = 4\n").is_ok());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("[view]\ncolour = \"red\"\n").is_err());
        assert!(Config::parse("[ids]\nstrategy = \"uuid\"\n").is_err());
    }
}

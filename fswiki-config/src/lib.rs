//! Configuration loader for the fswiki formatter.
//!
//! `defaults/fswiki.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`FswikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use fswiki_fmt::formats::fswiki::formatting_rules::{FormattingRules, TableAlign};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/fswiki.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "fswiki.toml";

/// Top-level configuration consumed by fswiki applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FswikiConfig {
    pub formatting: FormattingConfig,
}

/// Formatting-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub table: TableFormattingConfig,
}

/// Mirrors the table knobs exposed by the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFormattingConfig {
    pub align: TableAlign,
    pub insert_trailing_space: bool,
}

impl From<&TableFormattingConfig> for FormattingRules {
    fn from(config: &TableFormattingConfig) -> Self {
        FormattingRules {
            table_align: config.align,
            table_insert_trailing_space: config.insert_trailing_space,
        }
    }
}

impl From<TableFormattingConfig> for FormattingRules {
    fn from(config: TableFormattingConfig) -> Self {
        (&config).into()
    }
}

impl FswikiConfig {
    /// Formatter rules described by this configuration.
    pub fn formatting_rules(&self) -> FormattingRules {
        (&self.formatting.table).into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, such as a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FswikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

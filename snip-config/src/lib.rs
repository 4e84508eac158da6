//! Configuration for the snip tools.
//!
//! Every key has a value in `defaults/snip.default.toml`, which is compiled in.
//! [`Loader`] stacks a project `snip.toml`, an explicit `--config` file and
//! single-key overrides on top, then yields a [`SnipConfig`] whose sections
//! convert straight into engine types ([`Parser`], [`Unresolved`]).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use snip_engine::{Parser, Unresolved};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/snip.default.toml");

/// Parser, expansion and output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SnipConfig {
    pub parser: ParserConfig,
    pub expansion: ExpansionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub default_language: String,
}

impl ParserConfig {
    /// A parser carrying the configured default language.
    pub fn parser(&self) -> Parser {
        Parser::new().with_default_language(self.default_language.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    pub unresolved: UnresolvedPolicy,
}

/// How unbound `$N` tokens are treated during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnresolvedPolicy {
    #[serde(rename = "pass-through")]
    PassThrough,
    #[serde(rename = "strict")]
    Strict,
}

impl From<UnresolvedPolicy> for Unresolved {
    fn from(policy: UnresolvedPolicy) -> Self {
        match policy {
            UnresolvedPolicy::PassThrough => Unresolved::PassThrough,
            UnresolvedPolicy::Strict => Unresolved::Strict,
        }
    }
}

impl ExpansionConfig {
    pub fn policy(&self) -> Unresolved {
        self.unresolved.into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub json: bool,
}

/// Builds a [`SnipConfig`] from `snip.default.toml` plus any user layers.
///
/// Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the embedded `snip.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a `snip.toml`-style file that must exist (e.g. `--config <path>`).
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a file that is read only when present, like `./snip.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `expansion.unresolved`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize; unknown policy names fail here.
    pub fn build(self) -> Result<SnipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings with no user layers.
pub fn load_defaults() -> Result<SnipConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser.default_language, "");
        assert_eq!(config.expansion.unresolved, UnresolvedPolicy::PassThrough);
        assert!(!config.output.json);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("expansion.unresolved", "strict")
            .expect("override to apply")
            .set_override("parser.default_language", "c")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.expansion.policy(), Unresolved::Strict);
        assert_eq!(config.parser.default_language, "c");
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Loader::new()
            .set_override("expansion.unresolved", "lenient")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/snip.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.expansion.policy(), Unresolved::PassThrough);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/definitely/not/here/snip.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn later_layers_win_key_by_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("snip.toml");
        std::fs::write(
            &path,
            "[parser]\ndefault_language = \"c\"\n[expansion]\nunresolved = \"strict\"\n",
        )
        .expect("config file to write");

        let config = Loader::new()
            .with_file(&path)
            .set_override("parser.default_language", "rust")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.default_language, "rust");
        assert_eq!(config.expansion.policy(), Unresolved::Strict);
        assert!(!config.output.json);
    }

    #[test]
    fn parser_config_sets_default_language() {
        let config = Loader::new()
            .set_override("parser.default_language", "python")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let report = config.parser.parser().parse("snippet p\npass\nendsnippet\n");
        assert_eq!(report.snippets[0].language(), "python");
    }
}

//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Site metadata (title, url, production flag)     |
//! | `[content]` | Content root, file extension, ignore prefix     |
//! | `[auth]`    | Auth cookie prefix, lifetime, `Secure` flag     |
//! | `[serve]`   | JSON server (interface, port)                   |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Jane Doe"
//! url = "https://janedoe.design"
//!
//! [content]
//! dir = "content"
//!
//! [auth]
//! cookie_max_age_days = 7
//!
//! [serve]
//! port = 5277
//! ```

mod auth;
mod base;
mod content;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use auth::AuthConfig;
pub use base::BaseConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Absolute project root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content location and listing rules
    #[serde(default)]
    pub content: ContentConfig,

    /// Auth cookie settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// JSON server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load configuration for a CLI invocation.
    ///
    /// A missing config file is not an error: every field has a default.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate(cli)?;
        Ok(config)
    }

    /// Absolute path of the content root
    pub fn content_dir(&self) -> &Path {
        &self.content.dir
    }

    /// Whether auth cookies carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.auth.secure.unwrap_or(self.base.production)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));

        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.content.dir = Self::normalize_path(&root.join(&self.content.dir));
        self.root = root;

        if let Commands::Serve {
            interface,
            port,
            production,
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.base.production, production.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        self.validate_fields()?;

        if cli.reads_content() && !self.content.dir.is_dir() {
            bail!(ConfigError::MissingContentDir(self.content.dir.clone()));
        }

        Ok(())
    }

    /// Checks that do not touch the filesystem.
    fn validate_fields(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            return Err(ConfigError::invalid("base", "url", "must start with http:// or https://"));
        }

        let ext = &self.content.extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::invalid(
                "content",
                "extension",
                "must be a non-empty extension without the leading dot",
            ));
        }

        if self.auth.cookie_prefix.is_empty() {
            return Err(ConfigError::invalid("auth", "cookie_prefix", "must not be empty"));
        }
        if self.auth.cookie_max_age_days == 0 {
            return Err(ConfigError::invalid("auth", "cookie_max_age_days", "must be at least 1"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "My Portfolio"
        "#;
        let config = SiteConfig::from_str(config_str).unwrap();
        assert_eq!(config.base.title, "My Portfolio");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My Portfolio"
        "#;
        assert!(SiteConfig::from_str(invalid_config).is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [build]
            minify = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = SiteConfig::from_str("[base]\nurl = \"janedoe.design\"").unwrap();
        let err = config.validate_fields().unwrap_err().to_string();
        assert!(err.contains("[base.url]"));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = SiteConfig::from_str("[content]\nextension = \".mdx\"").unwrap();
        assert!(matches!(
            config.validate_fields(),
            Err(ConfigError::Invalid {
                section: "content",
                field: "extension",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_age() {
        let config = SiteConfig::from_str("[auth]\ncookie_max_age_days = 0").unwrap();
        assert!(config.validate_fields().is_err());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from(["folio", "--root", root.as_str(), "work"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert!(config.content_dir().is_absolute());
        assert!(config.content_dir().ends_with("content"));
    }

    #[test]
    fn test_load_requires_content_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from(["folio", "--root", root.as_str(), "work"]);
        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingContentDir(_))
        ));

        // hashing a password never touches content
        let cli = Cli::parse_from(["folio", "--root", root.as_str(), "hash", "pw"]);
        assert!(SiteConfig::load(&cli).is_ok());
    }

    #[test]
    fn test_cli_overrides_serve() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[serve]\nport = 3000\n[base]\nproduction = false",
        )
        .unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "folio",
            "--root",
            root.as_str(),
            "serve",
            "--port",
            "4000",
            "--production",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.serve.port, 4000);
        assert!(config.base.production);
        assert!(config.secure_cookies());
    }
}

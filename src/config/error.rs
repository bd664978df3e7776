//! Errors raised while loading `folio.toml`.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("config file is not valid TOML for folio")]
    Toml(#[from] toml::de::Error),

    /// A field holds a value folio cannot work with.
    #[error("[{section}.{field}] {reason}")]
    Invalid {
        section: &'static str,
        field: &'static str,
        reason: &'static str,
    },

    /// The content root does not exist, for a command that reads content.
    #[error("[content.dir] `{}` is not a directory", .0.display())]
    MissingContentDir(PathBuf),
}

impl ConfigError {
    pub const fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> Self {
        Self::Invalid {
            section,
            field,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_names_section_and_field() {
        let err = ConfigError::invalid("auth", "cookie_prefix", "must not be empty");
        assert_eq!(err.to_string(), "[auth.cookie_prefix] must not be empty");
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = ConfigError::Io(
            PathBuf::from("site/folio.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("site/folio.toml"));
        assert_eq!(std::error::Error::source(&err).map(ToString::to_string).as_deref(), Some("denied"));
    }

    #[test]
    fn test_missing_content_dir() {
        let err = ConfigError::MissingContentDir(PathBuf::from("/srv/portfolio/content"));
        assert_eq!(
            err.to_string(),
            "[content.dir] `/srv/portfolio/content` is not a directory"
        );
    }
}

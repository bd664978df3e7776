//! `[content]` section configuration.
//!
//! Where content files live and which of them are listed.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// dir = "content"        # root of the taxonomy folders
/// extension = "mdx"      # content file extension, without the dot
/// ignore_prefix = "_"    # `_draft.mdx` is never listed nor fetched
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Content root directory (relative to project root).
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// Extension of content files.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,

    /// Files whose name starts with this prefix are excluded.
    #[serde(default = "defaults::content::ignore_prefix")]
    #[educe(Default = defaults::content::ignore_prefix())]
    pub ignore_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.extension, "mdx");
        assert_eq!(config.content.ignore_prefix, "_");
    }

    #[test]
    fn test_content_config_override() {
        let config = r#"
            [content]
            dir = "site/content"
            extension = "md"
            ignore_prefix = "."
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.dir, PathBuf::from("site/content"));
        assert_eq!(config.content.extension, "md");
        assert_eq!(config.content.ignore_prefix, ".");
    }
}

//! Content items and frontmatter parsing.
//!
//! A content file is an optional YAML header fenced by `---` lines, followed
//! by the body:
//!
//! ```text
//! ---
//! title: Ocean
//! year: "2023"
//! featured: true
//! ---
//! # Ocean
//! The body is kept verbatim.
//! ```

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// A parsed content unit.
///
/// Built fresh from disk on every read and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem<F> {
    /// File name without extension; unique within its folder
    pub slug: String,
    /// Structured metadata, one concrete shape per content kind
    pub frontmatter: F,
    /// Raw markdown/MDX body
    pub content: String,
}

/// Why a single file could not be turned into a [`ContentItem`].
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("frontmatter block is not closed by a `---` line")]
    Unterminated,

    #[error("invalid frontmatter")]
    Yaml(#[from] serde_yaml::Error),

    #[error("file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Split a file into its raw YAML header and body.
///
/// Returns `(None, text)` when the file does not start with a `---` line.
pub fn split_frontmatter(text: &str) -> Result<(Option<&str>, &str), FrontmatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let Some(first_end) = text.find('\n') else {
        return match text.trim_end() {
            "---" => Err(FrontmatterError::Unterminated),
            _ => Ok((None, text)),
        };
    };
    if text[..first_end].trim_end() != "---" {
        return Ok((None, text));
    }

    let header_start = first_end + 1;
    let mut line_start = header_start;
    while line_start <= text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        let line = text[line_start..line_end].trim_end();
        if line == "---" || line == "..." {
            let header = &text[header_start..line_start];
            let body = text.get(line_end + 1..).unwrap_or("");
            return Ok((Some(header), body));
        }
        line_start = line_end + 1;
    }

    Err(FrontmatterError::Unterminated)
}

/// Parse file contents into a typed item.
///
/// A missing or empty header deserializes `F` from an empty mapping, so kinds
/// with required fields reject headerless files.
pub fn parse_item<F: DeserializeOwned>(
    slug: &str,
    text: &str,
) -> Result<ContentItem<F>, FrontmatterError> {
    let (header, body) = split_frontmatter(text)?;
    let header = header.filter(|h| !h.trim().is_empty()).unwrap_or("{}");
    let frontmatter = serde_yaml::from_str(header)?;

    Ok(ContentItem {
        slug: slug.to_owned(),
        frontmatter,
        content: body.to_owned(),
    })
}

/// Parse raw bytes, rejecting invalid UTF-8 as a malformed file.
pub fn parse_bytes<F: DeserializeOwned>(
    slug: &str,
    bytes: Vec<u8>,
) -> Result<ContentItem<F>, FrontmatterError> {
    let text = String::from_utf8(bytes)?;
    parse_item(slug, &text)
}

//! Frontmatter shapes, one per content kind.
//!
//! The repository is generic over the frontmatter type; these are the concrete
//! shapes used by the site. Keys are camelCase on disk (`heroImage`,
//! `metaTitle`, `lastUpdated`).

use serde::{Deserialize, Deserializer, Serialize};

use super::item::ContentItem;

/// SEO block shared by every kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Frontmatter of a work item (product, feature, side project, transformation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkFrontmatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Company slug, resolved with `resolve::company_display_name`
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default)]
    pub duration: String,
    /// Work type slug, resolved with `resolve::work_type_label`
    #[serde(default, rename = "type")]
    pub work_type: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`, preferred over `year` for ordering
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    /// Slug of the case study a feature belongs to
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub seo: Seo,
    /// Dedicated plain-text password, for drafting
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub locked: Option<bool>,
}

/// Frontmatter of a standalone page (about, uses, colophon).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub seo: Seo,
}

/// Frontmatter of a dated "now" snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowFrontmatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: Option<String>,
    #[serde(default)]
    pub seo: Seo,
}

pub type WorkEntry = ContentItem<WorkFrontmatter>;
pub type Page = ContentItem<PageFrontmatter>;
pub type NowEntry = ContentItem<NowFrontmatter>;

/// Frontmatter that carries ordering information.
pub trait Dated {
    fn year(&self) -> Option<&str> {
        None
    }
    fn date(&self) -> Option<&str> {
        None
    }
}

/// Frontmatter that can be promoted on listing pages.
pub trait Featurable {
    fn featured(&self) -> bool;
}

/// Frontmatter that can put an item behind a password.
pub trait Lockable {
    fn locked(&self) -> bool;
    /// Dedicated plain-text password, if the author set one.
    fn password(&self) -> Option<&str>;
}

impl Dated for WorkFrontmatter {
    fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Featurable for WorkFrontmatter {
    fn featured(&self) -> bool {
        self.featured
    }
}

impl Lockable for WorkFrontmatter {
    fn locked(&self) -> bool {
        self.locked == Some(true)
    }
    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl Dated for PageFrontmatter {
    fn date(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }
}

impl Dated for NowFrontmatter {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Accept `year: 2023` or `date: 2024` as well as their quoted forms.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

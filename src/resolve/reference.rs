//! Static reference tables cited from frontmatter.
//!
//! Work items reference a company and a work type by slug; books and articles
//! reference a reading status. Authors type these by hand, so lookups go
//! through [`normalize_slug`](super::normalize_slug) and friends.

use serde::Serialize;

use super::normalize::find_by_slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    pub slug: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkType {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Badge style a reading status is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStatus {
    pub slug: &'static str,
    pub label: &'static str,
    pub badge_variant: BadgeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub label: &'static str,
    pub tags: &'static [&'static str],
}

pub static COMPANIES: &[Company] = &[
    Company {
        slug: "sainapsis",
        name: "Sainapsis",
        url: "https://www.sainapsis.com/",
    },
    Company {
        slug: "routemobile",
        name: "RouteMobile",
        url: "https://www.routemobile.com/",
    },
    Company {
        slug: "masiv",
        name: "Masiv",
        url: "https://www.masiv.com/",
    },
    Company {
        slug: "payu-latam",
        name: "PayU Latam",
        url: "https://corporate.payu.com/colombia/",
    },
];

/// Current work types first; the last three are older slugs still found in
/// archived frontmatter.
pub static WORK_TYPES: &[WorkType] = &[
    WorkType { slug: "product", label: "Product" },
    WorkType { slug: "feature", label: "Feature" },
    WorkType { slug: "side-project", label: "Side Project" },
    WorkType { slug: "transformation", label: "Transformation" },
    WorkType { slug: "case-study", label: "Case Study" },
    WorkType { slug: "platform-design", label: "Platform Design" },
    WorkType { slug: "design-system", label: "Design System" },
];

pub static READING_STATUSES: &[ReadingStatus] = &[
    ReadingStatus {
        slug: "read",
        label: "READ",
        badge_variant: BadgeVariant::Success,
    },
    ReadingStatus {
        slug: "reading",
        label: "READING",
        badge_variant: BadgeVariant::Warning,
    },
    ReadingStatus {
        slug: "to-read",
        label: "TO READ",
        badge_variant: BadgeVariant::Neutral,
    },
];

/// Suggested tags. Content may use any tag; these drive filtering.
pub static TAG_GROUPS: &[TagGroup] = &[
    TagGroup {
        label: "Design",
        tags: &["design systems", "component library", "design ops", "UI/UX"],
    },
    TagGroup {
        label: "Process",
        tags: &["process transformation", "productivity", "mentorship", "scalability"],
    },
    TagGroup {
        label: "Product",
        tags: &["SaaS", "enterprise platform", "enterprise design", "platform design"],
    },
    TagGroup {
        label: "Domain",
        tags: &["multi-channel", "messaging", "communications"],
    },
];

pub fn resolve_company(slug: &str) -> Option<&'static Company> {
    find_by_slug(COMPANIES, slug, |c| c.slug)
}

/// Display name of a company, or the raw value when unknown.
pub fn company_display_name(slug: &str) -> &str {
    resolve_company(slug).map_or(slug, |c| c.name)
}

pub fn resolve_work_type(slug: &str) -> Option<&'static WorkType> {
    find_by_slug(WORK_TYPES, slug, |t| t.slug)
}

/// Label of a work type, or the raw value when unknown.
pub fn work_type_label(slug: &str) -> &str {
    resolve_work_type(slug).map_or(slug, |t| t.label)
}

pub fn resolve_reading_status(slug: &str) -> Option<&'static ReadingStatus> {
    find_by_slug(READING_STATUSES, slug, |s| s.slug)
}

/// Every suggested tag, in group order.
pub fn all_tags() -> impl Iterator<Item = &'static str> {
    TAG_GROUPS.iter().flat_map(|g| g.tags.iter().copied())
}

/// Whether `tag` is one of the suggested tags, ignoring case.
pub fn is_valid_tag(tag: &str) -> bool {
    all_tags().any(|t| t.eq_ignore_ascii_case(tag.trim()))
}

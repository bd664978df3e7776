//! Content taxonomy: the static table of content types and sub-types.
//!
//! Every storage path, URL route and navigation entry derives from
//! [`CONTENT_TYPES`]. Nothing else in the crate spells out a route.
//!
//! | Type          | Route          | Sub-types                                        |
//! |---------------|----------------|--------------------------------------------------|
//! | `work`        | `/work`        | products, features, side-projects, transformations |
//! | `experiments` | `/experiments` | design, code, prototypes                         |
//! | `reading`     | `/reading`     | books, articles                                  |
//! | `writing`     | `/writing`     | posts, thoughts, quotes                          |
//! | `now`         | `/now`         | (flat folder of dated snapshots)                 |
//! | `pages`       | (site root)    | about, uses, colophon                            |

use std::collections::BTreeMap;

/// A sub-division of a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSubType {
    pub slug: &'static str,
    pub label: &'static str,
    /// Folder relative to the content root
    pub path: &'static str,
    /// URL base, e.g. `/work/products`
    pub route: &'static str,
}

/// A top-level content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentType {
    pub slug: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// Empty for categories that sit at the site root (only their sub-types route)
    pub route: &'static str,
    pub sub_types: &'static [ContentSubType],
}

impl ContentType {
    /// Whether this category lives at the site root (e.g. `/about`).
    pub const fn is_site_root(&self) -> bool {
        self.route.is_empty()
    }

    pub fn sub_type(&self, slug: &str) -> Option<&'static ContentSubType> {
        self.sub_types.iter().find(|st| st.slug == slug)
    }
}

macro_rules! sub {
    ($slug:literal, $label:literal, $path:literal, $route:literal) => {
        ContentSubType {
            slug: $slug,
            label: $label,
            path: $path,
            route: $route,
        }
    };
}

pub const WORK: &str = "work";
pub const PAGES: &str = "pages";
pub const NOW: &str = "now";

/// The taxonomy. Order matches navigation order.
pub static CONTENT_TYPES: &[ContentType] = &[
    ContentType {
        slug: WORK,
        label: "Work",
        path: "work",
        route: "/work",
        sub_types: &[
            sub!("products", "Products", "work/products", "/work/products"),
            sub!("features", "Features", "work/features", "/work/features"),
            sub!("side-projects", "Side Projects", "work/side-projects", "/work/side-projects"),
            sub!("transformations", "Transformations", "work/transformations", "/work/transformations"),
        ],
    },
    ContentType {
        slug: "experiments",
        label: "Experiments",
        path: "experiments",
        route: "/experiments",
        sub_types: &[
            sub!("design", "Design", "experiments/design", "/experiments/design"),
            sub!("code", "Code", "experiments/code", "/experiments/code"),
            sub!("prototypes", "Prototypes", "experiments/prototypes", "/experiments/prototypes"),
        ],
    },
    ContentType {
        slug: "reading",
        label: "Reading",
        path: "reading",
        route: "/reading",
        sub_types: &[
            sub!("books", "Books", "reading/books", "/reading/books"),
            sub!("articles", "Articles", "reading/articles", "/reading/articles"),
        ],
    },
    ContentType {
        slug: "writing",
        label: "Writing",
        path: "writing",
        route: "/writing",
        sub_types: &[
            sub!("posts", "Posts", "writing/posts", "/writing/posts"),
            sub!("thoughts", "Thoughts", "writing/thoughts", "/writing/thoughts"),
            sub!("quotes", "Quotes", "writing/quotes", "/writing/quotes"),
        ],
    },
    ContentType {
        slug: NOW,
        label: "Now",
        path: "now",
        route: "/now",
        sub_types: &[],
    },
    ContentType {
        slug: PAGES,
        label: "Pages",
        path: "pages",
        route: "",
        sub_types: &[
            sub!("about", "About", "pages/about", "/about"),
            sub!("uses", "Uses", "pages/uses", "/uses"),
            sub!("colophon", "Colophon", "pages/colophon", "/colophon"),
        ],
    },
];

/// Separator between parent and child in breadcrumb labels.
pub const BREADCRUMB_SEPARATOR: &str = " · ";

pub fn resolve_type(slug: &str) -> Option<&'static ContentType> {
    CONTENT_TYPES.iter().find(|ct| ct.slug == slug)
}

pub fn resolve_sub_type(category: &str, sub: &str) -> Option<&'static ContentSubType> {
    resolve_type(category)?.sub_type(sub)
}

/// The work sub-types, in taxonomy order.
pub fn work_sub_types() -> &'static [ContentSubType] {
    match resolve_type(WORK) {
        Some(ct) => ct.sub_types,
        None => &[],
    }
}

/// Breadcrumb label: `"Reading · Books"` or `"Work · Products"`.
///
/// Unknown category yields the raw slug; unknown sub-type yields the parent label.
pub fn breadcrumb_label(category: &str, sub: Option<&str>) -> String {
    let Some(parent) = resolve_type(category) else {
        return category.to_owned();
    };
    match sub.and_then(|s| parent.sub_type(s)) {
        Some(child) => format!("{}{BREADCRUMB_SEPARATOR}{}", parent.label, child.label),
        None => parent.label.to_owned(),
    }
}

/// Storage path for a category or one of its sub-types.
pub fn content_path(category: &str, sub: Option<&str>) -> Option<&'static str> {
    match sub {
        Some(sub) => resolve_sub_type(category, sub).map(|st| st.path),
        None => resolve_type(category).map(|ct| ct.path),
    }
}

/// `"side-projects"` → `"SIDE_PROJECTS"`.
pub fn slug_constant_key(slug: &str) -> String {
    slug.to_uppercase().replace('-', "_")
}

/// Named slug constants derived from the taxonomy.
///
/// - every type: `WORK` → `work`
/// - every sub-type: `WORK_PRODUCTS` → `products`
/// - site-root sub-types additionally: `PAGES_ABOUT` → `pages.about` (a
///   navigation key) and `ABOUT` → `about`
pub fn content_slugs() -> BTreeMap<String, String> {
    let mut slugs = BTreeMap::new();
    for ct in CONTENT_TYPES {
        let type_key = slug_constant_key(ct.slug);
        slugs.insert(type_key.clone(), ct.slug.to_owned());
        for st in ct.sub_types {
            let sub_key = slug_constant_key(st.slug);
            slugs.insert(format!("{type_key}_{sub_key}"), st.slug.to_owned());
            if ct.is_site_root() {
                slugs.insert(format!("PAGES_{sub_key}"), format!("{}.{}", ct.slug, st.slug));
                slugs.insert(sub_key, st.slug.to_owned());
            }
        }
    }
    slugs
}

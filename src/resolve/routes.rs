//! Routes and navigation, derived from the content taxonomy.
//!
//! Nothing here spells out a URL: every route comes from
//! [`CONTENT_TYPES`](crate::content::taxonomy::CONTENT_TYPES).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::taxonomy::{CONTENT_TYPES, PAGES, resolve_sub_type, resolve_type};

pub const HOME_ROUTE: &str = "/";

/// URL of a category, a sub-type, or an item inside either.
///
/// An unknown sub-type falls back to the category route; an unknown category
/// (or a site-root category without a sub-type) yields `/`.
pub fn build_route(category: &str, sub: Option<&str>, item: Option<&str>) -> String {
    let base = sub
        .and_then(|sub| resolve_sub_type(category, sub))
        .map(|st| st.route)
        .or_else(|| resolve_type(category).map(|ct| ct.route))
        .filter(|route| !route.is_empty());

    match (base, item) {
        (Some(base), Some(item)) => format!("{base}/{item}"),
        (Some(base), None) => base.to_owned(),
        (None, _) => HOME_ROUTE.to_owned(),
    }
}

/// Flat route map: `home`, every routed category, every site-root page.
pub fn routes() -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::from([("home", HOME_ROUTE)]);
    for ct in CONTENT_TYPES {
        if ct.is_site_root() {
            map.extend(ct.sub_types.iter().map(|st| (st.slug, st.route)));
        } else {
            map.insert(ct.slug, ct.route);
        }
    }
    map
}

/// One entry of the main navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
    pub visible: bool,
}

/// Navigation order and visibility. Keys are category slugs, or
/// `pages.{slug}` for site-root pages.
pub static NAV_CONFIG: &[(&str, bool)] = &[
    ("work", true),
    ("experiments", true),
    ("reading", true),
    ("writing", true),
    ("pages.about", true),
    ("now", true),
    ("pages.uses", true),
    ("pages.colophon", true),
];

/// Resolve one navigation key to its label and route.
pub fn nav_item(key: &str, visible: bool) -> NavItem {
    let (parent, sub) = match key.split_once('.') {
        Some((parent, sub)) => (parent, Some(sub)),
        None => (key, None),
    };

    let Some(ct) = resolve_type(parent) else {
        return NavItem {
            name: key.to_owned(),
            href: HOME_ROUTE.to_owned(),
            visible,
        };
    };

    let (name, href) = match sub {
        Some(sub) => match ct.sub_type(sub) {
            Some(st) => (st.label, st.route),
            None => (sub, HOME_ROUTE),
        },
        None => (ct.label, ct.route),
    };
    NavItem {
        name: name.to_owned(),
        href: href.to_owned(),
        visible,
    }
}

/// The main navigation, in [`NAV_CONFIG`] order.
pub fn navigation() -> Vec<NavItem> {
    NAV_CONFIG
        .iter()
        .map(|&(key, visible)| nav_item(key, visible))
        .collect()
}

/// Route of a standalone page, e.g. `"about"` → `/about`.
pub fn page_route(slug: &str) -> String {
    build_route(PAGES, Some(slug), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_route_matches_taxonomy() {
        for ct in CONTENT_TYPES {
            if !ct.is_site_root() {
                assert_eq!(build_route(ct.slug, None, None), ct.route);
            }
            for st in ct.sub_types {
                assert_eq!(build_route(ct.slug, Some(st.slug), None), st.route);
                assert_eq!(
                    build_route(ct.slug, Some(st.slug), Some("x")),
                    format!("{}/x", st.route)
                );
            }
        }
    }

    #[test]
    fn test_build_route_fallbacks() {
        assert_eq!(build_route("work", Some("zines"), None), "/work");
        assert_eq!(build_route("work", Some("zines"), Some("ocean")), "/work/ocean");
        assert_eq!(build_route("blog", None, Some("hello")), "/");
        assert_eq!(build_route("pages", None, None), "/");
        assert_eq!(build_route("now", None, Some("2025-02-09")), "/now/2025-02-09");
    }

    #[test]
    fn test_routes_map() {
        let routes = routes();
        assert_eq!(routes["home"], "/");
        assert_eq!(routes["work"], "/work");
        assert_eq!(routes["now"], "/now");
        assert_eq!(routes["about"], "/about");
        assert_eq!(routes["colophon"], "/colophon");
        assert!(!routes.contains_key("pages"));
        assert!(!routes.contains_key("products"));
    }

    #[test]
    fn test_navigation() {
        let nav = navigation();
        let hrefs: Vec<_> = nav.iter().map(|n| n.href.as_str()).collect();
        assert_eq!(
            hrefs,
            ["/work", "/experiments", "/reading", "/writing", "/about", "/now", "/uses", "/colophon"]
        );
        assert_eq!(nav[4].name, "About");
        assert!(nav.iter().all(|n| n.visible));
    }

    #[test]
    fn test_nav_item_unknown_keys() {
        assert_eq!(nav_item("blog", true).href, "/");
        assert_eq!(nav_item("blog", true).name, "blog");

        let missing = nav_item("pages.resume", false);
        assert_eq!(missing.name, "resume");
        assert_eq!(missing.href, "/");
        assert!(!missing.visible);
    }

    #[test]
    fn test_page_route() {
        assert_eq!(page_route("uses"), "/uses");
        assert_eq!(page_route("resume"), "/");
    }
}

//! Conventional image paths.
//!
//! ```text
//! /images/{type}/{sub}/{slug}-{level}.{ext}   work, experiments, writing, reading
//! /images/{type}/{slug}-{level}.{ext}         now, pages
//! ```

use crate::content::taxonomy::WORK;

pub const DEFAULT_IMAGE_EXT: &str = "png";

/// Image size/purpose suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLevel {
    Hero,
    Thumbnail,
    Og,
}

impl ImageLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Thumbnail => "thumbnail",
            Self::Og => "og",
        }
    }
}

pub fn image_path(category: &str, sub: Option<&str>, slug: &str, level: &str, ext: &str) -> String {
    match sub {
        Some(sub) => format!("/images/{category}/{sub}/{slug}-{level}.{ext}"),
        None => format!("/images/{category}/{slug}-{level}.{ext}"),
    }
}

pub fn hero_image_path(category: &str, sub: Option<&str>, slug: &str) -> String {
    image_path(category, sub, slug, ImageLevel::Hero.as_str(), DEFAULT_IMAGE_EXT)
}

pub fn thumbnail_image_path(category: &str, sub: Option<&str>, slug: &str) -> String {
    image_path(category, sub, slug, ImageLevel::Thumbnail.as_str(), DEFAULT_IMAGE_EXT)
}

pub fn og_image_path(category: &str, sub: Option<&str>, slug: &str) -> String {
    image_path(category, sub, slug, ImageLevel::Og.as_str(), DEFAULT_IMAGE_EXT)
}

/// `/images/work/{sub}/{slug}-hero.png`
pub fn work_hero_image_path(sub: &str, slug: &str) -> String {
    hero_image_path(WORK, Some(sub), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_with_sub_type() {
        assert_eq!(
            image_path("work", Some("products"), "ocean", "hero", "png"),
            "/images/work/products/ocean-hero.png"
        );
        assert_eq!(
            work_hero_image_path("products", "ocean"),
            "/images/work/products/ocean-hero.png"
        );
    }

    #[test]
    fn test_image_path_flat() {
        assert_eq!(
            og_image_path("now", None, "2025-02-09"),
            "/images/now/2025-02-09-og.png"
        );
        assert_eq!(
            thumbnail_image_path("pages", None, "about"),
            "/images/pages/about-thumbnail.png"
        );
    }
}

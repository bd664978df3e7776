//! Pure lookups from slugs to labels and URLs.
//!
//! | Module      | Resolves                                         |
//! |-------------|--------------------------------------------------|
//! | `normalize` | Free-form frontmatter values to canonical slugs  |
//! | `reference` | Companies, work types, reading statuses, tags    |
//! | `routes`    | Taxonomy routes and the main navigation          |
//! | `images`    | Conventional image paths                         |

mod images;
mod normalize;
mod reference;
mod routes;

pub use images::{
    DEFAULT_IMAGE_EXT, ImageLevel, hero_image_path, image_path, og_image_path,
    thumbnail_image_path, work_hero_image_path,
};
pub use normalize::normalize_slug;
pub use reference::{
    BadgeVariant, COMPANIES, Company, READING_STATUSES, ReadingStatus, TAG_GROUPS, TagGroup,
    WORK_TYPES, WorkType, all_tags, company_display_name, is_valid_tag, resolve_company,
    resolve_reading_status, resolve_work_type, work_type_label,
};
pub use routes::{
    HOME_ROUTE, NAV_CONFIG, NavItem, build_route, nav_item, navigation, page_route, routes,
};

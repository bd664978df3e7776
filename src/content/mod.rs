//! Typed access to the content tree.
//!
//! # Layout on disk
//!
//! ```text
//! content/
//! ├── work/
//! │   ├── products/ocean.mdx
//! │   └── features/batching.mdx
//! ├── now/2025-02-09.mdx
//! └── pages/about.mdx
//! ```
//!
//! # Modules
//!
//! | Module       | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | `taxonomy`   | Static table of content types, paths and routes      |
//! | `item`       | `ContentItem` and frontmatter splitting              |
//! | `kinds`      | Frontmatter shapes (work, page, now)                 |
//! | `date`       | Frontmatter date and year parsing                    |
//! | `sort`       | Newest-first comparators                             |
//! | `repository` | Listing and fetching files under a content root      |
//! | `cache`      | Request-scoped memoisation                           |
//! | `site`       | `Site`, the per-request entry point                  |

pub mod cache;
pub mod date;
pub mod item;
pub mod kinds;
pub mod repository;
pub mod site;
pub mod sort;
pub mod taxonomy;

pub use cache::ContentCache;
pub use item::{ContentItem, FrontmatterError};
pub use kinds::{
    Dated, Featurable, Lockable, NowEntry, NowFrontmatter, Page, PageFrontmatter, Seo, WorkEntry,
    WorkFrontmatter,
};
pub use repository::{ContentError, Repository, get_item_by_slug, list_items};
pub use site::Site;
pub use sort::SortBy;

//! Work aggregation across sub-types.
//!
//! Work lives in several folders (products, features, side projects,
//! transformations) but is browsed as one collection: featured items first,
//! newest first within each group. Prev/next navigation on a case study walks
//! that aggregated order, so the neighbour of a product can be a feature.

use std::{cmp::Ordering, ops::Deref};

use serde::Serialize;

use crate::content::{
    ContentError, Featurable, Site, SortBy, WorkEntry, WorkFrontmatter,
    sort::by_date_or_year_desc,
    taxonomy::{WORK, resolve_sub_type, work_sub_types},
};

/// A work entry tagged with the sub-type folder it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    #[serde(flatten)]
    pub item: WorkEntry,
    /// Always one of the work sub-type slugs of the taxonomy
    pub sub_type: &'static str,
}

impl Deref for WorkItem {
    type Target = WorkEntry;

    fn deref(&self) -> &WorkEntry {
        &self.item
    }
}

impl WorkItem {
    /// `/work/{sub_type}/{slug}`
    pub fn route(&self) -> String {
        crate::resolve::build_route(WORK, Some(self.sub_type), Some(&self.slug))
    }
}

/// Neighbours of an item in an ordered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacent<T> {
    pub prev: Option<T>,
    pub next: Option<T>,
}

impl<T> Default for Adjacent<T> {
    fn default() -> Self {
        Self {
            prev: None,
            next: None,
        }
    }
}

/// Anything with a slug, for adjacency lookups.
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl<F> Slugged for crate::content::ContentItem<F> {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for WorkItem {
    fn slug(&self) -> &str {
        &self.item.slug
    }
}

/// Previous and next item around `slug`; both `None` when it is absent.
pub fn adjacent_in<T: Slugged + Clone>(items: &[T], slug: &str) -> Adjacent<T> {
    adjacent_where(items, |item| item.slug() == slug)
}

/// Previous and next item around the first match of `is_current`.
pub fn adjacent_where<T: Clone>(items: &[T], is_current: impl Fn(&T) -> bool) -> Adjacent<T> {
    let Some(index) = items.iter().position(is_current) else {
        return Adjacent::default();
    };
    Adjacent {
        prev: index.checked_sub(1).and_then(|i| items.get(i)).cloned(),
        next: items.get(index + 1).cloned(),
    }
}

/// The featured subset, order preserved.
pub fn featured_in<T, F>(items: &[T]) -> Vec<T>
where
    T: Deref<Target = crate::content::ContentItem<F>> + Clone,
    F: Featurable,
{
    items
        .iter()
        .filter(|item| item.frontmatter.featured())
        .cloned()
        .collect()
}

/// Featured first, then newest first by date or year.
fn featured_then_recent(a: &WorkItem, b: &WorkItem) -> Ordering {
    b.frontmatter
        .featured()
        .cmp(&a.frontmatter.featured())
        .then_with(|| by_date_or_year_desc(&a.item, &b.item))
}

/// Listing order of a single work sub-type.
pub fn sub_type_order(sub_type: &str) -> SortBy {
    match sub_type {
        "products" => SortBy::YearDesc,
        _ => SortBy::DateOrYearDesc,
    }
}

impl Site {
    /// One work sub-type, in its own order. Unknown sub-types are empty.
    pub fn work_items(&self, sub_type: &str) -> Result<Vec<WorkItem>, ContentError> {
        let Some(st) = resolve_sub_type(WORK, sub_type) else {
            return Ok(Vec::new());
        };
        let entries = self.list::<WorkFrontmatter>(st.path, sub_type_order(st.slug))?;
        Ok(entries
            .iter()
            .map(|item| WorkItem {
                item: item.clone(),
                sub_type: st.slug,
            })
            .collect())
    }

    /// Every work item across sub-types: featured first, then by date or year.
    ///
    /// Ties keep taxonomy order, then each sub-type's own order.
    pub fn all_work(&self) -> Result<Vec<WorkItem>, ContentError> {
        let mut all = Vec::new();
        for st in work_sub_types() {
            all.extend(self.work_items(st.slug)?);
        }
        all.sort_by(featured_then_recent);
        Ok(all)
    }

    pub fn featured_work(&self) -> Result<Vec<WorkItem>, ContentError> {
        Ok(featured_in(&self.all_work()?))
    }

    /// One work item. An unknown sub-type is simply not found.
    pub fn work_item(&self, sub_type: &str, slug: &str) -> Result<Option<WorkItem>, ContentError> {
        let Some(st) = resolve_sub_type(WORK, sub_type) else {
            return Ok(None);
        };
        Ok(self
            .item::<WorkFrontmatter>(st.path, slug)?
            .map(|item| WorkItem {
                item,
                sub_type: st.slug,
            }))
    }

    /// Neighbours of `slug` in [`Site::all_work`] order.
    pub fn adjacent_work(&self, slug: &str) -> Result<Adjacent<WorkItem>, ContentError> {
        Ok(adjacent_in(&self.all_work()?, slug))
    }

    /// Neighbours of one item in [`Site::all_work`] order.
    ///
    /// Slugs are only unique within a sub-type, so this is the lookup to use
    /// when the sub-type is known.
    pub fn adjacent_work_item(
        &self,
        sub_type: &str,
        slug: &str,
    ) -> Result<Adjacent<WorkItem>, ContentError> {
        Ok(adjacent_where(&self.all_work()?, |item| {
            item.sub_type == sub_type && item.slug == slug
        }))
    }
}

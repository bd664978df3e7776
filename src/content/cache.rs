//! Request-scoped content cache.
//!
//! Within one request the same listing is often needed several times (the
//! aggregated work list, then adjacency for the item being shown, then the
//! featured subset). The cache keeps each listing and each single item for the
//! lifetime of a [`Site`](super::Site), which the server builds fresh for
//! every request. Nothing outlives the request, so edits on disk show up on
//! the next page load.
//!
//! # Keys
//!
//! | Entry   | Key                                     |
//! |---------|-----------------------------------------|
//! | Listing | (frontmatter type, path, [`SortBy`])    |
//! | Item    | (frontmatter type, path, slug)          |

use std::{
    any::{Any, TypeId},
    sync::Arc,
};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{item::ContentItem, sort::SortBy};

type Entry = Arc<dyn Any + Send + Sync>;
type ListKey = (TypeId, String, SortBy);
type ItemKey = (TypeId, String, String);

/// Memoised listings and items, keyed by frontmatter type.
#[derive(Debug, Default)]
pub struct ContentCache {
    lists: RwLock<FxHashMap<ListKey, Entry>>,
    items: RwLock<FxHashMap<ItemKey, Entry>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lists.write().clear();
        self.items.write().clear();
    }

    pub fn len(&self) -> usize {
        self.lists.read().len() + self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached listing for `(F, path, sort)`, loading it on a miss.
    ///
    /// Errors are not cached.
    pub fn list_or_load<F, E>(
        &self,
        path: &str,
        sort: SortBy,
        load: impl FnOnce() -> Result<Vec<ContentItem<F>>, E>,
    ) -> Result<Arc<Vec<ContentItem<F>>>, E>
    where
        F: Send + Sync + 'static,
    {
        let key = (TypeId::of::<F>(), path.to_owned(), sort);
        if let Some(hit) = self.lists.read().get(&key).cloned()
            && let Ok(list) = hit.downcast::<Vec<ContentItem<F>>>()
        {
            return Ok(list);
        }

        let list = Arc::new(load()?);
        self.lists.write().insert(key, list.clone());
        Ok(list)
    }

    /// Cached item for `(F, path, slug)`, loading it on a miss.
    ///
    /// Absence is cached too, so a missing slug is looked up once.
    pub fn item_or_load<F, E>(
        &self,
        path: &str,
        slug: &str,
        load: impl FnOnce() -> Result<Option<ContentItem<F>>, E>,
    ) -> Result<Arc<Option<ContentItem<F>>>, E>
    where
        F: Send + Sync + 'static,
    {
        let key = (TypeId::of::<F>(), path.to_owned(), slug.to_owned());
        if let Some(hit) = self.items.read().get(&key).cloned()
            && let Ok(item) = hit.downcast::<Option<ContentItem<F>>>()
        {
            return Ok(item);
        }

        let item = Arc::new(load()?);
        self.items.write().insert(key, item.clone());
        Ok(item)
    }
}

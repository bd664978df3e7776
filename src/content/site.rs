//! The per-request view of the content tree.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{
    cache::ContentCache,
    item::ContentItem,
    kinds::{Dated, NowEntry, NowFrontmatter, Page, PageFrontmatter},
    repository::{ContentError, Repository},
    sort::SortBy,
    taxonomy::{NOW, PAGES, content_path},
};
use crate::config::SiteConfig;

/// Typed, memoised access to content for the duration of one request.
///
/// Build one per request (or call [`Site::begin_request`] before reusing it).
/// Listings and items read through a `Site` are loaded from disk at most
/// once until then.
#[derive(Debug)]
pub struct Site {
    repo: Repository,
    cache: ContentCache,
}

impl Site {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            cache: ContentCache::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(Repository::from_config(&config.content))
    }

    /// Forget everything read so far.
    pub fn begin_request(&self) {
        self.cache.clear();
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Sorted listing of `path`.
    pub fn list<F>(
        &self,
        path: &str,
        sort: SortBy,
    ) -> Result<Arc<Vec<ContentItem<F>>>, ContentError>
    where
        F: DeserializeOwned + Dated + Send + Sync + 'static,
    {
        self.cache.list_or_load(path, sort, || {
            self.repo.list_items(path, |a, b| sort.compare(a, b))
        })
    }

    /// One item of `path` by slug.
    pub fn item<F>(&self, path: &str, slug: &str) -> Result<Option<ContentItem<F>>, ContentError>
    where
        F: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let item = self
            .cache
            .item_or_load(path, slug, || self.repo.get_item_by_slug(path, slug))?;
        Ok((*item).clone())
    }

    /// Standalone pages, most recently updated first.
    pub fn pages(&self) -> Result<Arc<Vec<Page>>, ContentError> {
        self.list::<PageFrontmatter>(pages_path(), SortBy::DateDesc)
    }

    pub fn page(&self, slug: &str) -> Result<Option<Page>, ContentError> {
        self.item(pages_path(), slug)
    }

    /// "Now" snapshots, newest first.
    pub fn now_entries(&self) -> Result<Arc<Vec<NowEntry>>, ContentError> {
        self.list::<NowFrontmatter>(now_path(), SortBy::DateDesc)
    }

    pub fn latest_now(&self) -> Result<Option<NowEntry>, ContentError> {
        Ok(self.now_entries()?.first().cloned())
    }

    pub fn now_entry(&self, slug: &str) -> Result<Option<NowEntry>, ContentError> {
        self.item(now_path(), slug)
    }
}

fn pages_path() -> &'static str {
    content_path(PAGES, None).unwrap_or(PAGES)
}

fn now_path() -> &'static str {
    content_path(NOW, None).unwrap_or(NOW)
}

//! Reading content files from disk.
//!
//! A [`Repository`] maps taxonomy paths onto a content root:
//! `{root}/{path}/{slug}.{extension}`. It never caches; see
//! [`ContentCache`](super::cache::ContentCache) for per-request memoisation.
//!
//! # Failure policy
//!
//! | Situation                          | `list_items`        | `get_item_by_slug`  |
//! |------------------------------------|---------------------|---------------------|
//! | Folder or file absent              | `Ok(vec![])`        | `Ok(None)`          |
//! | Ignore-prefixed name               | skipped             | `Ok(None)`          |
//! | Malformed frontmatter              | skipped and logged  | `Err(Parse)`        |
//! | Any other I/O failure              | `Err(Io)`           | `Err(Io)`           |

use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::item::{ContentItem, FrontmatterError, parse_bytes};
use crate::{config::ContentConfig, config::defaults, logger::log_error};

/// Errors raised while reading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed content file `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

impl ContentError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of reading every file in one folder.
#[derive(Debug)]
pub struct Scan<F> {
    /// Parsed items, in file name order
    pub items: Vec<ContentItem<F>>,
    /// Files that exist but could not be parsed
    pub failures: Vec<(PathBuf, FrontmatterError)>,
}

/// Content files under one root directory.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    extension: String,
    ignore_prefix: String,
}

impl Repository {
    /// Repository with the default extension (`mdx`) and ignore prefix (`_`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: defaults::content::extension(),
            ignore_prefix: defaults::content::ignore_prefix(),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self {
            root: config.dir.clone(),
            extension: config.extension.clone(),
            ignore_prefix: config.ignore_prefix.clone(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_ignore_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignore_prefix = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, slug: &str) -> bool {
        !self.ignore_prefix.is_empty() && slug.starts_with(&self.ignore_prefix)
    }

    /// List and sort every item under `path`.
    ///
    /// Malformed files are logged and left out of the result.
    pub fn list_items<F, C>(
        &self,
        path: &str,
        mut comparator: C,
    ) -> Result<Vec<ContentItem<F>>, ContentError>
    where
        F: DeserializeOwned + Send,
        C: FnMut(&ContentItem<F>, &ContentItem<F>) -> Ordering,
    {
        let Scan { mut items, failures } = self.scan(path)?;
        for (file, err) in &failures {
            log_error(&format!("skipping {}", file.display()), err);
        }
        items.sort_by(|a, b| comparator(a, b));
        Ok(items)
    }

    /// Read and parse every listable file under `path`, unsorted.
    ///
    /// Files are read on the rayon pool; the result keeps file name order.
    pub fn scan<F>(&self, path: &str) -> Result<Scan<F>, ContentError>
    where
        F: DeserializeOwned + Send,
    {
        let files = self.listable_files(path)?;

        let parsed: Vec<_> = files
            .into_par_iter()
            .map(|(slug, file)| {
                let bytes = fs::read(&file).map_err(|err| ContentError::io(&file, err))?;
                Ok((file, parse_bytes::<F>(&slug, bytes)))
            })
            .collect::<Result<_, ContentError>>()?;

        let mut scan = Scan {
            items: Vec::with_capacity(parsed.len()),
            failures: Vec::new(),
        };
        for (file, result) in parsed {
            match result {
                Ok(item) => scan.items.push(item),
                Err(err) => scan.failures.push((file, err)),
            }
        }
        Ok(scan)
    }

    /// Fetch one item by slug.
    pub fn get_item_by_slug<F>(
        &self,
        path: &str,
        slug: &str,
    ) -> Result<Option<ContentItem<F>>, ContentError>
    where
        F: DeserializeOwned,
    {
        if !is_plain_slug(slug) || self.is_ignored(slug) {
            return Ok(None);
        }

        let file = self.file_path(path, slug);
        let bytes = match fs::read(&file) {
            Ok(bytes) => bytes,
            Err(err) if is_absent(&err) => return Ok(None),
            Err(err) => return Err(ContentError::io(&file, err)),
        };

        parse_bytes(slug, bytes)
            .map(Some)
            .map_err(|source| ContentError::Parse { path: file, source })
    }

    /// `{root}/{path}/{slug}.{extension}`
    pub fn file_path(&self, path: &str, slug: &str) -> PathBuf {
        self.root
            .join(path)
            .join(format!("{slug}.{}", self.extension))
    }

    /// `(slug, file)` pairs of listable files, sorted by file name.
    fn listable_files(&self, path: &str) -> Result<Vec<(String, PathBuf)>, ContentError> {
        let dir = self.root.join(path);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if is_absent(&err) => return Ok(Vec::new()),
            Err(err) => return Err(ContentError::io(&dir, err)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| ContentError::io(&dir, err))?;
            let file = entry.path();
            if file.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            let Some(slug) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if self.is_ignored(slug) {
                continue;
            }
            // Follows symlinks; a dangling link is absent, a looping one is not.
            match fs::metadata(&file) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => continue,
                Err(err) if is_absent(&err) => continue,
                Err(err) => return Err(ContentError::io(&file, err)),
            }
            files.push((slug.to_owned(), file));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

/// A slug is a single path component.
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory
    )
}

/// [`Repository::list_items`] with the default extension and ignore prefix.
pub fn list_items<F, C>(
    root: &Path,
    path: &str,
    comparator: C,
) -> Result<Vec<ContentItem<F>>, ContentError>
where
    F: DeserializeOwned + Send,
    C: FnMut(&ContentItem<F>, &ContentItem<F>) -> Ordering,
{
    Repository::new(root).list_items(path, comparator)
}

/// [`Repository::get_item_by_slug`] with the default extension and ignore prefix.
pub fn get_item_by_slug<F>(
    root: &Path,
    path: &str,
    slug: &str,
) -> Result<Option<ContentItem<F>>, ContentError>
where
    F: DeserializeOwned,
{
    Repository::new(root).get_item_by_slug(path, slug)
}

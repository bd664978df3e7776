//! Content inspection commands: `work`, `list`, `show`, `routes`, `hash`, `check`.
//!
//! Listings go through the same [`Site`] the server uses, so what is printed
//! here is what the server would answer.

use crate::{
    auth::{CredentialSource, EnvSecrets, expected_hash, hash_password, password_env_key},
    config::SiteConfig,
    content::{
        ContentError, ContentItem, Dated, NowFrontmatter, PageFrontmatter, Repository, Site,
        SortBy, WorkFrontmatter, kinds::string_or_number,
        taxonomy::{CONTENT_TYPES, NOW, PAGES, WORK, content_path, resolve_type},
    },
    log,
    logger::log_error,
    resolve::{company_display_name, navigation, routes, work_type_label},
    work::{Adjacent, WorkItem},
};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::{Deserialize, de::DeserializeOwned};

/// Frontmatter fields shared by every content kind, enough to list any folder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Listing {
    title: String,
    #[serde(deserialize_with = "string_or_number")]
    year: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    date: Option<String>,
}

impl Dated for Listing {
    fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// `folio work`
pub fn work(config: &SiteConfig) -> Result<()> {
    let site = Site::from_config(config);
    let all = site.all_work().context("Failed to list work")?;
    if all.is_empty() {
        log!("work"; "no work items under {}", config.content_dir().display());
    }
    for item in &all {
        println!("{}", work_line(item));
    }
    Ok(())
}

/// `folio list <category> [sub]`
pub fn list(config: &SiteConfig, category: &str, sub: Option<&str>) -> Result<()> {
    let site = Site::from_config(config);
    for line in list_lines(&site, category, sub)? {
        println!("{line}");
    }
    Ok(())
}

fn list_lines(site: &Site, category: &str, sub: Option<&str>) -> Result<Vec<String>> {
    let Some(ct) = resolve_type(category) else {
        bail!("Unknown content type `{category}`");
    };
    if let Some(sub) = sub
        && ct.sub_type(sub).is_none()
    {
        bail!("Unknown sub-type `{sub}` of `{category}`");
    }

    let lines = match (ct.slug, sub) {
        (WORK, Some(sub)) => site.work_items(sub)?.iter().map(work_line).collect(),
        (WORK, None) => site.all_work()?.iter().map(work_line).collect(),
        (PAGES, _) => site
            .pages()?
            .iter()
            .map(|p| dated_line(&p.slug, &p.frontmatter.title, p.frontmatter.date()))
            .collect(),
        (NOW, _) => site
            .now_entries()?
            .iter()
            .map(|n| dated_line(&n.slug, &n.frontmatter.title, n.frontmatter.date()))
            .collect(),
        (_, Some(sub)) => listing_lines(site, category, Some(sub))?,
        (_, None) => {
            let mut lines = Vec::new();
            for st in ct.sub_types {
                lines.push(format!("{}", st.label.bold()));
                lines.extend(listing_lines(site, category, Some(st.slug))?);
            }
            lines
        }
    };
    Ok(lines)
}

fn listing_lines(site: &Site, category: &str, sub: Option<&str>) -> Result<Vec<String>, ContentError> {
    let Some(path) = content_path(category, sub) else {
        return Ok(Vec::new());
    };
    let items = site.list::<Listing>(path, SortBy::DateOrYearDesc)?;
    Ok(items
        .iter()
        .map(|item| {
            let when = item.frontmatter.date().or(item.frontmatter.year());
            dated_line(&item.slug, &item.frontmatter.title, when)
        })
        .collect())
}

/// `folio show <sub> <slug>`
pub fn show(config: &SiteConfig, sub: &str, slug: &str) -> Result<()> {
    let site = Site::from_config(config);
    let Some(item) = site.work_item(sub, slug)? else {
        bail!("Work item `{sub}/{slug}` not found");
    };
    let Adjacent { prev, next } = site.adjacent_work_item(sub, slug)?;

    let fm = &item.frontmatter;
    println!("{}", fm.title.bold());
    if !fm.description.is_empty() {
        println!("{}", fm.description);
    }
    println!();
    field("route", &item.route());
    field("company", company_display_name(&fm.company));
    field("type", work_type_label(&fm.work_type));
    field("role", &fm.role);
    field("year", fm.year.as_deref().unwrap_or_default());
    field("date", fm.date.as_deref().unwrap_or_default());
    field("tags", &fm.tags.join(", "));
    field("access", &access_summary(&item.item));
    field("prev", &prev.map(|p| p.route()).unwrap_or_default());
    field("next", &next.map(|n| n.route()).unwrap_or_default());
    Ok(())
}

fn field(name: &str, value: &str) {
    if !value.is_empty() {
        println!("  {:<8} {value}", name.dimmed());
    }
}

fn access_summary(item: &ContentItem<WorkFrontmatter>) -> String {
    if !item.frontmatter.locked.unwrap_or_default() {
        return "public".to_owned();
    }
    match expected_hash(item, &EnvSecrets) {
        Some((_, CredentialSource::Frontmatter)) => "locked (frontmatter password)".to_owned(),
        Some((_, CredentialSource::ItemEnv)) => {
            format!("locked ({})", password_env_key(&item.slug))
        }
        Some((_, CredentialSource::GlobalEnv)) => "locked (global password)".to_owned(),
        None => format!(
            "{} (no credential configured, any password unlocks)",
            "locked".yellow()
        ),
    }
}

/// `folio routes`
pub fn print_routes() {
    for (name, route) in routes() {
        println!("{name:<12} {route}");
    }
    println!();
    for nav in navigation().iter().filter(|n| n.visible) {
        println!("{:<12} {}", nav.name, nav.href);
    }
}

/// `folio hash <password>`
pub fn hash(password: &str) {
    println!("{}", hash_password(password));
}

/// `folio check`
///
/// Parses every folder of the taxonomy with its frontmatter shape and reports
/// the files that fail. Errors when any file fails.
pub fn check(config: &SiteConfig) -> Result<()> {
    let repo = Repository::from_config(&config.content);
    let mut parsed = 0;
    let mut failed = 0;

    for ct in CONTENT_TYPES {
        let paths: Vec<_> = if ct.sub_types.is_empty() || ct.is_site_root() {
            vec![ct.path]
        } else {
            ct.sub_types.iter().map(|st| st.path).collect()
        };
        for path in paths {
            let (ok, bad) = match ct.slug {
                WORK => check_path::<WorkFrontmatter>(&repo, path)?,
                PAGES => check_path::<PageFrontmatter>(&repo, path)?,
                NOW => check_path::<NowFrontmatter>(&repo, path)?,
                _ => check_path::<Listing>(&repo, path)?,
            };
            parsed += ok;
            failed += bad;
        }
    }

    log!("check"; "{parsed} files parsed, {failed} failed");
    if failed > 0 {
        bail!("{failed} content files failed to parse");
    }
    Ok(())
}

fn check_path<F: DeserializeOwned + Send>(repo: &Repository, path: &str) -> Result<(usize, usize)> {
    let scan = repo.scan::<F>(path)?;
    for (file, err) in &scan.failures {
        log_error(&file.display().to_string(), err);
    }
    Ok((scan.items.len(), scan.failures.len()))
}

fn work_line(item: &WorkItem) -> String {
    let fm = &item.frontmatter;
    let when = fm.date.as_deref().or(fm.year.as_deref()).unwrap_or("-");
    let mut line = format!(
        "{:<16} {:<24} {:<10} {}",
        item.sub_type,
        item.slug,
        when,
        fm.title
    );
    if fm.featured {
        line.push_str(&format!(" {}", "★".yellow()));
    }
    if fm.locked.unwrap_or_default() {
        line.push_str(&format!(" {}", "[locked]".dimmed()));
    }
    line
}

fn dated_line(slug: &str, title: &str, when: Option<&str>) -> String {
    format!("{:<24} {:<10} {title}", slug, when.unwrap_or("-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, text: &str) {
        let file = dir.join(rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, text).unwrap();
    }

    fn config_for(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.content.dir = dir.to_path_buf();
        config
    }

    #[test]
    fn test_list_lines_work_and_other_types() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        write(dir.path(), "work/products/ocean.mdx", "---\ntitle: Ocean\nyear: 2023\n---\n");
        write(dir.path(), "reading/books/dune.mdx", "---\ntitle: Dune\ndate: \"2022-03-01\"\n---\n");
        write(dir.path(), "reading/books/emma.mdx", "---\ntitle: Emma\nyear: 2024\n---\n");
        let site = Site::from_config(&config_for(dir.path()));

        let work = list_lines(&site, "work", Some("products")).unwrap();
        assert_eq!(work.len(), 1);
        assert!(work[0].contains("ocean"));
        assert!(work[0].contains("2023"));

        let books = list_lines(&site, "reading", Some("books")).unwrap();
        assert!(books[0].starts_with("emma"));
        assert!(books[1].starts_with("dune"));

        let reading = list_lines(&site, "reading", None).unwrap();
        assert_eq!(reading[0], "Books");
        assert_eq!(reading[3], "Articles");
    }

    #[test]
    fn test_list_lines_unknown_category() {
        let dir = TempDir::new().unwrap();
        let site = Site::from_config(&config_for(dir.path()));

        assert!(list_lines(&site, "blog", None).is_err());
        assert!(list_lines(&site, "work", Some("zines")).is_err());
        assert!(list_lines(&site, "now", None).unwrap().is_empty());
    }

    #[test]
    fn test_check_reports_failures() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "work/products/ocean.mdx", "---\ntitle: Ocean\n---\n");
        write(dir.path(), "now/2025-02-09.mdx", "---\ntitle: Now\n---\n");
        let config = config_for(dir.path());
        assert!(check(&config).is_ok());

        write(dir.path(), "work/features/broken.mdx", "---\ntitle: [unclosed\n---\n");
        assert!(check(&config).is_err());
    }

    #[test]
    fn test_access_summary() {
        colored::control::set_override(false);
        let item = ContentItem {
            slug: "ocean".to_owned(),
            frontmatter: WorkFrontmatter {
                title: "Ocean".to_owned(),
                locked: Some(true),
                password: Some("tide".to_owned()),
                ..Default::default()
            },
            content: String::new(),
        };
        assert_eq!(access_summary(&item), "locked (frontmatter password)");

        let public = ContentItem {
            frontmatter: WorkFrontmatter::default(),
            ..item
        };
        assert_eq!(access_summary(&public), "public");
    }
}

//! Listing order for content items.
//!
//! All comparators sort newest first. They are total orders, so they are safe
//! for `sort_by` and stable sorts keep directory order among equal keys.

use std::cmp::Ordering;

use super::{
    date::{DateTimeUtc, parse_year},
    item::ContentItem,
    kinds::Dated,
};

/// How a listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Numeric `year`, missing as 0
    YearDesc,
    /// `date`, missing or unparsable as the epoch
    DateDesc,
    /// `date` when present, otherwise the start of `year`
    #[default]
    DateOrYearDesc,
}

impl SortBy {
    pub fn compare<F: Dated>(self, a: &ContentItem<F>, b: &ContentItem<F>) -> Ordering {
        match self {
            Self::YearDesc => by_year_desc(a, b),
            Self::DateDesc => by_date_desc(a, b),
            Self::DateOrYearDesc => by_date_or_year_desc(a, b),
        }
    }
}

fn year_of<F: Dated>(item: &ContentItem<F>) -> u32 {
    item.frontmatter.year().map_or(0, parse_year)
}

fn date_of<F: Dated>(item: &ContentItem<F>) -> Option<DateTimeUtc> {
    item.frontmatter.date().and_then(DateTimeUtc::parse)
}

/// Sort key of [`by_date_or_year_desc`].
///
/// A dated item keys on its date. An undated item keys on `(year, 0, 0)`,
/// which sits just before January 1st of that year, so it ranks below every
/// dated item of the same year and above every dated item of earlier years.
fn effective_key<F: Dated>(item: &ContentItem<F>) -> (u32, u8, u8) {
    match date_of(item) {
        Some(date) => (u32::from(date.year), date.month, date.day),
        None => (year_of(item), 0, 0),
    }
}

/// Descending by numeric year.
pub fn by_year_desc<F: Dated>(a: &ContentItem<F>, b: &ContentItem<F>) -> Ordering {
    year_of(b).cmp(&year_of(a))
}

/// Descending by date.
pub fn by_date_desc<F: Dated>(a: &ContentItem<F>, b: &ContentItem<F>) -> Ordering {
    let a = date_of(a).unwrap_or(DateTimeUtc::EPOCH);
    let b = date_of(b).unwrap_or(DateTimeUtc::EPOCH);
    b.cmp(&a)
}

/// Descending by date when present, otherwise by year.
///
/// Two dated items compare by date and two undated items by year. A dated
/// item always beats an undated one of the same year.
pub fn by_date_or_year_desc<F: Dated>(a: &ContentItem<F>, b: &ContentItem<F>) -> Ordering {
    effective_key(b).cmp(&effective_key(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Meta {
        year: Option<&'static str>,
        date: Option<&'static str>,
    }

    impl Dated for Meta {
        fn year(&self) -> Option<&str> {
            self.year
        }
        fn date(&self) -> Option<&str> {
            self.date
        }
    }

    fn item(slug: &str, year: Option<&'static str>, date: Option<&'static str>) -> ContentItem<Meta> {
        ContentItem {
            slug: slug.to_owned(),
            frontmatter: Meta { year, date },
            content: String::new(),
        }
    }

    fn sorted(mut items: Vec<ContentItem<Meta>>, by: SortBy) -> Vec<String> {
        items.sort_by(|a, b| by.compare(a, b));
        items.into_iter().map(|i| i.slug).collect()
    }

    #[test]
    fn test_by_year_desc() {
        let items = vec![
            item("old", Some("2019"), None),
            item("none", None, None),
            item("new", Some("2024"), None),
            item("mid", Some("2021"), None),
        ];
        assert_eq!(sorted(items, SortBy::YearDesc), ["new", "mid", "old", "none"]);
    }

    #[test]
    fn test_by_year_desc_is_stable_for_ties() {
        let items = vec![
            item("first", Some("2022"), None),
            item("second", Some("2022"), None),
        ];
        assert_eq!(sorted(items, SortBy::YearDesc), ["first", "second"]);
    }

    #[test]
    fn test_by_date_desc() {
        let items = vec![
            item("jan", None, Some("2024-01-10")),
            item("garbage", None, Some("someday")),
            item("mar", None, Some("2024-03-01")),
            item("missing", None, None),
        ];
        assert_eq!(
            sorted(items, SortBy::DateDesc),
            ["mar", "jan", "garbage", "missing"]
        );
    }

    #[test]
    fn test_by_date_or_year_mixed() {
        let items = vec![
            item("aqua", Some("2022"), None),
            item("batching", None, Some("2023-03-01")),
            item("ocean", None, Some("2024-06-15")),
        ];
        assert_eq!(
            sorted(items, SortBy::DateOrYearDesc),
            ["ocean", "batching", "aqua"]
        );
    }

    #[test]
    fn test_dated_beats_undated_of_same_year() {
        let items = vec![
            item("undated", Some("2023"), None),
            item("dated", Some("2023"), Some("2023-01-01")),
        ];
        assert_eq!(
            sorted(items, SortBy::DateOrYearDesc),
            ["dated", "undated"]
        );
    }

    #[test]
    fn test_undated_newer_year_beats_older_date() {
        let a = item("undated", Some("2024"), None);
        let b = item("dated", None, Some("2023-12-31"));
        assert_eq!(by_date_or_year_desc(&a, &b), Ordering::Less);
        assert_eq!(by_date_or_year_desc(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_date_wins_over_own_year() {
        // the date decides even when the year field disagrees with it
        let a = item("a", Some("2020"), Some("2024-05-01"));
        let b = item("b", Some("2023"), None);
        assert_eq!(by_date_or_year_desc(&a, &b), Ordering::Less);
    }
}

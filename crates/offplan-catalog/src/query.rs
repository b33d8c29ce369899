//! Filter, sort and paginate listings for the catalog view.
//!
//! A [`QueryState`] is an immutable value rebuilt on every interaction; the
//! engine never mutates the catalog and never fails. Absent optional fields
//! follow one policy: a missing `bedroom_min` counts as zero and a missing
//! handover date sorts as the empty string.

use std::str::FromStr;

use offplan_core::config::{DEFAULT_MAX_PRICE, DEFAULT_PAGE_SIZE};
use offplan_core::PropertyRecord;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Result ordering for the listing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Title,
    #[serde(alias = "price")]
    PriceAsc,
    PriceDesc,
    Handover,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Title => write!(f, "title"),
            SortKey::PriceAsc => write!(f, "price-asc"),
            SortKey::PriceDesc => write!(f, "price-desc"),
            SortKey::Handover => write!(f, "handover"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "price" | "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "handover" => Ok(SortKey::Handover),
            other => Err(format!(
                "unknown sort key '{other}'; expected title, price-asc, price-desc or handover"
            )),
        }
    }
}

/// Filters, ordering and page selection for one catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    /// Case-insensitive substring matched against title, developer and region.
    pub search: String,
    pub region: Option<String>,
    pub property_type: Option<String>,
    pub developer: Option<String>,
    /// Inclusive upper bound on `price`.
    pub max_price: u64,
    /// Inclusive lower bound on `bedroom_min`.
    pub min_bedrooms: Option<u32>,
    pub sort: SortKey,
    /// 1-based page index. Page 0 always yields an empty page.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            region: None,
            property_type: None,
            developer: None,
            max_price: DEFAULT_MAX_PRICE,
            min_bedrooms: None,
            sort: SortKey::Title,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results plus the counts needed for pagination controls.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a PropertyRecord>,
    pub total_matched: usize,
    /// Never less than 1, even when nothing matched.
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl QueryPage<'_> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive `(first, last)` positions of this page's items
    /// within the matched set, or `None` for an empty page.
    #[must_use]
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Run a query over the full catalog.
///
/// Out-of-range pages (including page 0) return an empty `items` list; the
/// caller is responsible for clamping the page it asks for.
#[must_use]
pub fn query<'a>(catalog: &'a [PropertyRecord], state: &QueryState) -> QueryPage<'a> {
    let filter = CompiledFilter::new(state);
    let mut matched: Vec<&PropertyRecord> =
        catalog.iter().filter(|r| filter.matches(r)).collect();
    sort_records(&mut matched, state.sort);

    // A zero page size would make every page empty and the page count
    // undefined; treat it as one listing per page.
    let page_size = state.page_size.max(1);
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let items = page_slice(&matched, state.page, page_size).to_vec();

    tracing::debug!(
        total_matched,
        total_pages,
        page = state.page,
        sort = %state.sort,
        "catalog query executed"
    );

    QueryPage {
        items,
        total_matched,
        total_pages,
        page: state.page,
        page_size,
    }
}

/// Returns `true` when `record` passes every active filter in `state`.
#[must_use]
pub fn filter_matches(record: &PropertyRecord, state: &QueryState) -> bool {
    CompiledFilter::new(state).matches(record)
}

/// `state` with the search needle lowercased once per query.
struct CompiledFilter<'s> {
    needle: Option<String>,
    state: &'s QueryState,
}

impl<'s> CompiledFilter<'s> {
    fn new(state: &'s QueryState) -> Self {
        let needle = (!state.search.is_empty()).then(|| state.search.to_lowercase());
        Self { needle, state }
    }

    fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(needle) = &self.needle {
            let hit = [&record.title, &record.developer, &record.region]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str()));
            if !hit {
                return false;
            }
        }

        if !exact(self.state.region.as_deref(), &record.region)
            || !exact(self.state.property_type.as_deref(), &record.property_type)
            || !exact(self.state.developer.as_deref(), &record.developer)
        {
            return false;
        }

        if record.price > self.state.max_price {
            return false;
        }

        if let Some(min) = self.state.min_bedrooms {
            if record.bedroom_min.unwrap_or(0) < min {
                return false;
            }
        }

        true
    }
}

/// An empty or absent filter value matches everything.
fn exact(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(f) if !f.is_empty() => f == value,
        _ => true,
    }
}

fn sort_records(records: &mut [&PropertyRecord], key: SortKey) {
    match key {
        SortKey::Title => records.sort_by_cached_key(|r| TitleKey::new(&r.title)),
        SortKey::PriceAsc => records.sort_by_key(|r| r.price),
        SortKey::PriceDesc => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Handover => records.sort_by(|a, b| {
            let a = a.handover_time.as_deref().unwrap_or("");
            let b = b.handover_time.as_deref().unwrap_or("");
            a.cmp(b)
        }),
    }
}

/// Collation key for titles: accents and case are ignored first, then accents
/// decide, then the raw string. `"Élan"` sorts with the E's and `"azure"` next
/// to `"Azure"`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct TitleKey {
    base: String,
    accented: String,
    raw: String,
}

impl TitleKey {
    fn new(title: &str) -> Self {
        let base = title
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase();
        Self {
            base,
            accented: title.nfc().collect::<String>().to_lowercase(),
            raw: title.to_string(),
        }
    }
}

fn page_slice<'r, 'a>(
    records: &'r [&'a PropertyRecord],
    page: usize,
    page_size: usize,
) -> &'r [&'a PropertyRecord] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

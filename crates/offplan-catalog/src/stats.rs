//! Summary aggregations over the full catalog (never the filtered subset).

use std::collections::{BTreeSet, HashMap};

use offplan_core::PropertyRecord;
use serde::Serialize;

use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

/// A developer's share of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperSummary {
    pub name: String,
    pub count: usize,
    /// Rounded mean listing price across this developer's records.
    pub average_price: u64,
    /// First non-empty logo URL seen for this developer in catalog order.
    pub logo: Option<String>,
}

/// Landing-page statistics for a loaded catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary<'a> {
    pub total_properties: usize,
    pub region_count: usize,
    pub developer_count: usize,
    pub average_price: Option<u64>,
    pub price_range: Option<PriceRange>,
    pub regions: Vec<String>,
    pub types: Vec<String>,
    pub developers: Vec<String>,
    pub top_developers: Vec<DeveloperSummary>,
    pub featured: Vec<&'a PropertyRecord>,
}

fn distinct<'a, F>(catalog: &'a [PropertyRecord], field: F) -> Vec<String>
where
    F: Fn(&'a PropertyRecord) -> &'a str,
{
    catalog
        .iter()
        .map(field)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Sorted, deduplicated non-empty regions.
#[must_use]
pub fn distinct_regions(catalog: &[PropertyRecord]) -> Vec<String> {
    distinct(catalog, |r| r.region.as_str())
}

/// Sorted, deduplicated non-empty listing types.
#[must_use]
pub fn distinct_types(catalog: &[PropertyRecord]) -> Vec<String> {
    distinct(catalog, |r| r.property_type.as_str())
}

/// Sorted, deduplicated non-empty developer names.
#[must_use]
pub fn distinct_developers(catalog: &[PropertyRecord]) -> Vec<String> {
    distinct(catalog, |r| r.developer.as_str())
}

/// Rounded mean price across every record.
///
/// # Errors
///
/// Returns [`CatalogError::EmptyCatalog`] when there is nothing to average.
pub fn average_price(catalog: &[PropertyRecord]) -> Result<u64, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    Ok(rounded_mean(catalog.iter().map(|r| r.price)))
}

#[must_use]
pub fn price_range(catalog: &[PropertyRecord]) -> Option<PriceRange> {
    let min = catalog.iter().map(|r| r.price).min()?;
    let max = catalog.iter().map(|r| r.price).max()?;
    Some(PriceRange { min, max })
}

/// The `n` developers with the most listings.
///
/// Ties keep the order in which developers first appear in the catalog.
/// Records with an empty developer name are not counted.
#[must_use]
pub fn top_developers(catalog: &[PropertyRecord], n: usize) -> Vec<DeveloperSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&PropertyRecord>> = HashMap::new();

    for record in catalog.iter().filter(|r| !r.developer.is_empty()) {
        let name = record.developer.as_str();
        groups
            .entry(name)
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(record);
    }

    let mut ranked: Vec<DeveloperSummary> = order
        .into_iter()
        .map(|name| {
            let records = &groups[name];
            DeveloperSummary {
                name: name.to_string(),
                count: records.len(),
                average_price: rounded_mean(records.iter().map(|r| r.price)),
                logo: records
                    .iter()
                    .find_map(|r| r.developer_logo.clone().filter(|l| !l.is_empty())),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// The `n` most expensive listings, ties in catalog order.
#[must_use]
pub fn featured(catalog: &[PropertyRecord], n: usize) -> Vec<&PropertyRecord> {
    let mut ranked: Vec<&PropertyRecord> = catalog.iter().collect();
    ranked.sort_by(|a, b| b.price.cmp(&a.price));
    ranked.truncate(n);
    ranked
}

/// Bundle every landing-page aggregation for one catalog.
#[must_use]
pub fn summarize(
    catalog: &[PropertyRecord],
    top_n: usize,
    featured_n: usize,
) -> CatalogSummary<'_> {
    let regions = distinct_regions(catalog);
    let developers = distinct_developers(catalog);
    CatalogSummary {
        total_properties: catalog.len(),
        region_count: regions.len(),
        developer_count: developers.len(),
        average_price: average_price(catalog).ok(),
        price_range: price_range(catalog),
        regions,
        types: distinct_types(catalog),
        developers,
        top_developers: top_developers(catalog, top_n),
        featured: featured(catalog, featured_n),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn rounded_mean(prices: impl Iterator<Item = u64>) -> u64 {
    let (sum, count) = prices.fold((0_u128, 0_u64), |(sum, count), p| {
        (sum + u128::from(p), count + 1)
    });
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u64
}

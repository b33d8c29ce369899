//! Catalog command handlers: `list`, `summary` and `show`.

use std::path::Path;

use anyhow::Context;
use clap::Args;
use offplan_catalog::{find_property, load_catalog, query, summarize, QueryState, SortKey};
use offplan_core::{AppConfig, PropertyId, PropertyRecord};

use crate::render::Renderer;

/// Filters and paging for `list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against title, developer and region
    #[arg(long, default_value = "")]
    pub search: String,
    /// Exact region name
    #[arg(long)]
    pub region: Option<String>,
    /// Exact listing type (e.g. Apartment, Villa)
    #[arg(long = "type")]
    pub property_type: Option<String>,
    /// Exact developer name
    #[arg(long)]
    pub developer: Option<String>,
    /// Inclusive price ceiling in AED (defaults to `OFFPLAN_DEFAULT_MAX_PRICE`)
    #[arg(long)]
    pub max_price: Option<u64>,
    /// Minimum bedroom count
    #[arg(long)]
    pub min_bedrooms: Option<u32>,
    /// title, price-asc (or price), price-desc, handover
    #[arg(long, default_value_t = SortKey::Title)]
    pub sort: SortKey,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Listings per page (defaults to `OFFPLAN_PAGE_SIZE`)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    pub(crate) fn to_state(&self, config: &AppConfig) -> QueryState {
        QueryState {
            search: self.search.clone(),
            region: self.region.clone(),
            property_type: self.property_type.clone(),
            developer: self.developer.clone(),
            max_price: self.max_price.unwrap_or(config.default_max_price),
            min_bedrooms: self.min_bedrooms,
            sort: self.sort,
            page: self.page,
            page_size: self.page_size.unwrap_or(config.page_size),
        }
    }
}

pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<PropertyRecord>> {
    load_catalog(path).with_context(|| {
        format!(
            "could not load catalog from {}; set OFFPLAN_CATALOG_PATH or pass --catalog",
            path.display()
        )
    })
}

/// Print one page of matching listings.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or rendering fails.
pub(crate) fn run_list(
    catalog_path: &Path,
    config: &AppConfig,
    args: &ListArgs,
    renderer: &dyn Renderer,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;
    let state = args.to_state(config);
    let page = query(&catalog, &state);

    if page.items.is_empty() && page.total_matched > 0 {
        eprintln!(
            "page {} is out of range; there are {} page(s)",
            state.page, page.total_pages
        );
    }

    println!("{}", renderer.page(&page, &state)?);
    Ok(())
}

/// Print catalog-wide statistics.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or rendering fails.
pub(crate) fn run_summary(
    catalog_path: &Path,
    config: &AppConfig,
    renderer: &dyn Renderer,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;
    let summary = summarize(&catalog, config.top_developers, config.featured_count);
    println!("{}", renderer.summary(&summary)?);
    Ok(())
}

/// Print one listing in full.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or has no listing `id`.
pub(crate) fn run_show(
    catalog_path: &Path,
    id: &str,
    renderer: &dyn Renderer,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;
    let property = find_property(&catalog, &PropertyId::from(id))
        .ok_or_else(|| anyhow::anyhow!("listing '{id}' not found in catalog"))?;
    println!("{}", renderer.property(property)?);
    Ok(())
}

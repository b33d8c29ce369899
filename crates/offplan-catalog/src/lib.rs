//! Off-plan listing catalog: loading, querying and summary aggregations.
//!
//! The query engine and aggregations are pure functions over a borrowed
//! slice of [`PropertyRecord`]s; only [`load_catalog`] touches the
//! filesystem.

pub mod detail;
pub mod error;
pub mod loader;
pub mod query;
pub mod stats;

#[cfg(test)]
mod fixtures;

pub use detail::{bedrooms_label, find_property, find_unit, unit_price_or_property};
pub use error::CatalogError;
pub use loader::{load_catalog, parse_catalog};
pub use query::{filter_matches, query, QueryPage, QueryState, SortKey};
pub use stats::{
    average_price, distinct_developers, distinct_regions, distinct_types, featured, price_range,
    summarize, top_developers, CatalogSummary, DeveloperSummary, PriceRange,
};

pub use offplan_core::PropertyRecord;

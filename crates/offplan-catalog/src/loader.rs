use std::collections::HashSet;
use std::path::Path;

use offplan_core::{normalize_property, PropertyRecord, RawProperty};

use crate::CatalogError;

/// Load, normalize and validate the listing catalog from a JSON file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, normalized or
/// fails validation.
pub fn load_catalog(path: &Path) -> Result<Vec<PropertyRecord>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog = parse_catalog(&content)?;
    tracing::info!(
        path = %path.display(),
        properties = catalog.len(),
        "loaded property catalog"
    );
    Ok(catalog)
}

/// Parse catalog JSON already in memory.
///
/// # Errors
///
/// Returns `CatalogError` if the JSON is malformed, a listing has an invalid
/// price, ids repeat, or a bedroom range is inverted.
pub fn parse_catalog(json: &str) -> Result<Vec<PropertyRecord>, CatalogError> {
    let raw: Vec<RawProperty> = serde_json::from_str(json)?;
    let catalog = raw
        .into_iter()
        .map(normalize_property)
        .collect::<Result<Vec<_>, _>>()?;

    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &[PropertyRecord]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for record in catalog {
        if !seen_ids.insert(&record.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate property id: '{}'",
                record.id
            )));
        }

        if record.has_inverted_bedroom_range() {
            return Err(CatalogError::Validation(format!(
                "property '{}' has bedroom_min {:?} greater than bedroom_max {:?}",
                record.id, record.bedroom_min, record.bedroom_max
            )));
        }
    }

    Ok(())
}

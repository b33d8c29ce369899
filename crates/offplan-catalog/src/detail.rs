//! Single-listing lookups used by the detail view and the ROI hand-off.

use std::sync::LazyLock;

use offplan_core::{PropertyId, PropertyRecord, UnitRecord};
use regex::Regex;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("valid regex"));

/// Find a listing by id.
#[must_use]
pub fn find_property<'a>(
    catalog: &'a [PropertyRecord],
    id: &PropertyId,
) -> Option<&'a PropertyRecord> {
    catalog.iter().find(|r| &r.id == id)
}

/// Find a unit layout in a listing's floor plan.
#[must_use]
pub fn find_unit<'a>(property: &'a PropertyRecord, unit_id: &str) -> Option<&'a UnitRecord> {
    property.floor_plan.iter().find(|u| u.id == unit_id)
}

/// The price to seed an ROI projection with: the unit's own price when it has
/// one, otherwise the listing's starting price.
#[must_use]
pub fn unit_price_or_property(property: &PropertyRecord, unit: Option<&UnitRecord>) -> u64 {
    unit.and_then(|u| u.price).unwrap_or(property.price)
}

/// Bedroom label derived from a unit name: `"2 Bedroom Apartment"` → `"2 BR"`.
///
/// Names without any digits (`"Studio"`, `"Penthouse"`) are returned unchanged.
#[must_use]
pub fn bedrooms_label(unit_name: &str) -> String {
    FIRST_NUMBER
        .captures(unit_name)
        .and_then(|cap| cap.get(1))
        .map_or_else(|| unit_name.to_string(), |m| format!("{} BR", m.as_str()))
}

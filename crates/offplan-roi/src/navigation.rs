//! The query string a listing's detail view uses to open the calculator for
//! one unit: `propertyId`, `unitId`, `unitName` and `price`.

use offplan_core::{PropertyId, UnitRecord};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::{RoiDraft, RoiError};

/// Price assumed when the hand-off carries none (or zero).
pub const FALLBACK_PRICE: u64 = 1_000_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationParams {
    pub property_id: Option<PropertyId>,
    pub unit_id: Option<String>,
    pub unit_name: Option<String>,
    pub price: Option<u64>,
}

impl NavigationParams {
    /// Parameters for opening the calculator on `unit` of `property_id`.
    ///
    /// A zero price is how the catalog spells "on request"; it is replaced
    /// by [`FALLBACK_PRICE`].
    #[must_use]
    pub fn for_unit(property_id: PropertyId, unit: Option<&UnitRecord>, price: u64) -> Self {
        Self {
            property_id: Some(property_id),
            unit_id: unit.map(|u| u.id.clone()),
            unit_name: unit.map(|u| u.name.clone()).filter(|n| !n.is_empty()),
            price: Some(if price == 0 { FALLBACK_PRICE } else { price }),
        }
    }

    /// Parse a query string, with or without its leading `?`.
    ///
    /// Unknown keys are ignored, `+` decodes to a space, and empty values
    /// count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::Validation`] if a value is not valid UTF-8 after
    /// decoding or `price` is not a whole non-negative number.
    pub fn parse(query: &str) -> Result<Self, RoiError> {
        let mut params = Self::default();
        let query = query.trim().trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(key, raw)?;
            if value.is_empty() {
                continue;
            }
            match key {
                "propertyId" => params.property_id = Some(PropertyId(value)),
                "unitId" => params.unit_id = Some(value),
                "unitName" => params.unit_name = Some(value),
                "price" => params.price = Some(parse_price(&value)?),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Encode back into a query string (no leading `?`). Absent values are
    /// omitted.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let price = self.price.map(|p| p.to_string());
        [
            ("propertyId", self.property_id.as_ref().map(PropertyId::as_str)),
            ("unitId", self.unit_id.as_deref()),
            ("unitName", self.unit_name.as_deref()),
            ("price", price.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{key}={}", utf8_percent_encode(v, NON_ALPHANUMERIC)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }

    /// The price the calculator opens with.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.price.filter(|p| *p > 0).unwrap_or(FALLBACK_PRICE)
    }

    /// A calculator draft seeded with the hand-off price; every other field
    /// stays blank so the defaults apply.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_draft(&self) -> RoiDraft {
        RoiDraft {
            property_price: Some(self.effective_price() as f64),
            ..RoiDraft::default()
        }
    }
}

fn decode(key: &str, raw: &str) -> Result<String, RoiError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|v| v.trim().to_string())
        .map_err(|_| {
            RoiError::invalid(
                field_name(key),
                "is not valid UTF-8 after percent-decoding",
            )
        })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_price(value: &str) -> Result<u64, RoiError> {
    if let Ok(whole) = value.parse::<u64>() {
        return Ok(whole);
    }
    // Listing prices are sometimes handed over as "1250000.0".
    match value.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p.round() as u64),
        _ => Err(RoiError::invalid(
            "price",
            format!("'{value}' is not a non-negative number"),
        )),
    }
}

fn field_name(key: &str) -> &'static str {
    match key {
        "propertyId" => "property_id",
        "unitId" => "unit_id",
        "unitName" => "unit_name",
        "price" => "price",
        _ => "query",
    }
}

//! Catalog file wire types and their normalization into [`PropertyRecord`].
//!
//! ## Observed shape of the catalog file
//!
//! The file is a JSON array of listing objects exported from the listings
//! portal. Top-level keys are camelCase (`cityName`, `developerLogo`,
//! `propertyType`). Project-level details live under a nested `newParam`
//! object:
//!
//! ```text
//! { "id": 101, "title": "...", "price": 1250000, "type": "Apartment",
//!   "newParam": { "bedroomMin": 1, "bedroomMax": 3,
//!                 "handoverTime": "2027-03-31T00:00:00.000Z",
//!                 "floorPlan": [{ "id": "u1", "name": "1 Bedroom", "area": 812,
//!                                 "price": 1250000, "imgUrl": ["..."] }],
//!                 "paymentPlan": "{\"one\":10,\"two\":50,\"three\":40,\"four\":0}" } }
//! ```
//!
//! ### Ids
//! Integers in some exports, strings in others.
//!
//! ### Numbers
//! Unit `area`/`price`, bedroom bounds and sizes are usually numbers but
//! occasionally arrive as numeric strings. Anything that does not parse as a
//! finite number is treated as absent.
//!
//! ### `paymentPlan`
//! Usually a JSON *string* holding an object with keys `one`..`four`; newer
//! exports inline the object. A plan that cannot be decoded is dropped (and
//! logged) rather than failing the whole catalog.

use serde::Deserialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::property::{AgentContact, PaymentPlan, PropertyId, PropertyRecord, UnitRecord};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Str(String),
}

impl RawId {
    fn into_property_id(self) -> PropertyId {
        match self {
            RawId::Int(n) => PropertyId(n.to_string()),
            RawId::Str(s) => PropertyId(s),
        }
    }
}

/// A number that may have been exported as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Num(f64),
    Str(String),
}

impl LenientNumber {
    fn to_f64(&self) -> Option<f64> {
        let value = match self {
            LenientNumber::Num(n) => *n,
            LenientNumber::Str(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// A single listing as it appears in the catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub id: RawId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub price: LenientNumber,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub developer_logo: Option<String>,
    #[serde(default)]
    pub property_type: Vec<String>,
    #[serde(default)]
    pub agent: Option<RawAgent>,
    #[serde(default)]
    pub new_param: Option<RawProjectParams>,
}

/// The nested `newParam` object.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectParams {
    #[serde(default)]
    pub bedroom_min: Option<LenientNumber>,
    #[serde(default)]
    pub bedroom_max: Option<LenientNumber>,
    #[serde(default)]
    pub handover_time: Option<String>,
    #[serde(default)]
    pub total_units: Option<LenientNumber>,
    #[serde(default)]
    pub min_size: Option<LenientNumber>,
    #[serde(default)]
    pub max_size: Option<LenientNumber>,
    #[serde(default)]
    pub floor_plan: Vec<RawUnit>,
    /// Either a JSON string or an inline object; decoded during normalization.
    #[serde(default)]
    pub payment_plan: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUnit {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub area: Option<LenientNumber>,
    #[serde(default)]
    pub price: Option<LenientNumber>,
    #[serde(default)]
    pub img_url: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAgent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPaymentPlan {
    #[serde(default)]
    one: Option<LenientNumber>,
    #[serde(default)]
    two: Option<LenientNumber>,
    #[serde(default)]
    three: Option<LenientNumber>,
    #[serde(default)]
    four: Option<LenientNumber>,
}

/// Normalizes a raw catalog entry into a [`PropertyRecord`].
///
/// # Errors
///
/// Returns [`NormalizeError`] if the listing price is negative or not a
/// finite number. Every other malformed field degrades to its absent value.
pub fn normalize_property(raw: RawProperty) -> Result<PropertyRecord, NormalizeError> {
    let id = raw.id.into_property_id();

    let price = raw
        .price
        .to_f64()
        .filter(|p| *p >= 0.0)
        .ok_or_else(|| NormalizeError {
            id: id.to_string(),
            reason: format!("price must be a non-negative number, got {:?}", raw.price),
        })?;

    let params = raw.new_param.unwrap_or_default();
    let payment_plan = params
        .payment_plan
        .as_ref()
        .and_then(|value| decode_payment_plan(&id, value));

    let floor_plan = params
        .floor_plan
        .into_iter()
        .enumerate()
        .map(|(idx, unit)| normalize_unit(unit, idx))
        .collect();

    let property_type = raw.kind.unwrap_or_default();
    let property_types = if raw.property_type.is_empty() && !property_type.is_empty() {
        vec![property_type.clone()]
    } else {
        raw.property_type
    };

    Ok(PropertyRecord {
        id,
        title: raw.title.unwrap_or_default(),
        region: raw.region.unwrap_or_default(),
        developer: raw.developer.unwrap_or_default(),
        property_type,
        price: whole_units(price),
        bedroom_min: params.bedroom_min.as_ref().and_then(count),
        bedroom_max: params.bedroom_max.as_ref().and_then(count),
        handover_time: params.handover_time.filter(|s| !s.trim().is_empty()),
        amenities: raw.amenities,
        photos: raw.photos.into_iter().filter(|p| !p.is_empty()).collect(),
        floor_plan,
        payment_plan,
        description: raw.description.filter(|s| !s.is_empty()),
        city_name: raw.city_name.filter(|s| !s.is_empty()),
        developer_logo: raw.developer_logo.filter(|s| !s.is_empty()),
        property_types,
        total_units: params.total_units.as_ref().and_then(count),
        min_size: params.min_size.as_ref().and_then(LenientNumber::to_f64),
        max_size: params.max_size.as_ref().and_then(LenientNumber::to_f64),
        agent: raw.agent.map(|a| AgentContact {
            name: a.name,
            phone: a.phone,
            email: a.email,
        }),
    })
}

fn normalize_unit(unit: RawUnit, idx: usize) -> UnitRecord {
    let id = unit
        .id
        .map_or_else(|| format!("unit-{}", idx + 1), |id| id.into_property_id().0);
    UnitRecord {
        id,
        name: unit.name.unwrap_or_default(),
        area: unit.area.as_ref().and_then(LenientNumber::to_f64),
        // Zero is how the export spells "price on request".
        price: unit
            .price
            .as_ref()
            .and_then(LenientNumber::to_f64)
            .filter(|p| *p > 0.0)
            .map(whole_units),
        images: unit.img_url.into_iter().filter(|u| !u.is_empty()).collect(),
    }
}

fn decode_payment_plan(id: &PropertyId, value: &Value) -> Option<PaymentPlan> {
    let decoded = match value {
        Value::Null => return None,
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => serde_json::from_str::<RawPaymentPlan>(s),
        other => serde_json::from_value::<RawPaymentPlan>(other.clone()),
    };

    match decoded {
        Ok(raw) => {
            let stage =
                |n: Option<&LenientNumber>| n.and_then(LenientNumber::to_f64).unwrap_or(0.0);
            Some(PaymentPlan {
                booking: stage(raw.one.as_ref()),
                construction: stage(raw.two.as_ref()),
                handover: stage(raw.three.as_ref()),
                post_handover: stage(raw.four.as_ref()),
            })
        }
        Err(e) => {
            tracing::warn!(property_id = %id, error = %e, "dropping undecodable payment plan");
            None
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units(value: f64) -> u64 {
    value.round() as u64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: &LenientNumber) -> Option<u32> {
    value
        .to_f64()
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.trunc() as u32)
}

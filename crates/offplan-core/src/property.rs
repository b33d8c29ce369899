use serde::{Deserialize, Serialize};

/// Opaque listing identifier.
///
/// The catalog file carries ids as either JSON strings or integers; both are
/// normalized to their string form so lookups from a query string compare
/// equal to lookups from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl PropertyId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for PropertyId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// A single off-plan project listing, normalized from the catalog file.
///
/// Records are read-only once loaded. Optional data the source may omit
/// (bedroom bounds, handover date, payment plan) is modeled as `Option` so
/// the query engine can apply its missing-data policy explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub region: String,
    pub developer: String,
    /// Listing category used by the type filter, e.g. `"Apartment"`.
    #[serde(rename = "type")]
    pub property_type: String,
    /// Starting price in whole AED.
    pub price: u64,
    pub bedroom_min: Option<u32>,
    pub bedroom_max: Option<u32>,
    /// Raw handover date string as published by the developer (ISO-ish).
    pub handover_time: Option<String>,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
    pub floor_plan: Vec<UnitRecord>,
    pub payment_plan: Option<PaymentPlan>,
    pub description: Option<String>,
    pub city_name: Option<String>,
    pub developer_logo: Option<String>,
    /// Every category the project advertises; `property_type` is the primary one.
    pub property_types: Vec<String>,
    pub total_units: Option<u32>,
    /// Smallest unit size in sq ft.
    pub min_size: Option<f64>,
    /// Largest unit size in sq ft.
    pub max_size: Option<f64>,
    pub agent: Option<AgentContact>,
}

impl PropertyRecord {
    /// Returns the first photo URL, if the listing has any.
    #[must_use]
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Returns the first `n` amenities for card-style summaries.
    #[must_use]
    pub fn headline_amenities(&self, n: usize) -> &[String] {
        &self.amenities[..self.amenities.len().min(n)]
    }

    /// `true` when both bedroom bounds are present and inverted.
    #[must_use]
    pub fn has_inverted_bedroom_range(&self) -> bool {
        matches!((self.bedroom_min, self.bedroom_max), (Some(min), Some(max)) if min > max)
    }
}

/// One unit layout from a project's floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: String,
    /// Display name, e.g. `"2 Bedroom Apartment"`.
    pub name: String,
    /// Unit area in sq ft.
    pub area: Option<f64>,
    /// Unit price in whole AED; `None` means "price on request".
    pub price: Option<u64>,
    /// Floor plan image URLs.
    pub images: Vec<String>,
}

/// Developer payment schedule split into four stages.
///
/// The stages conceptually sum to 100 but the source data does not enforce
/// it, so neither do we.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub booking: f64,
    pub construction: f64,
    pub handover: f64,
    pub post_handover: f64,
}

impl PaymentPlan {
    /// Labelled stages in payment order.
    #[must_use]
    pub fn stages(&self) -> [(&'static str, f64); 4] {
        [
            ("Booking", self.booking),
            ("Construction", self.construction),
            ("Handover", self.handover),
            ("Post Handover", self.post_handover),
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.booking + self.construction + self.handover + self.post_handover
    }
}

/// Sales agent contact attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> PropertyRecord {
        PropertyRecord {
            id: PropertyId::from(7_u64),
            title: "Marina Vista".to_string(),
            region: "Dubai Marina".to_string(),
            developer: "Emaar".to_string(),
            property_type: "Apartment".to_string(),
            price: 1_850_000,
            bedroom_min: Some(1),
            bedroom_max: Some(3),
            handover_time: Some("2027-06-30".to_string()),
            amenities: vec![
                "Pool".to_string(),
                "Gym".to_string(),
                "Concierge".to_string(),
                "Marina Walk".to_string(),
            ],
            photos: vec![],
            floor_plan: vec![],
            payment_plan: None,
            description: None,
            city_name: Some("Dubai".to_string()),
            developer_logo: None,
            property_types: vec!["Apartment".to_string()],
            total_units: Some(420),
            min_size: Some(710.0),
            max_size: Some(1_980.5),
            agent: None,
        }
    }

    #[test]
    fn property_id_display_matches_inner() {
        assert_eq!(PropertyId::from("abc-1").to_string(), "abc-1");
        assert_eq!(PropertyId::from(42_u64).as_str(), "42");
    }

    #[test]
    fn cover_photo_none_when_no_photos() {
        assert!(make_record().cover_photo().is_none());
    }

    #[test]
    fn cover_photo_returns_first() {
        let mut record = make_record();
        record.photos = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(record.cover_photo(), Some("a.jpg"));
    }

    #[test]
    fn headline_amenities_truncates() {
        let record = make_record();
        assert_eq!(record.headline_amenities(3).len(), 3);
        assert_eq!(record.headline_amenities(10).len(), 4);
    }

    #[test]
    fn inverted_bedroom_range_detected() {
        let mut record = make_record();
        assert!(!record.has_inverted_bedroom_range());
        record.bedroom_min = Some(4);
        assert!(record.has_inverted_bedroom_range());
        record.bedroom_max = None;
        assert!(!record.has_inverted_bedroom_range());
    }

    #[test]
    fn payment_plan_stages_in_order() {
        let plan = PaymentPlan {
            booking: 10.0,
            construction: 50.0,
            handover: 40.0,
            post_handover: 0.0,
        };
        let labels: Vec<&str> = plan.stages().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Booking", "Construction", "Handover", "Post Handover"]
        );
        assert!((plan.total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn record_serializes_type_field() {
        let json = serde_json::to_value(make_record()).expect("serialization failed");
        assert_eq!(json["type"], "Apartment");
        assert_eq!(json["id"], "7");
    }
}

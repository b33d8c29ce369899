use offplan_core::{PropertyId, PropertyRecord};

pub(crate) fn record(
    id: &str,
    title: &str,
    developer: &str,
    region: &str,
    price: u64,
) -> PropertyRecord {
    PropertyRecord {
        id: PropertyId::from(id),
        title: title.to_string(),
        region: region.to_string(),
        developer: developer.to_string(),
        property_type: "Apartment".to_string(),
        price,
        bedroom_min: None,
        bedroom_max: None,
        handover_time: None,
        amenities: vec![],
        photos: vec![],
        floor_plan: vec![],
        payment_plan: None,
        description: None,
        city_name: Some("Dubai".to_string()),
        developer_logo: None,
        property_types: vec!["Apartment".to_string()],
        total_units: None,
        min_size: None,
        max_size: None,
        agent: None,
    }
}

/// Six listings across three developers and four regions.
pub(crate) fn sample_catalog() -> Vec<PropertyRecord> {
    let mut a = record("1", "Marina Vista", "Emaar", "Dubai Marina", 2_400_000);
    a.bedroom_min = Some(1);
    a.bedroom_max = Some(3);
    a.handover_time = Some("2027-06-30".to_string());

    let mut b = record("2", "azure Residences", "Sobha", "Business Bay", 1_100_000);
    b.bedroom_min = Some(2);
    b.handover_time = Some("2026-03-31".to_string());
    b.property_type = "Townhouse".to_string();

    let mut c = record("3", "Creek Rise", "Emaar", "Dubai Creek Harbour", 1_100_000);
    c.bedroom_min = Some(0);

    let mut d = record("4", "Palm Crown", "Nakheel", "Palm Jumeirah", 9_800_000);
    d.bedroom_min = Some(4);
    d.bedroom_max = Some(6);
    d.handover_time = Some("2028-01-15".to_string());
    d.property_type = "Villa".to_string();

    let e = record("5", "Bay Gardens", "Sobha", "Business Bay", 750_000);

    let mut f = record("6", "Emerald Heights", "Emaar", "Dubai Marina", 3_200_000);
    f.bedroom_min = Some(3);
    f.handover_time = Some("2026-03-31".to_string());

    vec![a, b, c, d, e, f]
}

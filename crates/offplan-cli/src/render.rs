//! Presentation of query results, summaries, listings and projections.

use std::fmt::Write as _;

use offplan_catalog::{
    bedrooms_label, unit_price_or_property, CatalogSummary, QueryPage, QueryState,
};
use offplan_core::format::{
    format_amount, format_grouped, format_handover, format_percent, format_price, range_label,
};
use offplan_core::{PropertyRecord, UnitRecord};
use offplan_roi::{NavigationParams, RoiInputs, RoiResult};
use serde::Serialize;

const TITLE_WIDTH: usize = 28;

/// Turns engine output into the text a command prints.
pub(crate) trait Renderer {
    fn page(&self, page: &QueryPage<'_>, state: &QueryState) -> anyhow::Result<String>;
    fn summary(&self, summary: &CatalogSummary<'_>) -> anyhow::Result<String>;
    fn property(&self, property: &PropertyRecord) -> anyhow::Result<String>;
    fn projection(
        &self,
        inputs: &RoiInputs,
        result: &RoiResult,
        unit_name: Option<&str>,
    ) -> anyhow::Result<String>;
}

/// Column-aligned plain text for terminals.
pub(crate) struct TextRenderer;

/// Pretty-printed JSON for scripts.
pub(crate) struct JsonRenderer;

/// The detail-view hand-off for one unit of a listing.
pub(crate) fn unit_hand_off(property: &PropertyRecord, unit: &UnitRecord) -> NavigationParams {
    NavigationParams::for_unit(
        property.id.clone(),
        Some(unit),
        unit_price_or_property(property, Some(unit)),
    )
}

fn price_label(price: u64) -> String {
    if price == 0 {
        "Price on request".to_string()
    } else {
        format_price(price)
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

impl Renderer for TextRenderer {
    fn page(&self, page: &QueryPage<'_>, state: &QueryState) -> anyhow::Result<String> {
        let mut out = String::new();

        let Some((first, last)) = page.item_range() else {
            if page.total_matched == 0 {
                writeln!(out, "no listings match the current filters")?;
            } else {
                writeln!(
                    out,
                    "page {} is empty; {} listing(s) over {} page(s)",
                    page.page, page.total_matched, page.total_pages
                )?;
            }
            return Ok(out.trim_end().to_string());
        };

        writeln!(
            out,
            "Showing {first}-{last} of {} listings (page {} of {}, sorted by {})",
            page.total_matched, page.page, page.total_pages, state.sort
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<10}{:<30}{:<18}{:<24}{:<12}{:<11}HANDOVER",
            "ID", "TITLE", "DEVELOPER", "REGION", "PRICE", "BEDS"
        )?;
        for record in &page.items {
            writeln!(
                out,
                "{:<10}{:<30}{:<18}{:<24}{:<12}{:<11}{}",
                record.id.as_str(),
                truncate(&record.title, TITLE_WIDTH),
                truncate(or_dash(&record.developer), 16),
                truncate(or_dash(&record.region), 22),
                price_label(record.price),
                range_label(record.bedroom_min, record.bedroom_max, "BR"),
                format_handover(record.handover_time.as_deref()),
            )?;
        }

        let mut nav = Vec::new();
        if page.has_previous() {
            nav.push(format!("previous: --page {}", page.page - 1));
        }
        if page.has_next() {
            nav.push(format!("next: --page {}", page.page + 1));
        }
        if !nav.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", nav.join("  "))?;
        }
        Ok(out.trim_end().to_string())
    }

    fn summary(&self, summary: &CatalogSummary<'_>) -> anyhow::Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "Listings: {}  Regions: {}  Developers: {}",
            summary.total_properties, summary.region_count, summary.developer_count
        )?;
        writeln!(
            out,
            "Average price: {}",
            summary
                .average_price
                .map_or_else(|| "\u{2014}".to_string(), format_price)
        )?;
        if let Some(range) = summary.price_range {
            writeln!(
                out,
                "Price range: {} - {}",
                format_price(range.min),
                format_price(range.max)
            )?;
        }

        if !summary.top_developers.is_empty() {
            writeln!(out)?;
            writeln!(out, "Top developers")?;
            for dev in &summary.top_developers {
                writeln!(
                    out,
                    "  {:<24}{:>4} listing(s)  avg {}",
                    dev.name,
                    dev.count,
                    format_price(dev.average_price)
                )?;
            }
        }

        if !summary.featured.is_empty() {
            writeln!(out)?;
            writeln!(out, "Featured")?;
            for record in &summary.featured {
                writeln!(
                    out,
                    "  {:<10}{:<30}{:<12}{}",
                    record.id.as_str(),
                    truncate(&record.title, TITLE_WIDTH),
                    price_label(record.price),
                    record.headline_amenities(3).join(", ")
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Regions: {}", summary.regions.join(", "))?;
        writeln!(out, "Types: {}", summary.types.join(", "))?;
        Ok(out.trim_end().to_string())
    }

    fn property(&self, property: &PropertyRecord) -> anyhow::Result<String> {
        let mut out = String::new();
        writeln!(out, "{} ({})", or_dash(&property.title), property.id)?;
        writeln!(out, "Developer: {}", or_dash(&property.developer))?;
        let location = match property.city_name.as_deref() {
            Some(city) if !property.region.is_empty() => format!("{}, {city}", property.region),
            Some(city) => city.to_string(),
            None => or_dash(&property.region).to_string(),
        };
        writeln!(out, "Location: {location}")?;
        let types = if property.property_types.is_empty() {
            or_dash(&property.property_type).to_string()
        } else {
            property.property_types.join(", ")
        };
        writeln!(out, "Type: {types}")?;
        writeln!(out, "Starting price: {}", price_label(property.price))?;
        writeln!(
            out,
            "Bedrooms: {}",
            range_label(property.bedroom_min, property.bedroom_max, "BR")
        )?;
        if property.min_size.is_some() || property.max_size.is_some() {
            writeln!(
                out,
                "Size: {}",
                range_label(property.min_size, property.max_size, "sq ft")
            )?;
        }
        writeln!(
            out,
            "Handover: {}",
            format_handover(property.handover_time.as_deref())
        )?;
        if let Some(units) = property.total_units {
            writeln!(out, "Total units: {units}")?;
        }
        if let Some(photo) = property.cover_photo() {
            writeln!(out, "Cover photo: {photo}")?;
        }

        if let Some(description) = &property.description {
            writeln!(out)?;
            writeln!(out, "{description}")?;
        }

        if !property.amenities.is_empty() {
            writeln!(out)?;
            writeln!(out, "Amenities: {}", property.amenities.join(", "))?;
        }

        if let Some(plan) = &property.payment_plan {
            writeln!(out)?;
            writeln!(out, "Payment plan")?;
            for (stage, percent) in plan.stages() {
                writeln!(out, "  {stage:<16}{percent}%")?;
            }
        }

        if !property.floor_plan.is_empty() {
            writeln!(out)?;
            writeln!(out, "Floor plan")?;
            writeln!(
                out,
                "  {:<10}{:<28}{:<10}{:<12}{:<18}ROI",
                "UNIT", "NAME", "BEDS", "AREA", "PRICE"
            )?;
            for unit in &property.floor_plan {
                let area = unit
                    .area
                    .map_or_else(|| "\u{2014}".to_string(), |a| format!("{a:.0} sq ft"));
                let price = unit
                    .price
                    .map_or_else(|| "Price on request".to_string(), format_grouped);
                writeln!(
                    out,
                    "  {:<10}{:<28}{:<10}{:<12}{:<18}--from-query '{}'",
                    unit.id,
                    truncate(&unit.name, 26),
                    bedrooms_label(&unit.name),
                    area,
                    price,
                    unit_hand_off(property, unit).to_query_string()
                )?;
            }
        }

        if let Some(agent) = &property.agent {
            let contact: Vec<&str> = [&agent.name, &agent.phone, &agent.email]
                .into_iter()
                .filter_map(|v| v.as_deref())
                .collect();
            if !contact.is_empty() {
                writeln!(out)?;
                writeln!(out, "Agent: {}", contact.join(" | "))?;
            }
        }

        Ok(out.trim_end().to_string())
    }

    fn projection(
        &self,
        inputs: &RoiInputs,
        result: &RoiResult,
        unit_name: Option<&str>,
    ) -> anyhow::Result<String> {
        let mut out = String::new();
        if let Some(unit) = unit_name {
            writeln!(out, "Returns for {unit}")?;
            writeln!(out)?;
        }
        writeln!(
            out,
            "Price {}, {}% down, {}% appreciation, {}% yield, {} years, {} service charge",
            format_amount(inputs.property_price),
            inputs.down_payment_percent,
            inputs.annual_appreciation_percent,
            inputs.rental_yield_percent,
            inputs.holding_period_years,
            format_amount(inputs.annual_service_charge)
        )?;
        writeln!(out)?;

        let annualized = result
            .annualized_roi_percent
            .map_or_else(|| "N/A".to_string(), format_percent);
        let rows = [
            ("Initial Investment", format_amount(result.down_payment)),
            ("Future Property Value", format_amount(result.future_value)),
            ("Capital Gain", format_amount(result.capital_gain)),
            ("Net Rental Income", format_amount(result.net_rental_income)),
            ("Total ROI", format_percent(result.total_roi_percent)),
            ("Annualized ROI", annualized),
            (
                "Return Mix",
                format!(
                    "{} capital gain / {} rental",
                    format_percent(result.capital_gain_share_percent),
                    format_percent(result.rental_share_percent)
                ),
            ),
        ];
        for (label, value) in rows {
            writeln!(out, "{label:<24}{value}")?;
        }
        Ok(out.trim_end().to_string())
    }
}

#[derive(Serialize)]
struct UnitHandOff<'a> {
    unit_id: &'a str,
    bedrooms: String,
    roi_query: String,
}

#[derive(Serialize)]
struct PropertyView<'a> {
    property: &'a PropertyRecord,
    unit_hand_offs: Vec<UnitHandOff<'a>>,
}

#[derive(Serialize)]
struct ProjectionView<'a> {
    unit_name: Option<&'a str>,
    inputs: &'a RoiInputs,
    result: &'a RoiResult,
}

impl Renderer for JsonRenderer {
    fn page(&self, page: &QueryPage<'_>, _state: &QueryState) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn summary(&self, summary: &CatalogSummary<'_>) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }

    fn property(&self, property: &PropertyRecord) -> anyhow::Result<String> {
        let view = PropertyView {
            property,
            unit_hand_offs: property
                .floor_plan
                .iter()
                .map(|unit| UnitHandOff {
                    unit_id: &unit.id,
                    bedrooms: bedrooms_label(&unit.name),
                    roi_query: unit_hand_off(property, unit).to_query_string(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }

    fn projection(
        &self,
        inputs: &RoiInputs,
        result: &RoiResult,
        unit_name: Option<&str>,
    ) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&ProjectionView {
            unit_name,
            inputs,
            result,
        })?)
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

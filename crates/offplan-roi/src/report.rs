//! Markdown investment report for a single projection.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use offplan_core::format::{format_amount, format_grouped, format_handover, format_percent};
use offplan_core::PropertyRecord;

use crate::{RoiInputs, RoiResult};

/// Everything the report shows. `property` and `unit_name` are absent when
/// the calculator was opened directly rather than from a listing.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub property: Option<&'a PropertyRecord>,
    pub unit_name: Option<&'a str>,
    pub inputs: &'a RoiInputs,
    pub result: &'a RoiResult,
    pub generated_at: DateTime<Utc>,
}

/// Render the report as Markdown.
#[must_use]
pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, ctx);
    out
}

fn write_report(out: &mut String, ctx: &ReportContext<'_>) -> std::fmt::Result {
    let inputs = ctx.inputs;
    let result = ctx.result;

    writeln!(out, "# Investment Analysis Report")?;
    writeln!(out)?;
    writeln!(
        out,
        "**Generated**: {}",
        ctx.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;

    if let Some(property) = ctx.property {
        let title = if property.title.is_empty() {
            "Property"
        } else {
            property.title.as_str()
        };
        writeln!(out)?;
        writeln!(out, "## {title}")?;
        writeln!(out)?;
        if let Some(unit) = ctx.unit_name {
            writeln!(out, "**Unit Type**: {unit}")?;
        }
        writeln!(out, "**Location**: {}", location(property))?;
        writeln!(out, "**Developer**: {}", or_dash(&property.developer))?;
        writeln!(
            out,
            "**Handover**: {}",
            format_handover(property.handover_time.as_deref())
        )?;
    } else if let Some(unit) = ctx.unit_name {
        writeln!(out, "**Unit Type**: {unit}")?;
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "## Investment Parameters")?;
    writeln!(out)?;
    writeln!(out, "| Parameter | Value |")?;
    writeln!(out, "|-----------|-------|")?;
    writeln!(out, "| Property Price | {} |", grouped(inputs.property_price))?;
    writeln!(out, "| Down Payment | {}% |", inputs.down_payment_percent)?;
    writeln!(
        out,
        "| Annual Appreciation | {}% |",
        inputs.annual_appreciation_percent
    )?;
    writeln!(out, "| Rental Yield | {}% |", inputs.rental_yield_percent)?;
    writeln!(
        out,
        "| Holding Period | {} Years |",
        inputs.holding_period_years
    )?;
    writeln!(
        out,
        "| Annual Service Charge | {} |",
        grouped(inputs.annual_service_charge)
    )?;

    writeln!(out)?;
    writeln!(out, "## Investment Analysis")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|--------|-------|")?;
    writeln!(out, "| Initial Investment | {} |", format_amount(result.down_payment))?;
    writeln!(
        out,
        "| Future Property Value | {} |",
        format_amount(result.future_value)
    )?;
    writeln!(out, "| Capital Gain | {} |", format_amount(result.capital_gain))?;
    writeln!(
        out,
        "| Net Rental Income | {} |",
        format_amount(result.net_rental_income)
    )?;
    writeln!(out, "| Total ROI | {} |", format_percent(result.total_roi_percent))?;
    writeln!(
        out,
        "| Annualized ROI | {} |",
        result
            .annualized_roi_percent
            .map_or_else(|| "N/A".to_string(), format_percent)
    )?;
    writeln!(
        out,
        "| Return Mix | {} capital gain / {} rental |",
        format_percent(result.capital_gain_share_percent),
        format_percent(result.rental_share_percent)
    )?;

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(
        out,
        "Projections assume constant appreciation and rental yield; actual returns will vary."
    )?;
    Ok(())
}

fn location(property: &PropertyRecord) -> String {
    match (property.region.as_str(), property.city_name.as_deref()) {
        ("", None) => "\u{2014}".to_string(),
        ("", Some(city)) => city.to_string(),
        (region, None) => region.to_string(),
        (region, Some(city)) => format!("{region}, {city}"),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grouped(amount: f64) -> String {
    format_grouped(amount.max(0.0).round() as u64)
}

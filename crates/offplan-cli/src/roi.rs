//! ROI command handlers: `roi` and `report`.

use std::path::Path;

use chrono::Utc;
use clap::Args;
use offplan_catalog::{find_property, find_unit, unit_price_or_property};
use offplan_core::PropertyId;
use offplan_roi::{project, render_report, NavigationParams, ReportContext, RoiDraft, RoiInputs};

use crate::catalog::load;
use crate::render::Renderer;

/// Projection inputs. Anything left out takes the calculator default.
#[derive(Debug, Args)]
pub struct RoiArgs {
    /// Property price in AED
    #[arg(long)]
    pub price: Option<f64>,
    /// Down payment, percent of price [default: 20]
    #[arg(long)]
    pub down_payment: Option<f64>,
    /// Yearly appreciation, percent [default: 8]
    #[arg(long)]
    pub appreciation: Option<f64>,
    /// Yearly rent as a percent of price [default: 6]
    #[arg(long)]
    pub rental_yield: Option<f64>,
    /// Holding period in years [default: 5]
    #[arg(long)]
    pub years: Option<f64>,
    /// Yearly service charge in AED [default: 0]
    #[arg(long)]
    pub service_charge: Option<f64>,
    /// Seed from a detail-view hand-off, e.g. `propertyId=101&unitId=u1&price=1250000`
    #[arg(long)]
    pub from_query: Option<String>,
}

impl RoiArgs {
    /// Explicit flags win over whatever `base` already holds.
    pub(crate) fn overlay(&self, base: RoiDraft) -> RoiDraft {
        RoiDraft {
            property_price: self.price.or(base.property_price),
            down_payment_percent: self.down_payment.or(base.down_payment_percent),
            annual_appreciation_percent: self
                .appreciation
                .or(base.annual_appreciation_percent),
            rental_yield_percent: self.rental_yield.or(base.rental_yield_percent),
            holding_period_years: self.years.or(base.holding_period_years),
            annual_service_charge: self.service_charge.or(base.annual_service_charge),
        }
    }

    pub(crate) fn navigation(&self) -> anyhow::Result<Option<NavigationParams>> {
        Ok(self
            .from_query
            .as_deref()
            .map(NavigationParams::parse)
            .transpose()?)
    }

    pub(crate) fn draft(&self) -> anyhow::Result<RoiDraft> {
        let base = self
            .navigation()?
            .map(|nav| nav.to_draft())
            .unwrap_or_default();
        Ok(self.overlay(base))
    }
}

/// Print a projection.
///
/// # Errors
///
/// Returns an error if the hand-off query is malformed, the price is
/// missing, or the inputs are invalid.
pub(crate) fn run_roi(args: &RoiArgs, renderer: &dyn Renderer) -> anyhow::Result<()> {
    let navigation = args.navigation()?;
    let inputs = args.draft()?.resolve()?;
    let result = project(&inputs)?;
    let unit_name = navigation.as_ref().and_then(|n| n.unit_name.as_deref());
    println!("{}", renderer.projection(&inputs, &result, unit_name)?);
    Ok(())
}

/// Print the markdown investment report.
///
/// With `--property`, the listing (and optional `--unit`) supplies the
/// price and the quick-report assumptions; explicit flags still win.
///
/// # Errors
///
/// Returns an error if the listing or unit cannot be found or the inputs
/// are invalid.
pub(crate) fn run_report(
    catalog_path: &Path,
    property_id: Option<&str>,
    unit_id: Option<&str>,
    args: &RoiArgs,
) -> anyhow::Result<()> {
    let catalog = match property_id {
        Some(_) => load(catalog_path)?,
        None => Vec::new(),
    };

    let (property, unit, draft) = if let Some(id) = property_id {
        let property = find_property(&catalog, &PropertyId::from(id))
            .ok_or_else(|| anyhow::anyhow!("listing '{id}' not found in catalog"))?;
        let unit = unit_id
            .map(|uid| {
                find_unit(property, uid)
                    .ok_or_else(|| anyhow::anyhow!("unit '{uid}' not found in listing '{id}'"))
            })
            .transpose()?;
        let price = NavigationParams::for_unit(
            property.id.clone(),
            unit,
            unit_price_or_property(property, unit),
        )
        .effective_price();
        let preset = RoiInputs::unit_preset(aed(price));
        (Some(property), unit, args.overlay(preset.into()))
    } else {
        (None, None, args.draft()?)
    };

    let navigation = args.navigation()?;
    let unit_name = unit.map(|u| u.name.as_str()).or_else(|| {
        navigation
            .as_ref()
            .and_then(|n| n.unit_name.as_deref())
    });

    let inputs = draft.resolve()?;
    let result = project(&inputs)?;
    tracing::info!(
        property = property_id.unwrap_or("-"),
        total_roi_percent = result.total_roi_percent,
        "rendering investment report"
    );

    println!(
        "{}",
        render_report(&ReportContext {
            property,
            unit_name,
            inputs: &inputs,
            result: &result,
            generated_at: Utc::now(),
        })
    );
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn aed(amount: u64) -> f64 {
    amount as f64
}

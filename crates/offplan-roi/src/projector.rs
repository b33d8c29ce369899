use serde::Serialize;

use crate::{RoiError, RoiInputs};

/// Outcome of holding a unit for the full period, in AED and percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiResult {
    /// Cash put in up front; the base every ROI figure is measured against.
    pub down_payment: f64,
    pub future_value: f64,
    pub capital_gain: f64,
    pub annual_rental_income: f64,
    pub total_rental_income: f64,
    pub total_service_charges: f64,
    pub net_rental_income: f64,
    pub total_return: f64,
    pub total_roi_percent: f64,
    /// Compound yearly rate equivalent to `total_roi_percent`.
    ///
    /// `None` when the return loses more than the down payment, where no real
    /// yearly rate exists.
    pub annualized_roi_percent: Option<f64>,
    pub capital_gain_share_percent: f64,
    pub rental_share_percent: f64,
}

impl RoiResult {
    fn is_finite(&self) -> bool {
        [
            self.future_value,
            self.capital_gain,
            self.total_rental_income,
            self.total_service_charges,
            self.net_rental_income,
            self.total_return,
            self.total_roi_percent,
            self.capital_gain_share_percent,
            self.rental_share_percent,
        ]
        .into_iter()
        .chain(self.annualized_roi_percent)
        .all(f64::is_finite)
    }
}

/// Project appreciation and rental returns over the holding period.
///
/// Appreciation compounds yearly on the full price; rent is a flat yield on
/// the purchase price and service charges are deducted every year.
///
/// # Errors
///
/// Returns [`RoiError::Validation`] for negative or non-finite inputs or a
/// non-positive holding period, [`RoiError::ZeroDownPayment`] when there is
/// no down payment to measure the return against, and [`RoiError::Overflow`]
/// when a projected figure is too large to represent.
pub fn project(inputs: &RoiInputs) -> Result<RoiResult, RoiError> {
    inputs.validate()?;

    let price = inputs.property_price;
    let years = inputs.holding_period_years;

    let down_payment = price * inputs.down_payment_percent / 100.0;
    if down_payment == 0.0 {
        return Err(RoiError::ZeroDownPayment);
    }

    let future_value = price * (1.0 + inputs.annual_appreciation_percent / 100.0).powf(years);
    let capital_gain = future_value - price;

    let annual_rental_income = price * inputs.rental_yield_percent / 100.0;
    let total_rental_income = annual_rental_income * years;
    let total_service_charges = inputs.annual_service_charge * years;
    let net_rental_income = total_rental_income - total_service_charges;

    let total_return = capital_gain + net_rental_income;
    let total_roi_percent = total_return / down_payment * 100.0;

    let growth = 1.0 + total_roi_percent / 100.0;
    let annualized_roi_percent =
        (growth >= 0.0).then(|| (growth.powf(1.0 / years) - 1.0) * 100.0);

    let share = |part: f64| {
        if total_return == 0.0 {
            0.0
        } else {
            part / total_return * 100.0
        }
    };

    let result = RoiResult {
        down_payment,
        future_value,
        capital_gain,
        annual_rental_income,
        total_rental_income,
        total_service_charges,
        net_rental_income,
        total_return,
        total_roi_percent,
        annualized_roi_percent,
        capital_gain_share_percent: share(capital_gain),
        rental_share_percent: share(net_rental_income),
    };
    if !result.is_finite() {
        tracing::warn!(price, years, "projection overflowed");
        return Err(RoiError::Overflow);
    }

    tracing::debug!(
        price,
        years,
        total_roi_percent,
        "projected investment return"
    );
    Ok(result)
}

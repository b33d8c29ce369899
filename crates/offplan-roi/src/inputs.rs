use serde::{Deserialize, Serialize};

use crate::RoiError;

pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;
pub const DEFAULT_APPRECIATION_PERCENT: f64 = 8.0;
pub const DEFAULT_RENTAL_YIELD_PERCENT: f64 = 6.0;
pub const DEFAULT_HOLDING_PERIOD_YEARS: f64 = 5.0;
pub const DEFAULT_SERVICE_CHARGE: f64 = 0.0;

/// Annual service charge assumed by the per-unit quick report.
pub const UNIT_PRESET_SERVICE_CHARGE: f64 = 12_000.0;

/// Fully specified projection parameters. Percentages are whole numbers
/// (`20.0` means 20 %); money is AED.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub property_price: f64,
    pub down_payment_percent: f64,
    pub annual_appreciation_percent: f64,
    pub rental_yield_percent: f64,
    pub holding_period_years: f64,
    pub annual_service_charge: f64,
}

impl RoiInputs {
    /// Default assumptions applied to `property_price`.
    #[must_use]
    pub fn with_defaults(property_price: f64) -> Self {
        Self {
            property_price,
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            annual_appreciation_percent: DEFAULT_APPRECIATION_PERCENT,
            rental_yield_percent: DEFAULT_RENTAL_YIELD_PERCENT,
            holding_period_years: DEFAULT_HOLDING_PERIOD_YEARS,
            annual_service_charge: DEFAULT_SERVICE_CHARGE,
        }
    }

    /// The parameters used for a unit's one-click report: the defaults plus
    /// a 12 000 AED yearly service charge.
    #[must_use]
    pub fn unit_preset(property_price: f64) -> Self {
        Self {
            annual_service_charge: UNIT_PRESET_SERVICE_CHARGE,
            ..Self::with_defaults(property_price)
        }
    }

    /// Checks every field is finite and non-negative and the holding period
    /// is positive.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), RoiError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(RoiError::invalid(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(RoiError::invalid(field, format!("must not be negative, got {value}")));
            }
        }
        if self.holding_period_years <= 0.0 {
            return Err(RoiError::invalid(
                "holding_period_years",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("property_price", self.property_price),
            ("down_payment_percent", self.down_payment_percent),
            ("annual_appreciation_percent", self.annual_appreciation_percent),
            ("rental_yield_percent", self.rental_yield_percent),
            ("holding_period_years", self.holding_period_years),
            ("annual_service_charge", self.annual_service_charge),
        ]
    }
}

/// A calculator form that may be partially filled in.
///
/// Blank fields fall back to the defaults on [`RoiDraft::resolve`]; only the
/// property price is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiDraft {
    pub property_price: Option<f64>,
    pub down_payment_percent: Option<f64>,
    pub annual_appreciation_percent: Option<f64>,
    pub rental_yield_percent: Option<f64>,
    pub holding_period_years: Option<f64>,
    pub annual_service_charge: Option<f64>,
}

impl RoiDraft {
    /// Fill blanks with defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::Validation`] if the price is missing or any value
    /// fails [`RoiInputs::validate`].
    pub fn resolve(&self) -> Result<RoiInputs, RoiError> {
        let property_price = self
            .property_price
            .ok_or_else(|| RoiError::invalid("property_price", "is required"))?;

        let inputs = RoiInputs {
            property_price,
            down_payment_percent: self
                .down_payment_percent
                .unwrap_or(DEFAULT_DOWN_PAYMENT_PERCENT),
            annual_appreciation_percent: self
                .annual_appreciation_percent
                .unwrap_or(DEFAULT_APPRECIATION_PERCENT),
            rental_yield_percent: self
                .rental_yield_percent
                .unwrap_or(DEFAULT_RENTAL_YIELD_PERCENT),
            holding_period_years: self
                .holding_period_years
                .unwrap_or(DEFAULT_HOLDING_PERIOD_YEARS),
            annual_service_charge: self
                .annual_service_charge
                .unwrap_or(DEFAULT_SERVICE_CHARGE),
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Build a draft from string form fields.
    ///
    /// Keys may use the form's camelCase ids (`propertyPrice`, `downPayment`,
    /// `annualAppreciation`, `rentalYield`, `holdingPeriod`, `serviceCharge`)
    /// or the field names of [`RoiInputs`]. Blank values stay unset; unknown
    /// keys are ignored. Amounts may carry thousands separators.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::Validation`] when a value is not a number.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RoiError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut draft = Self::default();
        for (key, raw) in pairs {
            let Some((field, slot)) = draft.slot_for(key) else {
                tracing::debug!(key, "ignoring unknown ROI form field");
                continue;
            };
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let value = raw
                .replace(',', "")
                .parse::<f64>()
                .map_err(|_| RoiError::invalid(field, format!("'{raw}' is not a number")))?;
            *slot = Some(value);
        }
        Ok(draft)
    }

    fn slot_for(&mut self, key: &str) -> Option<(&'static str, &mut Option<f64>)> {
        let slot = match key {
            "propertyPrice" | "property_price" | "price" => {
                ("property_price", &mut self.property_price)
            }
            "downPayment" | "down_payment_percent" => {
                ("down_payment_percent", &mut self.down_payment_percent)
            }
            "annualAppreciation" | "annual_appreciation_percent" => (
                "annual_appreciation_percent",
                &mut self.annual_appreciation_percent,
            ),
            "rentalYield" | "rental_yield_percent" => {
                ("rental_yield_percent", &mut self.rental_yield_percent)
            }
            "holdingPeriod" | "holding_period_years" => {
                ("holding_period_years", &mut self.holding_period_years)
            }
            "serviceCharge" | "annual_service_charge" => {
                ("annual_service_charge", &mut self.annual_service_charge)
            }
            _ => return None,
        };
        Some(slot)
    }
}

impl From<RoiInputs> for RoiDraft {
    fn from(inputs: RoiInputs) -> Self {
        Self {
            property_price: Some(inputs.property_price),
            down_payment_percent: Some(inputs.down_payment_percent),
            annual_appreciation_percent: Some(inputs.annual_appreciation_percent),
            rental_yield_percent: Some(inputs.rental_yield_percent),
            holding_period_years: Some(inputs.holding_period_years),
            annual_service_charge: Some(inputs.annual_service_charge),
        }
    }
}

#[cfg(test)]
#[path = "inputs_test.rs"]
mod tests;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RoiError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("down payment is zero, so ROI is undefined")]
    ZeroDownPayment,

    #[error("projection overflows: appreciation compounded over the holding period is too large")]
    Overflow,
}

impl RoiError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

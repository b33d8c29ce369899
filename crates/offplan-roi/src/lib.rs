//! Investment return projections for off-plan units.
//!
//! [`project`] is a pure function of [`RoiInputs`]. The surrounding types
//! cover how inputs arrive: a partially filled form ([`RoiDraft`]) or the
//! query string handed over from a listing's detail view
//! ([`NavigationParams`]).

pub mod error;
pub mod inputs;
pub mod navigation;
pub mod projector;
pub mod report;

pub use error::RoiError;
pub use inputs::{RoiDraft, RoiInputs};
pub use navigation::NavigationParams;
pub use projector::{project, RoiResult};
pub use report::{render_report, ReportContext};

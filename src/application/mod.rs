//! Application services (use cases).
//!
//! These services sequence the report store calls and render results.

pub mod render;
pub mod reporting;

pub use reporting::{HealthReport, ReportingService};

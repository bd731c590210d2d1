//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - In-memory [`ReportStore`](crate::port::ReportStore) that
//!   tracks views and records every call.

pub mod store;

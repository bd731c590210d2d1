//! PostgreSQL adapter for the news database.
//!
//! [`connection`] holds the thin data-access helpers (connect, create and
//! drop views, run a select); [`store`] implements the report port on top
//! of them.

pub mod connection;
pub mod model;
pub mod store;

pub use store::{PostgresReportStore, PostgresSession};

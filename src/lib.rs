//! Newslog - article popularity and error-rate reports for a news site.
//!
//! The crate reads a PostgreSQL database with three externally-owned tables
//! (`articles`, `authors` and the web server `log`), creates a handful of
//! helper views, prints three reports and drops the views again:
//!
//! 1. the three most viewed articles,
//! 2. authors ranked by total article views,
//! 3. days on which more than 1% of requests failed.
//!
//! # Modules
//!
//! - [`domain`] - View definitions, report queries and report rows
//! - [`port`] - The [`port::ReportStore`] seam between driver and database
//! - [`application`] - The reporting driver and text rendering
//! - [`adapter`] - PostgreSQL store (Diesel) and the command-line interface
//! - [`config`] - Configuration loading from TOML and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use newslog::adapter::outbound::postgres::PostgresReportStore;
//! use newslog::application::ReportingService;
//!
//! let service = ReportingService::new(PostgresReportStore::new("postgres:///news"));
//! service.run(&mut std::io::stdout()).unwrap();
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

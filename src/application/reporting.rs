//! Reporting driver.
//!
//! A run has two connection phases. The first creates the helper views and
//! runs the report queries, the second drops the views again. Results are
//! rendered in between, while no connection is open.

use std::io::Write;

use tracing::{debug, info, warn};

use super::render;
use crate::domain::view::{self, ViewDefinition, SOURCE_TABLES, VIEWS};
use crate::domain::{NewsReport, ERROR_DAYS, POPULAR_ARTICLES, POPULAR_AUTHORS};
use crate::error::Result;
use crate::port::{ReportSession, ReportStore};

/// Outcome of a readiness check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    /// Source tables that were not found.
    pub missing_tables: Vec<String>,
    /// Helper views that still exist, e.g. after a crashed run.
    pub leftover_views: Vec<String>,
}

impl HealthReport {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing_tables.is_empty() && self.leftover_views.is_empty()
    }
}

/// Runs the reports against a [`ReportStore`].
pub struct ReportingService<S> {
    store: S,
}

impl<S: ReportStore> ReportingService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the views, run the reports, print them to `out` and drop the
    /// views.
    ///
    /// Nothing is written when the query phase fails. The views are dropped
    /// even if writing the reports fails.
    ///
    /// # Errors
    /// Returns the first connection or query failure. A write failure is
    /// returned after teardown.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<NewsReport> {
        let report = self.collect()?;
        let written = render::write_report(out, &report);
        self.teardown()?;
        written?;
        Ok(report)
    }

    /// Create the helper views and run the three report queries on one
    /// connection.
    ///
    /// If a statement fails, the views created so far are dropped again on
    /// a best-effort basis before the error is returned.
    ///
    /// # Errors
    /// Returns the first connection or query failure.
    pub fn collect(&self) -> Result<NewsReport> {
        let mut session = self.store.connect()?;
        info!(database = %self.store.target(), "Connected to database");

        let mut created = Vec::with_capacity(VIEWS.len());
        match query_reports(&mut session, &mut created) {
            Ok(report) => {
                info!(
                    articles = report.articles.len(),
                    authors = report.authors.len(),
                    error_days = report.error_days.len(),
                    "Reports loaded"
                );
                Ok(report)
            }
            Err(e) => {
                drop_created(&mut session, &created);
                Err(e)
            }
        }
    }

    /// Drop every helper view on a fresh connection, in reverse creation
    /// order.
    ///
    /// # Errors
    /// Fails if a view is missing or the connection cannot be opened.
    pub fn teardown(&self) -> Result<()> {
        let mut session = self.store.connect()?;
        for view in view::drop_order() {
            session.drop_view(view.name)?;
            debug!(view = view.name, "View dropped");
        }
        Ok(())
    }

    /// Drop whichever helper views still exist. Returns the dropped names.
    ///
    /// # Errors
    /// Returns the first connection or query failure.
    pub fn cleanup(&self) -> Result<Vec<&'static str>> {
        let mut session = self.store.connect()?;
        let leftover: Vec<&ViewDefinition> = session
            .existing_views()?
            .iter()
            .filter_map(|name| view::find(name))
            .collect();

        let mut dropped = Vec::new();
        for view in view::drop_order().filter(|view| leftover.contains(view)) {
            session.drop_view(view.name)?;
            info!(view = view.name, "Leftover view dropped");
            dropped.push(view.name);
        }
        Ok(dropped)
    }

    /// Check that the source tables exist and no helper view is left over.
    ///
    /// # Errors
    /// Returns the first connection or query failure.
    pub fn check(&self) -> Result<HealthReport> {
        let mut session = self.store.connect()?;
        let tables = session.existing_tables()?;
        let views = session.existing_views()?;

        let missing_tables = SOURCE_TABLES
            .iter()
            .filter(|table| !tables.iter().any(|t| t == *table))
            .map(ToString::to_string)
            .collect();
        let leftover_views = VIEWS
            .iter()
            .filter(|view| views.iter().any(|v| v == view.name))
            .map(|view| view.name.to_string())
            .collect();

        Ok(HealthReport {
            missing_tables,
            leftover_views,
        })
    }
}

fn query_reports<T: ReportSession>(
    session: &mut T,
    created: &mut Vec<&'static str>,
) -> Result<NewsReport> {
    for view in &VIEWS {
        session.create_view(view.statement)?;
        created.push(view.name);
        debug!(view = view.name, "View created");
    }

    Ok(NewsReport {
        articles: session.load_articles(POPULAR_ARTICLES)?,
        authors: session.load_authors(POPULAR_AUTHORS)?,
        error_days: session.load_error_days(ERROR_DAYS)?,
    })
}

fn drop_created<T: ReportSession>(session: &mut T, created: &[&'static str]) {
    for name in created.iter().rev() {
        if let Err(e) = session.drop_view(name) {
            warn!(view = *name, error = %e, "Failed to drop view after error");
        }
    }
}

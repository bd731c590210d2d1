//! Database port used by the reporting driver.

use crate::domain::{ArticleViews, AuthorViews, ErrorDay};
use crate::error::Result;

/// Opens sessions against the news database.
pub trait ReportStore {
    type Session: ReportSession;

    /// Human-readable connection target for logs and `check` output.
    /// Must not contain credentials.
    fn target(&self) -> String;

    /// Open a session. The connection is released when the session is dropped.
    fn connect(&self) -> Result<Self::Session>;
}

/// A single open connection to the news database.
///
/// Every statement runs on its own; there is no transaction spanning calls.
pub trait ReportSession {
    /// Execute a `CREATE VIEW` statement.
    fn create_view(&mut self, statement: &str) -> Result<()>;

    /// Drop a view by name. Fails if the view does not exist.
    fn drop_view(&mut self, name: &str) -> Result<()>;

    /// Run the popular articles query.
    fn load_articles(&mut self, query: &str) -> Result<Vec<ArticleViews>>;

    /// Run the popular authors query.
    fn load_authors(&mut self, query: &str) -> Result<Vec<AuthorViews>>;

    /// Run the error days query.
    fn load_error_days(&mut self, query: &str) -> Result<Vec<ErrorDay>>;

    /// Names of the views in the current schema.
    fn existing_views(&mut self) -> Result<Vec<String>>;

    /// Names of the base tables in the current schema.
    fn existing_tables(&mut self) -> Result<Vec<String>>;
}

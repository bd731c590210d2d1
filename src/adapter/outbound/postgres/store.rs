//! [`ReportStore`] implementation backed by PostgreSQL.

use diesel::pg::PgConnection;
use tracing::debug;
use url::Url;

use super::connection;
use super::model::{ArticleViewsRow, AuthorViewsRow, ErrorDayRow};
use crate::domain::{ArticleViews, AuthorViews, ErrorDay};
use crate::error::Result;
use crate::port::{ReportSession, ReportStore};

/// Report store for a PostgreSQL database URL or libpq connection string.
pub struct PostgresReportStore {
    database_url: String,
}

impl PostgresReportStore {
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

impl ReportStore for PostgresReportStore {
    type Session = PostgresSession;

    fn target(&self) -> String {
        redact(&self.database_url)
    }

    fn connect(&self) -> Result<PostgresSession> {
        let conn = connection::connect(&self.database_url)?;
        debug!(database = %self.target(), "Database connection opened");
        Ok(PostgresSession { conn })
    }
}

/// An open PostgreSQL connection. Dropping it closes the connection.
pub struct PostgresSession {
    conn: PgConnection,
}

impl ReportSession for PostgresSession {
    fn create_view(&mut self, statement: &str) -> Result<()> {
        connection::create_view(&mut self.conn, statement)
    }

    fn drop_view(&mut self, name: &str) -> Result<()> {
        connection::drop_view(&mut self.conn, name)
    }

    fn load_articles(&mut self, query: &str) -> Result<Vec<ArticleViews>> {
        let rows: Vec<ArticleViewsRow> = connection::select(&mut self.conn, query)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn load_authors(&mut self, query: &str) -> Result<Vec<AuthorViews>> {
        let rows: Vec<AuthorViewsRow> = connection::select(&mut self.conn, query)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn load_error_days(&mut self, query: &str) -> Result<Vec<ErrorDay>> {
        let rows: Vec<ErrorDayRow> = connection::select(&mut self.conn, query)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn existing_views(&mut self) -> Result<Vec<String>> {
        connection::existing_views(&mut self.conn)
    }

    fn existing_tables(&mut self) -> Result<Vec<String>> {
        connection::existing_tables(&mut self.conn)
    }
}

/// Hide the password of a connection URL or keyword/value connection string.
fn redact(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => database_url
            .split_whitespace()
            .map(|pair| {
                if pair.starts_with("password=") {
                    "password=***"
                } else {
                    pair
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

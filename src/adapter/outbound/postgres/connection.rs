//! Database access helpers using Diesel ORM.
//!
//! Every helper runs a single statement on the given connection with the
//! connection's implicit autocommit. No pooling, no retries.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::query_builder::SqlQuery;
use diesel::query_dsl::LoadQuery;

use super::model::NameRow;
use crate::error::Result;

const EXISTING_VIEWS: &str = "SELECT viewname::text AS name
     FROM pg_views
     WHERE schemaname = current_schema()
     ORDER BY viewname";

const EXISTING_TABLES: &str = "SELECT table_name::text AS name
     FROM information_schema.tables
     WHERE table_schema = current_schema() AND table_type = 'BASE TABLE'
     ORDER BY table_name";

/// Open a connection to the given database URL.
///
/// The connection is closed when the returned value is dropped.
///
/// # Errors
/// Returns [`crate::error::Error::Connection`] if the database is
/// unreachable or rejects the credentials.
pub fn connect(database_url: &str) -> Result<PgConnection> {
    Ok(PgConnection::establish(database_url)?)
}

/// Execute a `CREATE VIEW` statement.
///
/// # Errors
/// Returns [`crate::error::Error::Query`] if the statement is invalid or the
/// view already exists.
pub fn create_view(conn: &mut PgConnection, statement: &str) -> Result<()> {
    diesel::sql_query(statement).execute(conn)?;
    Ok(())
}

/// Drop a view by name.
///
/// `name` is interpolated as is; only pass trusted identifiers.
///
/// # Errors
/// Returns [`crate::error::Error::Query`] if the view does not exist.
pub fn drop_view(conn: &mut PgConnection, name: &str) -> Result<()> {
    diesel::sql_query(format!("DROP VIEW {name}")).execute(conn)?;
    Ok(())
}

/// Run a read query and return every row.
///
/// # Errors
/// Returns [`crate::error::Error::Query`] on invalid SQL or when a row does
/// not decode into `T`.
pub fn select<T>(conn: &mut PgConnection, query: &str) -> Result<Vec<T>>
where
    SqlQuery: LoadQuery<'static, PgConnection, T>,
{
    Ok(diesel::sql_query(query).load::<T>(conn)?)
}

/// Names of the views in the current schema.
pub fn existing_views(conn: &mut PgConnection) -> Result<Vec<String>> {
    let rows: Vec<NameRow> = select(conn, EXISTING_VIEWS)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Names of the base tables in the current schema.
pub fn existing_tables(conn: &mut PgConnection) -> Result<Vec<String>> {
    let rows: Vec<NameRow> = select(conn, EXISTING_TABLES)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

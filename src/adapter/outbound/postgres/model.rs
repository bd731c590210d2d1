//! Row types for the raw report queries.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Numeric, Text};
use rust_decimal::Decimal;

use crate::domain::{ArticleViews, AuthorViews, ErrorDay};

/// Row of `slug_views`.
#[derive(QueryableByName, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ArticleViewsRow {
    #[diesel(sql_type = Text)]
    pub slug: String,
    #[diesel(sql_type = BigInt)]
    pub views: i64,
}

/// Row of the per-author totals query; `sum(bigint)` is `numeric`.
#[derive(QueryableByName, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthorViewsRow {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Numeric)]
    pub total: Decimal,
}

/// Row of the error days query.
#[derive(QueryableByName, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ErrorDayRow {
    #[diesel(sql_type = Text)]
    pub day: String,
    #[diesel(sql_type = Numeric)]
    pub percent: Decimal,
}

/// Single `name` column, used for catalog lookups.
#[derive(QueryableByName, Debug, Clone)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NameRow {
    #[diesel(sql_type = Text)]
    pub name: String,
}

impl From<ArticleViewsRow> for ArticleViews {
    fn from(row: ArticleViewsRow) -> Self {
        Self {
            slug: row.slug,
            views: row.views,
        }
    }
}

impl From<AuthorViewsRow> for AuthorViews {
    fn from(row: AuthorViewsRow) -> Self {
        Self {
            name: row.name,
            total: row.total,
        }
    }
}

impl From<ErrorDayRow> for ErrorDay {
    fn from(row: ErrorDayRow) -> Self {
        Self {
            day: row.day,
            percent: row.percent,
        }
    }
}

//! Rows returned by the report queries.

use rust_decimal::Decimal;

/// One row of the popular articles report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleViews {
    pub slug: String,
    pub views: i64,
}

/// One row of the popular authors report.
///
/// `total` is a `numeric` sum in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorViews {
    pub name: String,
    pub total: Decimal,
}

/// A day on which more than 1% of requests failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDay {
    /// Date as formatted by the database.
    pub day: String,
    /// Error percentage, rounded to two decimals.
    pub percent: Decimal,
}

/// Results of the three report queries, held between the query phase and
/// printing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsReport {
    pub articles: Vec<ArticleViews>,
    pub authors: Vec<AuthorViews>,
    pub error_days: Vec<ErrorDay>,
}

//! Helper views created before the reports run and dropped afterwards.
//!
//! The views only exist to keep the report queries readable. They are
//! created in dependency order ([`VIEWS`]) and must be dropped in reverse
//! ([`drop_order`]) since later views select from earlier ones.

/// Tables the helper views read from.
pub const SOURCE_TABLES: [&str; 3] = ["articles", "authors", "log"];

/// A named view and the DDL statement that creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDefinition {
    /// View name. Used verbatim in `DROP VIEW`, so it must never come from user input.
    pub name: &'static str,
    /// `CREATE VIEW` statement.
    pub statement: &'static str,
}

/// Author name for every article slug.
pub const AUTHOR_SLUG: ViewDefinition = ViewDefinition {
    name: "author_slug",
    statement: "CREATE VIEW author_slug AS
                SELECT name, slug
                FROM authors, articles
                WHERE authors.id = articles.author;",
};

/// Hits per existing article, keyed by slug, most viewed first.
///
/// Article paths look like `/article/<slug>`; `substring(path from 10)`
/// strips the 9-character prefix.
pub const SLUG_VIEWS: ViewDefinition = ViewDefinition {
    name: "slug_views",
    statement: "CREATE VIEW slug_views AS
                SELECT substring(path from 10) AS slug, count(path) AS views
                FROM log
                GROUP BY path
                HAVING path IN (select '/article/' || slug from articles)
                ORDER BY views desc;",
};

/// Requests per calendar day.
pub const REQUESTS_PER_DAY: ViewDefinition = ViewDefinition {
    name: "requests_per_day",
    statement: "CREATE VIEW requests_per_day AS
                SELECT time AS date, COUNT(time) AS requests
                FROM (select time::date from log) as bydate
                GROUP BY time;",
};

/// Requests answered with a 4xx or 5xx status per calendar day.
pub const ERRORS_PER_DAY: ViewDefinition = ViewDefinition {
    name: "errors_per_day",
    statement: "CREATE VIEW errors_per_day AS
                SELECT time AS date, COUNT(time) AS errors
                FROM (select time::date from log
                      where status like '4%'
                         or status like '5%') as bydate
                GROUP BY time;",
};

/// Error percentage per day, rounded to two decimals.
pub const ERRORS_PERCENT: ViewDefinition = ViewDefinition {
    name: "errors_percent",
    statement: "CREATE VIEW errors_percent AS
                SELECT errors_per_day.date,
                       round(errors*100/requests::numeric, 2) AS percent
                FROM errors_per_day, requests_per_day
                WHERE errors_per_day.date = requests_per_day.date;",
};

/// All helper views in creation order.
pub static VIEWS: [ViewDefinition; 5] = [
    AUTHOR_SLUG,
    SLUG_VIEWS,
    REQUESTS_PER_DAY,
    ERRORS_PER_DAY,
    ERRORS_PERCENT,
];

/// Helper views in the order they have to be dropped.
pub fn drop_order() -> impl Iterator<Item = &'static ViewDefinition> {
    VIEWS.iter().rev()
}

/// Look up a helper view by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ViewDefinition> {
    VIEWS.iter().find(|view| view.name == name)
}

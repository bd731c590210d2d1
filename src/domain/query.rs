//! Report queries. They read from the helper views in [`super::view`].

/// The three most viewed articles.
pub const POPULAR_ARTICLES: &str = "SELECT * FROM slug_views LIMIT 3;";

/// Total article views per author, most viewed first.
pub const POPULAR_AUTHORS: &str = "SELECT name, sum(views) AS total
                  FROM author_slug
                  JOIN slug_views ON slug_views.slug = author_slug.slug
                  GROUP BY name
                  ORDER BY total DESC;";

/// Days on which more than 1% of requests failed, worst first.
///
/// The date is rendered by the database, e.g. `Monday July 01, 2024`; only the day and month names drop their padding.
pub const ERROR_DAYS: &str = "SELECT TO_CHAR(date, 'FMDay FMMonth DD, YYYY') AS day, percent
                 FROM errors_percent
                 WHERE percent > 1
                 ORDER BY percent DESC;";

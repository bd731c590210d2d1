//! End-to-end tests against a real PostgreSQL server.
//!
//! Gated behind the `integration-tests` feature and ignored by default. They
//! drop and recreate the `articles`, `authors` and `log` tables, so point
//! them at a throwaway database:
//!
//! ```bash
//! NEWSLOG_TEST_DATABASE_URL=postgres://localhost/newslog_test \
//!     cargo test --features integration-tests -- --ignored
//! ```

#![cfg(feature = "integration-tests")]

use std::sync::Mutex;

use diesel::connection::SimpleConnection;
use newslog::adapter::outbound::postgres::{connection, PostgresReportStore};
use newslog::application::ReportingService;
use newslog::error::Error;
use newslog::port::{ReportSession, ReportStore};
use rust_decimal_macros::dec;

static DATABASE: Mutex<()> = Mutex::new(());

const SCHEMA: &str = r"
DROP VIEW IF EXISTS errors_percent, errors_per_day, requests_per_day, slug_views, author_slug;
DROP TABLE IF EXISTS log, articles, authors;

CREATE TABLE authors (
    name text NOT NULL,
    bio text,
    id serial PRIMARY KEY
);

CREATE TABLE articles (
    author integer NOT NULL REFERENCES authors(id),
    title text NOT NULL,
    slug text UNIQUE NOT NULL,
    lead text,
    body text,
    time timestamp with time zone DEFAULT now(),
    id serial PRIMARY KEY
);

CREATE TABLE log (
    path text,
    ip inet,
    method text,
    status text,
    time timestamp with time zone DEFAULT now(),
    id serial PRIMARY KEY
);
";

fn database_url() -> String {
    std::env::var("NEWSLOG_TEST_DATABASE_URL")
        .expect("NEWSLOG_TEST_DATABASE_URL must point at a throwaway database")
}

fn seed(sql: &str) {
    let mut conn = connection::connect(&database_url()).expect("connect for seeding");
    conn.batch_execute(SCHEMA).expect("create schema");
    conn.batch_execute(sql).expect("seed rows");
}

fn hit(path: &str, status: &str, time: &str) -> String {
    format!(
        "INSERT INTO log (path, ip, method, status, time) \
         VALUES ('{path}', '127.0.0.1', 'GET', '{status}', '{time}');\n"
    )
}

fn alice_with_one_error() -> String {
    let mut sql = String::from(
        "INSERT INTO authors (name) VALUES ('Alice');
         INSERT INTO articles (author, title, slug) VALUES (1, 'My article', 'my-article');\n",
    );
    for _ in 0..5 {
        sql.push_str(&hit("/article/my-article", "200 OK", "2024-07-01 12:00:00"));
    }
    sql.push_str(&hit("/missing", "404 NOT FOUND", "2024-07-01 12:30:00"));
    sql
}

fn service() -> ReportingService<PostgresReportStore> {
    ReportingService::new(PostgresReportStore::new(database_url()))
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn reports_single_author_scenario() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    seed(&alice_with_one_error());

    let mut out = Vec::new();
    let report = service().run(&mut out).expect("run should succeed");

    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].slug, "my-article");
    assert_eq!(report.articles[0].views, 5);
    assert_eq!(report.authors.len(), 1);
    assert_eq!(report.authors[0].name, "Alice");
    assert_eq!(report.authors[0].total, dec!(5));
    assert_eq!(report.error_days.len(), 1);
    assert_eq!(report.error_days[0].day, "Monday July 01, 2024");
    assert_eq!(report.error_days[0].percent.to_string(), "16.67");

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1: my-article --- 5 views\n"));
    assert!(text.contains("1: Alice --- 5 views\n"));
    assert!(text.contains("1: Monday July 01, 2024 --- 16.67% errors\n"));

    let mut session = service().store().connect().expect("connect");
    assert!(session.existing_views().expect("list views").is_empty());
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn slug_views_counts_only_existing_articles() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let mut sql = String::from(
        "INSERT INTO authors (name) VALUES ('Alice'), ('Bob');
         INSERT INTO articles (author, title, slug) VALUES
             (1, 'One', 'one'), (1, 'Two', 'two'), (2, 'Three', 'three'), (2, 'Four', 'four');\n",
    );
    for (path, count) in [
        ("/article/one", 2),
        ("/article/two", 7),
        ("/article/three", 4),
        ("/article/four", 1),
        ("/article/unknown", 50),
        ("/", 30),
    ] {
        for _ in 0..count {
            sql.push_str(&hit(path, "200 OK", "2024-07-02 08:00:00"));
        }
    }
    seed(&sql);

    let report = service().run(&mut Vec::new()).expect("run should succeed");

    let articles: Vec<_> = report
        .articles
        .iter()
        .map(|a| (a.slug.as_str(), a.views))
        .collect();
    assert_eq!(articles, [("two", 7), ("three", 4), ("one", 2)]);

    let authors: Vec<_> = report
        .authors
        .iter()
        .map(|a| (a.name.as_str(), a.total))
        .collect();
    assert_eq!(authors, [("Alice", dec!(9)), ("Bob", dec!(5))]);
    assert!(report.error_days.is_empty());
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn error_days_keep_only_days_above_one_percent() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    let mut sql = String::new();
    // 2024-07-03: 1 error in 200 requests (0.5%), 2024-07-04: 3 in 100 (3%),
    // 2024-07-05: 1 in 50 (2%).
    for (day, ok, errors) in [("2024-07-03", 199, 1), ("2024-07-04", 97, 3), ("2024-07-05", 49, 1)] {
        for _ in 0..ok {
            sql.push_str(&hit("/", "200 OK", &format!("{day} 12:00:00")));
        }
        for _ in 0..errors {
            sql.push_str(&hit("/", "500 INTERNAL ERROR", &format!("{day} 13:00:00")));
        }
    }
    seed(&sql);

    let report = service().run(&mut Vec::new()).expect("run should succeed");

    let days: Vec<_> = report
        .error_days
        .iter()
        .map(|d| (d.day.as_str(), d.percent.to_string()))
        .collect();
    assert_eq!(
        days,
        [
            ("Thursday July 04, 2024", "3.00".to_string()),
            ("Friday July 05, 2024", "2.00".to_string()),
        ]
    );
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn second_run_prints_identical_reports() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    seed(&alice_with_one_error());

    let mut first = Vec::new();
    let mut second = Vec::new();
    service().run(&mut first).expect("first run");
    service().run(&mut second).expect("second run");

    assert_eq!(first, second);
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn orphaned_view_blocks_report_until_cleanup() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    seed(&alice_with_one_error());

    let service = service();
    {
        let mut session = service.store().connect().expect("connect");
        session
            .create_view(newslog::domain::view::AUTHOR_SLUG.statement)
            .expect("create orphan");
    }

    let result = service.run(&mut Vec::new());
    assert!(matches!(result, Err(Error::Query(_))));

    assert_eq!(service.cleanup().expect("cleanup"), ["author_slug"]);
    service.run(&mut Vec::new()).expect("run after cleanup");
}

#[test]
#[ignore = "requires a PostgreSQL server"]
fn check_reports_missing_tables() {
    let _guard = DATABASE.lock().unwrap_or_else(|e| e.into_inner());
    seed("DROP TABLE log;");

    let health = service().check().expect("check");
    assert_eq!(health.missing_tables, ["log"]);
    assert!(health.leftover_views.is_empty());
}

//! Status lines printed by `check` and `cleanup`.
//!
//! Report text itself is rendered by [`crate::application::render`].

use crate::application::HealthReport;
use crate::domain::{SOURCE_TABLES, VIEWS};

/// Print the database the command talks to.
pub fn target(database: &str) {
    println!("Database: {database}");
}

/// Print one line per source table, flagging the missing ones.
pub fn tables(health: &HealthReport) {
    for table in SOURCE_TABLES {
        let missing = health.missing_tables.iter().any(|t| t == table);
        println!("{} table {table}", mark(!missing));
    }
}

/// Print one line per helper view still present in the database.
pub fn leftover_views(health: &HealthReport) {
    for view in VIEWS
        .iter()
        .filter(|view| health.leftover_views.iter().any(|v| v == view.name))
    {
        println!(
            "{} view {} left over, run `newslog cleanup` before reporting",
            mark(false),
            view.name
        );
    }
}

/// Print the views dropped by `cleanup`.
pub fn dropped_views(dropped: &[&str]) {
    if dropped.is_empty() {
        println!("No leftover views");
    }
    for view in dropped {
        println!("{} dropped view {view}", mark(true));
    }
}

/// Print a one-line verdict.
pub fn status(ok: bool, message: &str) {
    println!("{} {message}", mark(ok));
}

/// Print a fatal error to stderr.
pub fn error(message: &str) {
    eprintln!("{} {message}", mark(false));
}

fn mark(ok: bool) -> char {
    if ok {
        '✓'
    } else {
        '✗'
    }
}

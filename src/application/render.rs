//! Plain-text rendering of the three reports.

use std::io::{self, Write};

use crate::domain::NewsReport;

const ARTICLES_TITLE: &str = "Here are the most popular articles by views";
const AUTHORS_TITLE: &str = "Here are the most popular authors";
const ERROR_DAYS_TITLE: &str = "Here is the days on which more than 1% of requests lead to errors";

/// Write the three numbered reports.
///
/// Each section opens with two blank lines and is followed by one; the
/// output ends with three newlines.
pub fn write_report<W: Write>(out: &mut W, report: &NewsReport) -> io::Result<()> {
    section(out, ARTICLES_TITLE)?;
    for (index, article) in report.articles.iter().enumerate() {
        writeln!(
            out,
            "{}: {} --- {} views",
            index + 1,
            article.slug,
            article.views
        )?;
    }

    section(out, AUTHORS_TITLE)?;
    for (index, author) in report.authors.iter().enumerate() {
        writeln!(out, "{}: {} --- {} views", index + 1, author.name, author.total)?;
    }

    section(out, ERROR_DAYS_TITLE)?;
    for (index, day) in report.error_days.iter().enumerate() {
        writeln!(out, "{}: {} --- {}% errors", index + 1, day.day, day.percent)?;
    }

    write!(out, "\n\n\n")?;
    out.flush()
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    write!(out, "\n\n{title}\n\n")
}

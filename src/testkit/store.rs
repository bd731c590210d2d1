//! In-memory report store for driver tests.

use std::cell::RefCell;
use std::rc::Rc;

use diesel::result::DatabaseErrorKind;

use crate::domain::{ArticleViews, AuthorViews, ErrorDay, NewsReport};
use crate::error::{Error, Result};
use crate::port::{ReportSession, ReportStore};

/// A call observed by [`MemoryReportStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Connect,
    Disconnect,
    CreateView(String),
    DropView(String),
    Select(String),
}

#[derive(Debug, Default)]
struct MemoryState {
    views: Vec<String>,
    tables: Vec<String>,
    report: NewsReport,
    events: Vec<StoreEvent>,
    refuse_connections: bool,
    fail_on: Option<String>,
}

/// Report store keeping views in memory and returning canned rows.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryReportStore {
    /// Store with the three source tables and the given query results.
    #[must_use]
    pub fn with_report(report: NewsReport) -> Self {
        let store = Self::default();
        {
            let mut state = store.state.borrow_mut();
            state.report = report;
            state.tables = vec!["articles".into(), "authors".into(), "log".into()];
        }
        store
    }

    /// Replace the tables reported by `existing_tables`.
    pub fn set_tables(&self, tables: &[&str]) {
        self.state.borrow_mut().tables = tables.iter().map(ToString::to_string).collect();
    }

    /// Pretend a view already exists, e.g. one orphaned by a crashed run.
    pub fn add_view(&self, name: &str) {
        self.state.borrow_mut().views.push(name.to_string());
    }

    /// Make every `connect` fail.
    pub fn refuse_connections(&self) {
        self.state.borrow_mut().refuse_connections = true;
    }

    /// Fail any statement whose view name or query text contains `needle`.
    pub fn fail_on(&self, needle: &str) {
        self.state.borrow_mut().fail_on = Some(needle.to_string());
    }

    /// Views currently present.
    #[must_use]
    pub fn views(&self) -> Vec<String> {
        self.state.borrow().views.clone()
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<StoreEvent> {
        self.state.borrow().events.clone()
    }

    /// Forget recorded calls.
    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }
}

impl ReportStore for MemoryReportStore {
    type Session = MemorySession;

    fn target(&self) -> String {
        "memory".to_string()
    }

    fn connect(&self) -> Result<MemorySession> {
        let mut state = self.state.borrow_mut();
        if state.refuse_connections {
            return Err(Error::Connection(diesel::ConnectionError::BadConnection(
                "connection refused".into(),
            )));
        }
        state.events.push(StoreEvent::Connect);
        Ok(MemorySession {
            state: Rc::clone(&self.state),
        })
    }
}

/// Session handed out by [`MemoryReportStore`]. Records a disconnect on drop.
#[derive(Debug)]
pub struct MemorySession {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySession {
    fn check(&self, subject: &str) -> Result<()> {
        match &self.state.borrow().fail_on {
            Some(needle) if subject.contains(needle.as_str()) => {
                Err(query_error(format!("injected failure on {needle}")))
            }
            _ => Ok(()),
        }
    }

    fn require_views(&self, names: &[&str]) -> Result<()> {
        let state = self.state.borrow();
        match names.iter().find(|name| !state.views.iter().any(|v| v == *name)) {
            Some(missing) => Err(query_error(format!(
                "relation \"{missing}\" does not exist"
            ))),
            None => Ok(()),
        }
    }

    fn select<T: Clone>(
        &mut self,
        query: &str,
        needs: &[&str],
        rows: impl Fn(&NewsReport) -> Vec<T>,
    ) -> Result<Vec<T>> {
        self.state
            .borrow_mut()
            .events
            .push(StoreEvent::Select(query.to_string()));
        self.check(query)?;
        self.require_views(needs)?;
        Ok(rows(&self.state.borrow().report))
    }
}

impl ReportSession for MemorySession {
    fn create_view(&mut self, statement: &str) -> Result<()> {
        let name = view_name(statement)
            .ok_or_else(|| query_error(format!("syntax error in {statement:?}")))?
            .to_string();
        self.state
            .borrow_mut()
            .events
            .push(StoreEvent::CreateView(name.clone()));
        self.check(&name)?;

        let mut state = self.state.borrow_mut();
        if state.views.contains(&name) {
            return Err(query_error(format!("relation \"{name}\" already exists")));
        }
        state.views.push(name);
        Ok(())
    }

    fn drop_view(&mut self, name: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .events
            .push(StoreEvent::DropView(name.to_string()));
        self.check(name)?;

        let mut state = self.state.borrow_mut();
        match state.views.iter().position(|v| v == name) {
            Some(index) => {
                state.views.remove(index);
                Ok(())
            }
            None => Err(query_error(format!("view \"{name}\" does not exist"))),
        }
    }

    fn load_articles(&mut self, query: &str) -> Result<Vec<ArticleViews>> {
        self.select(query, &["slug_views"], |report| report.articles.clone())
    }

    fn load_authors(&mut self, query: &str) -> Result<Vec<AuthorViews>> {
        self.select(query, &["author_slug", "slug_views"], |report| {
            report.authors.clone()
        })
    }

    fn load_error_days(&mut self, query: &str) -> Result<Vec<ErrorDay>> {
        self.select(query, &["errors_percent"], |report| {
            report.error_days.clone()
        })
    }

    fn existing_views(&mut self) -> Result<Vec<String>> {
        Ok(self.state.borrow().views.clone())
    }

    fn existing_tables(&mut self) -> Result<Vec<String>> {
        Ok(self.state.borrow().tables.clone())
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.state.borrow_mut().events.push(StoreEvent::Disconnect);
    }
}

fn view_name(statement: &str) -> Option<&str> {
    let rest = statement.trim_start().strip_prefix("CREATE VIEW ")?;
    rest.split_whitespace().next()
}

fn query_error(message: String) -> Error {
    Error::Query(diesel::result::Error::DatabaseError(
        DatabaseErrorKind::Unknown,
        Box::new(message),
    ))
}

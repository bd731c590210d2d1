//! Report domain: the helper views, the report queries and the rows they yield.

pub mod query;
pub mod report;
pub mod view;

pub use query::{ERROR_DAYS, POPULAR_ARTICLES, POPULAR_AUTHORS};
pub use report::{ArticleViews, AuthorViews, ErrorDay, NewsReport};
pub use view::{ViewDefinition, SOURCE_TABLES, VIEWS};

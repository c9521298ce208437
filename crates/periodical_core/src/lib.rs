//! Core domain logic for the periodical catalog.
//! Authors write articles, articles appear in magazines, and every
//! relationship is derived from the catalog registries at query time.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::article::{Article, ArticleId, ArticleRecord, ARTICLE_TITLE_CHARS};
pub use model::author::{Author, AuthorId, AuthorRecord};
pub use model::magazine::{Magazine, MagazineId, MagazineRecord, MAGAZINE_NAME_CHARS};
pub use model::validation::FieldRejection;
pub use repo::catalog::Catalog;
pub use repo::registry::Registry;
pub use service::magazine_queries::CONTRIBUTOR_THRESHOLD;

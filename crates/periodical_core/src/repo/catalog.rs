//! Catalog: the owned home of the article and magazine registries.
//!
//! # Responsibility
//! - Record every constructed article and magazine in creation order.
//! - Serve as the single source of truth for relationship queries.
//!
//! # Invariants
//! - Registration happens only from entity constructors.
//! - Single-threaded: handles are `Rc`-based and the catalog is `!Sync`.

use crate::model::article::Article;
use crate::model::magazine::Magazine;
use crate::repo::registry::Registry;
use log::{info, trace};

/// Owner of the article and magazine registries.
#[derive(Debug, Default)]
pub struct Catalog {
    articles: Registry<Article>,
    magazines: Registry<Magazine>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registered article, in creation order.
    pub fn articles(&self) -> Vec<Article> {
        self.articles.all()
    }

    /// Every registered magazine, in creation order.
    pub fn magazines(&self) -> Vec<Magazine> {
        self.magazines.all()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Empties both registries. Entity handles stay valid but become
    /// unreachable through queries.
    pub fn clear(&self) {
        info!(
            "event=catalog_clear module=repo status=ok articles={} magazines={}",
            self.articles.len(),
            self.magazines.len()
        );
        self.articles.clear();
        self.magazines.clear();
    }

    pub(crate) fn register_article(&self, article: Article) {
        trace!(
            "event=article_registered module=repo status=ok id={}",
            article.id()
        );
        self.articles.add(article);
    }

    pub(crate) fn register_magazine(&self, magazine: Magazine) {
        trace!(
            "event=magazine_registered module=repo status=ok id={}",
            magazine.id()
        );
        self.magazines.add(magazine);
    }
}

//! Author-side relationship queries.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;
use crate::service::dedup_first_seen;
use log::debug;

impl Author {
    /// Articles written by this author, in creation order.
    pub fn articles(&self, catalog: &Catalog) -> Vec<Article> {
        catalog
            .articles()
            .into_iter()
            .filter(|article| article.is_by(self))
            .collect()
    }

    /// Distinct magazines this author has written for, first occurrence first.
    pub fn magazines(&self, catalog: &Catalog) -> Vec<Magazine> {
        dedup_first_seen(
            self.articles(catalog).iter().filter_map(Article::magazine),
            Magazine::id,
        )
    }

    /// Creates and registers an article by this author.
    ///
    /// Returns `None` without registering anything when `magazine` is absent.
    /// An out-of-range `title` still yields an article, with the title unset.
    pub fn add_article(
        &self,
        catalog: &Catalog,
        magazine: Option<&Magazine>,
        title: impl Into<String>,
    ) -> Option<Article> {
        let Some(magazine) = magazine else {
            debug!(
                "event=add_article module=service status=ignored author={} reason=missing_magazine",
                self.id()
            );
            return None;
        };
        Some(Article::new(catalog, Some(self), Some(magazine), title))
    }

    /// Distinct categories of this author's magazines, first occurrence first.
    ///
    /// `None` when the author has no articles, or when none of their
    /// magazines carries a category.
    pub fn topic_areas(&self, catalog: &Catalog) -> Option<Vec<String>> {
        let articles = self.articles(catalog);
        if articles.is_empty() {
            return None;
        }

        let categories = dedup_first_seen(
            articles
                .iter()
                .filter_map(Article::magazine)
                .filter_map(|magazine| magazine.category()),
            String::clone,
        );
        if categories.is_empty() {
            return None;
        }
        Some(categories)
    }
}

//! Magazine-side relationship queries and the catalog-wide top publisher.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::Magazine;
use crate::repo::catalog::Catalog;
use crate::service::dedup_first_seen;
use std::collections::HashMap;

/// An author must write strictly more than this many articles for one
/// magazine to count as a contributing author.
pub const CONTRIBUTOR_THRESHOLD: usize = 2;

impl Magazine {
    /// Articles published in this magazine, in creation order.
    pub fn articles(&self, catalog: &Catalog) -> Vec<Article> {
        catalog
            .articles()
            .into_iter()
            .filter(|article| article.is_in(self))
            .collect()
    }

    /// Distinct authors who wrote for this magazine, first occurrence first.
    pub fn contributors(&self, catalog: &Catalog) -> Vec<Author> {
        dedup_first_seen(
            self.articles(catalog).iter().filter_map(Article::author),
            Author::id,
        )
    }

    /// Titles of this magazine's articles in creation order.
    ///
    /// `None` when the magazine has no articles. Each entry lines up with
    /// [`Magazine::articles`]; an unset title is an inner `None`.
    pub fn article_titles(&self, catalog: &Catalog) -> Option<Vec<Option<String>>> {
        let articles = self.articles(catalog);
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .iter()
                .map(|article| article.title().map(str::to_string))
                .collect(),
        )
    }

    /// Authors with more than [`CONTRIBUTOR_THRESHOLD`] articles in this
    /// magazine, ordered by their first article here.
    pub fn contributing_authors(&self, catalog: &Catalog) -> Option<Vec<Author>> {
        let mut tallies: Vec<(Author, usize)> = Vec::new();
        let mut slots: HashMap<AuthorId, usize> = HashMap::new();

        for author in self.articles(catalog).iter().filter_map(Article::author) {
            match slots.get(&author.id()) {
                Some(&slot) => tallies[slot].1 += 1,
                None => {
                    slots.insert(author.id(), tallies.len());
                    tallies.push((author, 1));
                }
            }
        }

        let authors: Vec<Author> = tallies
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTOR_THRESHOLD)
            .map(|(author, _)| author)
            .collect();
        if authors.is_empty() {
            return None;
        }
        Some(authors)
    }

    /// Magazine with the most articles in the catalog.
    ///
    /// Ties go to the earliest registered magazine. `None` when the catalog
    /// holds no articles or no magazines.
    pub fn top_publisher(catalog: &Catalog) -> Option<Magazine> {
        let articles = catalog.articles();
        let magazines = catalog.magazines();
        if articles.is_empty() || magazines.is_empty() {
            return None;
        }

        let mut top: Option<(Magazine, usize)> = None;
        for magazine in magazines {
            let count = articles
                .iter()
                .filter(|article| article.is_in(&magazine))
                .count();
            let leads = match &top {
                Some((_, best)) => count > *best,
                None => true,
            };
            if leads {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }
}

//! Article entity: the join record between an author and a magazine.
//!
//! # Responsibility
//! - Hold author/magazine references and the title.
//! - Register every constructed article with the owning catalog.
//!
//! # Invariants
//! - Construction never fails. Missing references or an out-of-range title
//!   leave the matching field unset and the article is still registered.
//! - `title` is 5..=50 characters and accepts exactly one successful assignment.
//! - `author` and `magazine` may be reassigned to another present reference.

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{accept, check_char_range, check_present, check_unset};
use crate::repo::catalog::Catalog;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::rc::Rc;
use uuid::Uuid;

pub type ArticleId = Uuid;

/// Allowed title length in characters.
pub const ARTICLE_TITLE_CHARS: RangeInclusive<usize> = 5..=50;

#[derive(Debug)]
struct ArticleState {
    id: ArticleId,
    author: RefCell<Option<Author>>,
    magazine: RefCell<Option<Magazine>>,
    title: OnceCell<String>,
}

/// Shared article handle. Clones refer to the same article.
#[derive(Debug, Clone)]
pub struct Article {
    state: Rc<ArticleState>,
}

/// Serializable read model of an article. References are stored by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub author_id: Option<AuthorId>,
    pub magazine_id: Option<MagazineId>,
    pub title: Option<String>,
}

impl Article {
    /// Creates an article and appends it to the catalog's article registry.
    ///
    /// `None` for `author` or `magazine` leaves that reference unset.
    pub fn new(
        catalog: &Catalog,
        author: Option<&Author>,
        magazine: Option<&Magazine>,
        title: impl Into<String>,
    ) -> Self {
        let article = Self {
            state: Rc::new(ArticleState {
                id: Uuid::new_v4(),
                author: RefCell::new(None),
                magazine: RefCell::new(None),
                title: OnceCell::new(),
            }),
        };
        article.set_author(author);
        article.set_magazine(magazine);
        article.set_title(title);
        catalog.register_article(article.clone());
        article
    }

    pub fn id(&self) -> ArticleId {
        self.state.id
    }

    pub fn author(&self) -> Option<Author> {
        self.state.author.borrow().clone()
    }

    pub fn magazine(&self) -> Option<Magazine> {
        self.state.magazine.borrow().clone()
    }

    pub fn title(&self) -> Option<&str> {
        self.state.title.get().map(String::as_str)
    }

    /// Points the article at `author`. `None` is ignored.
    pub fn set_author(&self, author: Option<&Author>) -> bool {
        if !accept("article", check_present("article.author", author)) {
            return false;
        }
        *self.state.author.borrow_mut() = author.cloned();
        true
    }

    /// Points the article at `magazine`. `None` is ignored.
    pub fn set_magazine(&self, magazine: Option<&Magazine>) -> bool {
        if !accept("article", check_present("article.magazine", magazine)) {
            return false;
        }
        *self.state.magazine.borrow_mut() = magazine.cloned();
        true
    }

    /// Assigns the title once, if it is 5..=50 characters long.
    pub fn set_title(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let checked = check_unset("article.title", self.state.title.get())
            .and_then(|()| check_char_range("article.title", &value, &ARTICLE_TITLE_CHARS));
        if !accept("article", checked) {
            return false;
        }
        self.state.title.set(value).is_ok()
    }

    /// Whether `author` is this article's author, by identity.
    pub fn is_by(&self, author: &Author) -> bool {
        self.state.author.borrow().as_ref() == Some(author)
    }

    /// Whether `magazine` is this article's magazine, by identity.
    pub fn is_in(&self, magazine: &Magazine) -> bool {
        self.state.magazine.borrow().as_ref() == Some(magazine)
    }

    pub fn record(&self) -> ArticleRecord {
        ArticleRecord {
            id: self.id(),
            author_id: self.state.author.borrow().as_ref().map(Author::id),
            magazine_id: self.state.magazine.borrow().as_ref().map(Magazine::id),
            title: self.title().map(str::to_string),
        }
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}

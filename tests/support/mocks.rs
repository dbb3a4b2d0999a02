// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use domain_outcomes::{DomainError, LookupOutcome, Outcome, SearchOutcome};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("title must not be empty")]
pub struct TitleEmpty;
impl DomainError for TitleEmpty {}

#[derive(Debug, Error)]
#[error("title '{0}' is already in use")]
pub struct TitleTaken(pub String);
impl DomainError for TitleTaken {}

#[derive(Debug, Error)]
#[error("search term must not be empty")]
pub struct EmptySearchTerm;
impl DomainError for EmptySearchTerm {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u64,
    pub title: String,
}

#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn insert(&self, title: String) -> Outcome<Article>;
    async fn remove(&self, id: u64) -> LookupOutcome<Article>;
    async fn rename(&self, id: u64, title: String) -> LookupOutcome<Article>;
    async fn search(&self, term: &str) -> SearchOutcome<Vec<Article>>;
}

#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<Catalog>,
}

#[derive(Default)]
struct Catalog {
    next_id: u64,
    articles: HashMap<u64, Article>,
}

impl Catalog {
    fn title_in_use(&self, title: &str) -> bool {
        self.articles.values().any(|a| a.title == title)
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, title: String) -> Outcome<Article> {
        let mut catalog = self.inner.lock().unwrap();
        if catalog.title_in_use(&title) {
            return Outcome::error(TitleTaken(title));
        }
        catalog.next_id += 1;
        let article = Article {
            id: catalog.next_id,
            title,
        };
        catalog.articles.insert(article.id, article.clone());
        Outcome::success(article)
    }

    async fn remove(&self, id: u64) -> LookupOutcome<Article> {
        let mut catalog = self.inner.lock().unwrap();
        catalog
            .articles
            .remove(&id)
            .map_or_else(LookupOutcome::not_found, LookupOutcome::success)
    }

    async fn rename(&self, id: u64, title: String) -> LookupOutcome<Article> {
        let mut catalog = self.inner.lock().unwrap();
        if !catalog.articles.contains_key(&id) {
            return LookupOutcome::not_found();
        }
        if catalog.title_in_use(&title) {
            return LookupOutcome::error(TitleTaken(title));
        }
        let article = catalog.articles.get_mut(&id).unwrap();
        article.title = title;
        LookupOutcome::success(article.clone())
    }

    async fn search(&self, term: &str) -> SearchOutcome<Vec<Article>> {
        if term.trim().is_empty() {
            return SearchOutcome::bad_request(EmptySearchTerm);
        }
        let catalog = self.inner.lock().unwrap();
        let needle = term.to_lowercase();
        let mut hits: Vec<Article> = catalog
            .articles
            .values()
            .filter(|a| a.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by_key(|a| a.id);
        SearchOutcome::ok(hits)
    }
}

use crate::{backend::error::BackendResult, common::Article};
use anyhow::{anyhow, Context};
use log::info;
use std::{collections::HashSet, fs, path::Path};

/// Articles served by the blog api. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    articles: Vec<Article>,
}

impl ContentStore {
    pub fn new(articles: Vec<Article>) -> BackendResult<Self> {
        let mut ids = HashSet::new();
        for article in &articles {
            if !ids.insert(article.id.as_str()) {
                return Err(anyhow!("Duplicate article id {}", article.id).into());
            }
        }
        Ok(Self { articles })
    }

    pub fn load(path: impl AsRef<Path>) -> BackendResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read articles from {}", path.display()))?;
        let articles: Vec<Article> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid articles file {}", path.display()))?;
        info!("Loaded {} articles from {}", articles.len(), path.display());
        Self::new(articles)
    }

    pub fn list(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}

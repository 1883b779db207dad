use crate::{backend::content::ContentStore, common::BLOG_ENDPOINT};
use article::{get_article, list_articles};
use axum::{routing::get, Router};
use std::sync::Arc;

mod article;

pub type BlogState = Arc<ContentStore>;

pub fn api_routes<S>(store: BlogState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(BLOG_ENDPOINT, get(list_articles))
        .route(&format!("{BLOG_ENDPOINT}/:id"), get(get_article))
        .with_state(store)
}

use crate::{backend::api::BlogState, common::Article};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_macros::debug_handler;
use log::debug;

/// List all articles in file order.
#[debug_handler]
pub(in crate::backend::api) async fn list_articles(
    State(store): State<BlogState>,
) -> Json<Vec<Article>> {
    Json(store.list().to_vec())
}

/// Retrieve a single article. Unknown ids are answered with an empty 404.
#[debug_handler]
pub(in crate::backend::api) async fn get_article(
    State(store): State<BlogState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, StatusCode> {
    match store.get(&id) {
        Some(article) => Ok(Json(article.clone())),
        None => {
            debug!("Requested unknown article {id}");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

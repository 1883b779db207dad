use crate::{
    common::Article,
    frontend::{
        api::CLIENT,
        components::error_indicator::ErrorIndicator,
        utils::lifecycle::{load_on_mount, LoadState},
    },
};
use leptos::{
    either::{Either, EitherOf3},
    prelude::*,
    Params,
};
use leptos_router::{hooks::use_params, params::Params};
use log::warn;

#[derive(Params, Clone, Debug, PartialEq)]
pub struct ArticleParams {
    pub id: Option<String>,
}

/// Route adapter for `/article/:id`. Parameters are read once, so a changed id only takes effect
/// when the route is mounted again.
#[component]
pub fn ArticleRoute() -> impl IntoView {
    let id = use_params::<ArticleParams>()
        .get_untracked()
        .ok()
        .and_then(|params| params.id);
    match id {
        Some(id) => Either::Left(view! { <ReadArticle id /> }),
        // unreachable through `/article/:id`, which never matches without an id
        None => {
            warn!("Article route matched without id parameter");
            Either::Right(view! { <ErrorIndicator /> })
        }
    }
}

#[component]
pub fn ReadArticle(id: String) -> impl IntoView {
    let article = load_on_mount(move || {
        let id = id.clone();
        async move { CLIENT.fetch_one(&id).await }
    });

    view! {
        <Suspense fallback=|| view! { "Loading..." }>
            {move || Suspend::new(async move { render_article(article.await) })}
        </Suspense>
    }
}

pub fn render_article(state: LoadState<Article>) -> impl IntoView {
    match state {
        LoadState::Pending => EitherOf3::A(view! { "Loading..." }),
        LoadState::Ready(article) => EitherOf3::B(view! { <ArticleBody article /> }),
        LoadState::Failed(e) => {
            warn!("Failed to load article: {e}");
            EitherOf3::C(view! { <ErrorIndicator /> })
        }
    }
}

/// Title followed by the trusted summary and text markup, inserted without escaping.
#[component]
pub fn ArticleBody(article: Article) -> impl IntoView {
    view! {
        <div class="item-view">
            <h1>{article.title}</h1>
            <div class="summary" inner_html=article.summary></div>
            <div class="text" inner_html=article.text></div>
        </div>
    }
}

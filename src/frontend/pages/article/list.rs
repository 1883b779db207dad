use crate::{
    common::Article,
    frontend::{
        api::CLIENT,
        components::error_indicator::ErrorIndicator,
        utils::{
            formatting::article_link,
            lifecycle::{load_on_mount, LoadState},
        },
    },
};
use leptos::{either::Either, prelude::*};
use log::warn;

#[component]
pub fn ListArticles() -> impl IntoView {
    let articles = load_on_mount(|| async move { CLIENT.fetch_list().await });

    view! {
        <Suspense fallback=|| view! { "Loading..." }>
            {move || Suspend::new(async move { render_list(articles.await) })}
        </Suspense>
    }
}

/// A list whose result was dropped on unmount stays pending and renders like an empty one.
pub fn render_list(state: LoadState<Vec<Article>>) -> impl IntoView {
    match state {
        LoadState::Pending => Either::Left(view! { <ArticleList articles=Vec::new() /> }),
        LoadState::Ready(articles) => Either::Left(view! { <ArticleList articles /> }),
        LoadState::Failed(e) => {
            warn!("Failed to load article list: {e}");
            Either::Right(view! { <ErrorIndicator /> })
        }
    }
}

#[component]
pub fn ArticleList(articles: Vec<Article>) -> impl IntoView {
    view! {
        <div class="article-list">
            {articles
                .into_iter()
                .map(|a| view! { <div>{article_link(&a)}</div> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::utils::errors::FrontendError;
    use pretty_assertions::assert_eq;

    fn article(id: &str, title: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            summary: "<p>s</p>".to_string(),
            text: "<p>t</p>".to_string(),
        }
    }

    fn render(state: LoadState<Vec<Article>>) -> String {
        Owner::new_root(None).with(|| render_list(state).to_html())
    }

    #[test]
    fn test_single_article_link() {
        let json = r#"[{"id":"1","title":"Hello","summary":"<p>s</p>","text":"<p>t</p>"}]"#;
        let articles: Vec<Article> = serde_json::from_str(json).expect("parse list");
        let html = render(LoadState::Ready(articles));

        assert_eq!(1, html.matches("<a ").count());
        assert!(html.contains(r#"href="/article/1""#));
        assert!(html.contains("Hello"));
        // summary and text are not part of the list
        assert!(!html.contains("<p>s</p>"));
    }

    #[test]
    fn test_links_keep_backend_order() {
        let articles = vec![article("3", "Gamma"), article("1", "Alpha"), article("2", "Beta")];
        let html = render(LoadState::Ready(articles));

        assert_eq!(3, html.matches("<a ").count());
        let positions: Vec<usize> = ["/article/3", "/article/1", "/article/2"]
            .iter()
            .map(|path| html.find(path).expect("link rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let articles = vec![article("1", "Alpha"), article("2", "Beta")];
        let first = render(LoadState::Ready(articles.clone()));
        let second = render(LoadState::Ready(articles));
        assert_eq!(first, second);
    }

    #[test]
    fn test_pending_renders_no_links() {
        let html = render(LoadState::Pending);
        assert_eq!(0, html.matches("<a ").count());
        assert!(!html.contains("error"));
    }

    #[test]
    fn test_failed_renders_error_indicator() {
        let html = render(LoadState::Failed(FrontendError::Transport("connection refused".to_string())));
        assert!(html.contains(r#"class="error""#));
        assert_eq!(0, html.matches("<a ").count());
        assert!(!html.contains("connection refused"));
    }
}

use crate::{common::Article, frontend::pages::Page};
use leptos::prelude::*;

pub fn article_path(article: &Article) -> String {
    Page::Article(article.id.clone()).path()
}

pub fn article_link(article: &Article) -> impl IntoView {
    let article_path = article_path(article);
    view! {
        <a class="link" href=article_path>
            {article.title.clone()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_path() {
        let article = Article {
            id: "42".to_string(),
            title: "Answer".to_string(),
            summary: String::new(),
            text: String::new(),
        };
        assert_eq!("/article/42", article_path(&article));
    }
}

use crate::frontend::{
    components::nav::Nav,
    pages::article::{list::ListArticles, read::ArticleRoute},
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// The route table. Every page shares the navigation menu above the matched view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="blogview" href="/pkg/blogview.css" />
        <Title text="Blog" />
        <Router>
            <div class="wrapper">
                <Nav />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=ListArticles />
                        <Route path=path!("/article/:id") view=ArticleRoute />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

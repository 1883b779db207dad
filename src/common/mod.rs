use serde::{Deserialize, Serialize};

/// Path of the article collection on the content backend. Single articles live below it.
pub const BLOG_ENDPOINT: &str = "/blog";

/// Host the browser fetches content from when none was configured at build time.
pub const DEFAULT_BACKEND_HOST: &str = "https://srv.local";

/// Content host baked into the frontend, read from `BLOGVIEW_BACKEND_HOST` during compilation.
pub fn backend_host() -> &'static str {
    option_env!("BLOGVIEW_BACKEND_HOST").unwrap_or(DEFAULT_BACKEND_HOST)
}

/// A single blog entry as served by the content backend.
///
/// `summary` and `text` hold pre-rendered markup which is trusted and rendered without escaping.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub text: String,
}

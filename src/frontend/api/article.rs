use super::ApiClient;
use crate::{
    common::{Article, BLOG_ENDPOINT},
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    /// All articles, in the order the backend returns them.
    pub async fn fetch_list(&self) -> FrontendResult<Vec<Article>> {
        self.get(BLOG_ENDPOINT).await
    }

    pub async fn fetch_one(&self, id: &str) -> FrontendResult<Article> {
        self.get(&format!("{BLOG_ENDPOINT}/{id}")).await
    }
}

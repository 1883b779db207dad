use crate::{
    common::backend_host,
    frontend::utils::errors::{FrontendError, FrontendResult},
};
use http::StatusCode;
use log::info;
use serde::Deserialize;
use std::sync::LazyLock;

pub mod article;

pub static CLIENT: LazyLock<ApiClient> = LazyLock::new(|| ApiClient::new(None));

#[derive(Clone, Debug)]
pub struct ApiClient {
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        // required for tests
        let base_url = base_url.unwrap_or_else(|| backend_host().to_string());
        Self {
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T>(&self, path: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.request_endpoint(path);
        let (status, text) = self.send(&url).await.inspect_err(|e| {
            info!("Request to {url} failed: {e}");
        })?;
        Self::response(status, &text, &url)
    }

    #[cfg(feature = "ssr")]
    async fn send(&self, url: &str) -> FrontendResult<(u16, String)> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        Ok((status.as_u16(), text))
    }

    #[cfg(not(feature = "ssr"))]
    async fn send(&self, url: &str) -> FrontendResult<(u16, String)> {
        use gloo_net::http::Request;

        let res = Request::get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        Ok((status, text))
    }

    /// Maps a received response onto the fetch contract. Non-2xx statuses are reported as not
    /// found without looking at the body.
    fn response<T>(status: u16, text: &str, url: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !StatusCode::from_u16(status).is_ok_and(|s| s.is_success()) {
            info!("API error on {url} status {status}");
            return Err(FrontendError::NotFound { status });
        }
        serde_json::from_str(text).map_err(|e| {
            info!("Failed to deserialize api response: {e} from {text} on {url}");
            FrontendError::from(e)
        })
    }

    fn request_endpoint(&self, path: &str) -> String {
        format!("{}{path}", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Article;
    use pretty_assertions::assert_eq;

    const URL: &str = "http://localhost/blog/1";

    #[test]
    fn test_response_success() {
        let text = r#"{"id":"1","title":"Hi","summary":"<b>s</b>","text":"<i>t</i>"}"#;
        let article: Article = ApiClient::response(200, text, URL).expect("parse article");
        assert_eq!(
            Article {
                id: "1".to_string(),
                title: "Hi".to_string(),
                summary: "<b>s</b>".to_string(),
                text: "<i>t</i>".to_string(),
            },
            article
        );
    }

    #[test]
    fn test_response_any_failure_status_is_not_found() {
        for status in [301, 400, 404, 500, 503] {
            let res = ApiClient::response::<Article>(status, "{}", URL);
            assert_eq!(Err(FrontendError::NotFound { status }), res);
        }
    }

    #[test]
    fn test_response_error_body_is_ignored() {
        // a valid article body does not turn an error status into success
        let text = r#"{"id":"1","title":"Hi","summary":"","text":""}"#;
        let res = ApiClient::response::<Article>(500, text, URL);
        assert_eq!(Err(FrontendError::NotFound { status: 500 }), res);
    }

    #[test]
    fn test_response_partial_article_is_malformed() {
        let text = r#"{"id":"1","title":"Hi"}"#;
        let res = ApiClient::response::<Article>(200, text, URL);
        assert!(matches!(res, Err(FrontendError::Malformed(_))));
    }

    #[test]
    fn test_response_list_with_bad_element_is_malformed() {
        let text = r#"[{"id":"1","title":"Hi","summary":"","text":""},{"id":2}]"#;
        let res = ApiClient::response::<Vec<Article>>(200, text, URL);
        assert!(matches!(res, Err(FrontendError::Malformed(_))));
    }

    #[test]
    fn test_request_endpoint_trims_trailing_slash() {
        let client = ApiClient::new(Some("http://127.0.0.1:3044/".to_string()));
        assert_eq!(
            "http://127.0.0.1:3044/blog",
            client.request_endpoint("/blog")
        );
    }
}

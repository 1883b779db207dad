use crate::{backend::error::BackendResult, frontend::app::shell};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use include_dir::{include_dir, Dir};
use leptos::config::LeptosOptions;
use leptos_axum::render_app_to_stream;
use mime_guess::mime::APPLICATION_OCTET_STREAM;
use tower::ServiceExt;
use tower_http::services::ServeDir;

static SITE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/target/site");

// from https://github.com/leptos-rs/start-axum

/// Serves the compiled frontend (wasm, js, css) and anything else from the assets folder. Paths
/// which are neither a route nor a file get the app shell, whose router renders the not found page.
#[debug_handler]
pub async fn file_and_error_handler(
    State(options): State<LeptosOptions>,
    request: Request<Body>,
) -> BackendResult<Response<Body>> {
    let (parts, body) = request.into_parts();
    let res = static_file(&options, Request::from_parts(parts.clone(), Body::empty())).await?;
    if res.status() != StatusCode::NOT_FOUND {
        return Ok(res);
    }
    let handler = render_app_to_stream(move || shell(options.clone()));
    Ok(handler(Request::from_parts(parts, body))
        .await
        .into_response())
}

async fn static_file(
    options: &LeptosOptions,
    request: Request<Body>,
) -> BackendResult<Response<Body>> {
    if cfg!(debug_assertions) {
        // in debug mode serve assets directly from local folder
        Ok(ServeDir::new(options.site_root.as_ref())
            .oneshot(request)
            .await
            .into_response())
    } else {
        // for production embed assets in binary
        let path = request.uri().path().replacen('/', "", 1);
        let Some(content) = SITE_DIR.get_file(&path) else {
            return Ok(StatusCode::NOT_FOUND.into_response());
        };
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_str(
                mime_guess::from_path(&path)
                    .first_raw()
                    .unwrap_or_else(|| APPLICATION_OCTET_STREAM.essence_str()),
            )?,
        );
        headers.insert(
            HeaderName::from_static("cache-control"),
            HeaderValue::from_static("max-age=3600, public"),
        );
        Ok((headers, content.contents()).into_response())
    }
}

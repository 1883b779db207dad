use crate::{
    backend::{
        api::api_routes,
        assets::file_and_error_handler,
        config::BlogConfig,
        content::ContentStore,
        error::BackendResult,
    },
    frontend::app::{shell, App},
};
use axum::Router;
use leptos::config::get_config_from_str;
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::info;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

pub mod api;
mod assets;
pub mod config;
pub mod content;
pub mod error;

pub async fn start(
    config: BlogConfig,
    override_hostname: Option<SocketAddr>,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    let store = Arc::new(ContentStore::load(&config.content.articles_file)?);

    let leptos_options = get_config_from_str(include_str!("../../Cargo.toml"))?;
    let mut addr = leptos_options.site_addr;
    if let Some(override_hostname) = override_hostname {
        addr = override_hostname;
    }
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
        .merge(api_routes(store))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    info!("Listening on {}", &addr);
    let listener = TcpListener::bind(&addr).await?;
    if let Some(notify_start) = notify_start {
        // receiver may already be gone
        let _ = notify_start.send(());
    }
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

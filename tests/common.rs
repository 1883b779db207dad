#![expect(clippy::unwrap_used)]

use blogview::{
    backend::{
        config::{BlogConfig, BlogConfigContent},
        start,
    },
    frontend::api::ApiClient,
};
use log::LevelFilter;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU16, Ordering},
        Once,
    },
};
use tokio::{sync::oneshot, task::JoinHandle};

pub const TEST_ARTICLES_FILE: &str = "tests/fixtures/articles.json";

pub struct TestData {
    pub client: ApiClient,
    pub hostname: String,
    handle: JoinHandle<()>,
}

impl TestData {
    pub async fn start() -> Self {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            env_logger::builder()
                .filter_level(LevelFilter::Warn)
                .filter_module("blogview", LevelFilter::Info)
                .init();
        });

        // Run things on different ports to allow parallel tests
        static COUNTER: AtomicU16 = AtomicU16::new(0);
        let current_run = COUNTER.fetch_add(1, Ordering::Relaxed);
        let addr = SocketAddr::from(([127, 0, 0, 1], 8300 + current_run));

        let config = BlogConfig {
            content: BlogConfigContent {
                articles_file: TEST_ARTICLES_FILE.to_string(),
            },
        };
        let (notify_start, wait_start) = oneshot::channel();
        let handle = tokio::task::spawn(async move {
            start(config, Some(addr), Some(notify_start)).await.unwrap();
        });
        // wait for the server to be listening
        wait_start.await.unwrap();

        let hostname = format!("http://{addr}");
        Self {
            client: ApiClient::new(Some(hostname.clone())),
            hostname,
            handle,
        }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

// Shared harness: the production router on an ephemeral port

#![allow(dead_code)]

use messages_api::config::AppConfig;
use messages_api::messages::RecordingSink;
use messages_api::server::create_router;
use std::sync::Arc;

pub struct TestServer {
    pub base_url: String,
    pub sink: Arc<RecordingSink>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        Self::spawn_with(AppConfig::default()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let app = create_router(config, sink.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            sink,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

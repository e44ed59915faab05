#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use test_backend::api::handlers::healthz_handler;
use test_backend::api::routes::{mock_routes, util_routes};
use test_backend::application::services::FileBrowser;
use test_backend::domain::host::HostResolver;
use test_backend::error::AppError;
use test_backend::state::AppState;
use tokio_util::sync::CancellationToken;

pub const TEST_HOST: &str = "test-host";

/// Resolver returning a fixed identity, independent of the machine's DNS.
pub struct StaticHostResolver;

#[async_trait]
impl HostResolver for StaticHostResolver {
    fn host_name(&self) -> Result<String, AppError> {
        Ok(TEST_HOST.to_string())
    }

    async fn resolve(&self, _host: &str) -> Result<Vec<IpAddr>, AppError> {
        Ok(vec![
            IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)),
            IpAddr::V4(Ipv4Addr::LOCALHOST),
        ])
    }
}

/// Resolver whose DNS lookup always fails.
pub struct FailingHostResolver;

#[async_trait]
impl HostResolver for FailingHostResolver {
    fn host_name(&self) -> Result<String, AppError> {
        Ok("unresolvable.invalid".to_string())
    }

    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, AppError> {
        Err(AppError::internal(
            "Failed to resolve host",
            json!({ "host": host }),
        ))
    }
}

/// Scratch data root backed by [`tempfile::TempDir`], removed on drop.
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new() -> Self {
        let inner = tempfile::Builder::new()
            .prefix("test-backend-")
            .tempdir()
            .unwrap();
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let file = self.path().join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&file, contents).unwrap();
        file
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let dir = self.path().join(relative);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}

pub fn create_test_state(data_root: &Path) -> AppState {
    create_state_with(
        data_root,
        Arc::new(StaticHostResolver),
        CancellationToken::new(),
    )
}

pub fn create_state_with(
    data_root: &Path,
    resolver: Arc<dyn HostResolver>,
    shutdown: CancellationToken,
) -> AppState {
    AppState::new(FileBrowser::new(data_root), resolver, shutdown)
}

/// All routes without the outer middleware stack.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .nest("/mock", mock_routes())
        .nest("/util", util_routes())
        .with_state(state)
}

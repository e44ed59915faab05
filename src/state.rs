//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::services::{DiagnosticsService, FileBrowser, MockDataService};
use crate::config::Config;
use crate::domain::host::HostResolver;
use crate::infrastructure::memory::AllocationRegistry;
use crate::infrastructure::system::SystemHostResolver;

#[derive(Clone)]
pub struct AppState {
    pub mock_data: MockDataService,
    pub file_browser: Arc<FileBrowser>,
    pub diagnostics: Arc<DiagnosticsService>,
    pub allocations: Arc<AllocationRegistry>,
    /// Cancelled when the server begins shutting down.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        file_browser: FileBrowser,
        resolver: Arc<dyn HostResolver>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            mock_data: MockDataService::new(),
            file_browser: Arc::new(file_browser),
            diagnostics: Arc::new(DiagnosticsService::new(resolver)),
            allocations: Arc::new(AllocationRegistry::new()),
            shutdown,
        }
    }

    /// State backed by the real host resolver and the configured data root.
    pub fn from_config(config: &Config, shutdown: CancellationToken) -> Self {
        Self::new(
            FileBrowser::new(config.data_root.clone()),
            Arc::new(SystemHostResolver::new()),
            shutdown,
        )
    }
}

//! Services for the application layer.

pub mod diagnostics_service;
pub mod file_browser;
pub mod mock_data_service;

pub use diagnostics_service::DiagnosticsService;
pub use file_browser::FileBrowser;
pub use mock_data_service::MockDataService;

//! Local host identity.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::error::AppError;

/// Resolves the name and addresses of the machine the service runs on.
///
/// # Implementations
///
/// - [`crate::infrastructure::system::SystemHostResolver`] - OS hostname plus DNS lookup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns the local host name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the name cannot be read or is not UTF-8.
    fn host_name(&self) -> Result<String, AppError>;

    /// Resolves `host` to its IP addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if name resolution fails.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, AppError>;
}

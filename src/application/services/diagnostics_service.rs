//! Process and host introspection, plus the cancellable delay.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::host::HostResolver;
use crate::error::AppError;
use crate::utils::case_insensitive::CaseInsensitiveMap;

/// Lowest status code the error endpoint produces.
pub const MIN_STATUS_CODE: i64 = 100;

/// Highest status code the error endpoint produces.
pub const MAX_STATUS_CODE: i64 = 599;

/// Version reported when the binary carries no version metadata.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Build metadata of the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    /// Version plus build suffix (e.g. commit), when the build provided one.
    pub informational: Option<String>,
}

/// Identity of the host the process runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub host: String,
    pub addresses: Vec<String>,
    pub process_id: u32,
}

/// Result of a completed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayOutcome {
    pub requested_ms: i64,
    pub elapsed_ms: u64,
}

/// Clamps an arbitrary integer to a valid HTTP status code in `100..=599`.
pub fn clamp_status_code(code: i64) -> u16 {
    code.clamp(MIN_STATUS_CODE, MAX_STATUS_CODE) as u16
}

/// Service for runtime diagnostics.
#[derive(Clone)]
pub struct DiagnosticsService {
    resolver: Arc<dyn HostResolver>,
}

impl DiagnosticsService {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Version metadata compiled into the binary.
    ///
    /// `informational` is `{version}+{BUILD_COMMIT}` when `BUILD_COMMIT` was set
    /// at compile time.
    pub fn version(&self) -> VersionInfo {
        let version = option_env!("CARGO_PKG_VERSION")
            .unwrap_or(UNKNOWN_VERSION)
            .to_string();
        let informational =
            option_env!("BUILD_COMMIT").map(|commit| format!("{version}+{commit}"));

        VersionInfo {
            version,
            informational,
        }
    }

    /// Snapshot of the process environment with case-insensitive keys.
    ///
    /// Variables whose name or value is not valid Unicode are converted lossily.
    pub fn environment(&self) -> CaseInsensitiveMap {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Host name, its resolved addresses and the current process id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the host name cannot be read or resolved.
    pub async fn whoami(&self) -> Result<HostIdentity, AppError> {
        let host = self.resolver.host_name()?;
        let addresses = self
            .resolver
            .resolve(&host)
            .await?
            .into_iter()
            .map(|ip| ip.to_string())
            .collect();

        Ok(HostIdentity {
            host,
            addresses,
            process_id: std::process::id(),
        })
    }

    /// Waits `ms` milliseconds unless `cancel` fires first.
    ///
    /// # Errors
    ///
    /// - [`AppError::Cancelled`] if `cancel` is already cancelled (for any `ms`)
    ///   or fires during the wait
    /// - [`AppError::InvalidArgument`] if `ms` is negative
    pub async fn delay(
        &self,
        ms: i64,
        cancel: &CancellationToken,
    ) -> Result<DelayOutcome, AppError> {
        if cancel.is_cancelled() {
            return Err(AppError::cancelled("Request cancelled"));
        }

        if ms < 0 {
            return Err(AppError::invalid_argument(
                "Delay must be a non-negative number of milliseconds",
                json!({ "ms": ms }),
            ));
        }

        let started = Instant::now();

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(ms as u64)) => {}
            _ = cancel.cancelled() => {
                tracing::info!(requested_ms = ms, "Delay cancelled");
                return Err(AppError::cancelled("Request cancelled"));
            }
        }

        Ok(DelayOutcome {
            requested_ms: ms,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}

//! Host resolver backed by the OS hostname and the system resolver.

use async_trait::async_trait;
use serde_json::json;
use std::net::IpAddr;

use crate::domain::host::HostResolver;
use crate::error::AppError;

/// Reads the hostname via `gethostname` and resolves it with the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    fn host_name(&self) -> Result<String, AppError> {
        let name = hostname::get().map_err(|e| {
            AppError::internal("Failed to read host name", json!({ "reason": e.to_string() }))
        })?;

        name.into_string().map_err(|raw| {
            AppError::internal(
                "Host name is not valid UTF-8",
                json!({ "host": raw.to_string_lossy() }),
            )
        })
    }

    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, AppError> {
        // lookup_host needs a port; it is discarded below.
        let addrs = tokio::net::lookup_host((host, 0)).await.map_err(|e| {
            AppError::internal(
                "DNS resolution failed",
                json!({ "host": host, "reason": e.to_string() }),
            )
        })?;

        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in addrs {
            let ip = addr.ip();
            if !ips.contains(&ip) {
                ips.push(ip);
            }
        }

        Ok(ips)
    }
}

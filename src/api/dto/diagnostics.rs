//! DTOs for runtime diagnostics and fault injection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::application::services::diagnostics_service::{
    DelayOutcome, HostIdentity, VersionInfo,
};

/// Build version. `informational` is `null` when the build carries no suffix.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub informational: Option<String>,
}

impl From<VersionInfo> for VersionResponse {
    fn from(info: VersionInfo) -> Self {
        Self {
            version: info.version,
            informational: info.informational,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub host: String,
    pub addresses: Vec<String>,
    pub process_id: u32,
}

impl From<HostIdentity> for WhoAmIResponse {
    fn from(identity: HostIdentity) -> Self {
        Self {
            host: identity.host,
            addresses: identity.addresses,
            process_id: identity.process_id,
        }
    }
}

/// Echoed request body with the time it was received.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub received_at_utc: DateTime<Utc>,
    pub body: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayResponse {
    pub requested_ms: i64,
    pub elapsed_ms: u64,
}

impl From<DelayOutcome> for DelayResponse {
    fn from(outcome: DelayOutcome) -> Self {
        Self {
            requested_ms: outcome.requested_ms,
            elapsed_ms: outcome.elapsed_ms,
        }
    }
}

/// Body returned with an injected status code.
#[derive(Debug, Serialize)]
pub struct ErrorInjectionResponse {
    pub error: String,
}

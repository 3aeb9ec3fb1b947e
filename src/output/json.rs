//! JSON output formatting

use chrono::Utc;
use oae_rest::client::RestContext;
use serde::Serialize;

/// Response data together with the tenant and principal it was fetched as
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Tenant base URL as configured
    pub tenant: String,

    /// User id the call ran as, or `anonymous`
    pub acting_as: String,

    /// RFC 3339 time the output was produced
    pub timestamp: String,

    pub version: String,
}

impl Metadata {
    pub fn for_context(ctx: &RestContext) -> Self {
        Self {
            tenant: ctx.tenant().base_url().to_string(),
            acting_as: ctx.principal().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Format data as pretty-printed JSON inside the metadata envelope
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    ctx: &RestContext,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data,
        meta: Metadata::for_context(ctx),
    })
}

//! Wire-level message shapes shared by both directions of the bridge.
//!
//! Both directions use the same JSON object layout:
//! `{ "method"?: string, "params"?: object, "callbackId"?: string }`.
//! Unknown additional fields are tolerated and ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat key-value parameter mapping carried by bridge messages.
///
/// No schema is enforced here; validating parameter contents is a host
/// concern.
pub type Params = Map<String, Value>;

/// Message travelling from script to host.
///
/// Immutable once constructed. The serialized form depends on the target
/// transport: the native call surface receives the params as a JSON string,
/// the message handler receives the structured message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    pub callback_id: String,
}

/// Message travelling from host to script.
///
/// Covers both response deliveries (carrying a `callbackId`) and
/// host-initiated calls (carrying a `method`). Hosts may deliver it as an
/// already-structured value or as a raw JSON string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
}

impl InboundMessage {
    /// Response delivery for a previously issued call.
    pub fn callback(callback_id: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: None,
            params,
            callback_id: Some(callback_id.into()),
        }
    }

    /// Host-initiated call into script-side logic.
    pub fn call(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: Some(method.into()),
            params,
            callback_id: None,
        }
    }
}

//! Pluggable hooks the embedding application may install on an engine.

use serde_json::Value;

/// Maps a host response payload to business data or an error before the
/// pending call resolves.
///
/// Applied to the inbound `params` whenever one is installed and the
/// response carries a payload. Returning `Err` fails the call with
/// [`BridgeError::Transform`](crate::BridgeError::Transform); the raw
/// payload never reaches the success path.
pub trait ResponseTransformer: Send + Sync {
    fn transform(&self, params: Value) -> anyhow::Result<Value>;
}

impl<F> ResponseTransformer for F
where
    F: Fn(Value) -> anyhow::Result<Value> + Send + Sync,
{
    fn transform(&self, params: Value) -> anyhow::Result<Value> {
        self(params)
    }
}

/// Receives host-initiated calls, the mirror direction of the primary call
/// path.
///
/// At most one handler is registered on an engine at a time; calls arriving
/// while none is registered are dropped, not queued.
pub trait InboundCallHandler: Send + Sync {
    fn on_call(&self, method: &str, params: Option<&Value>);
}

impl<F> InboundCallHandler for F
where
    F: Fn(&str, Option<&Value>) + Send + Sync,
{
    fn on_call(&self, method: &str, params: Option<&Value>) {
        self(method, params)
    }
}

//! Inbound paths: response resolution for pending calls and dispatch of
//! host-initiated calls.

use serde_json::Value;
use tracing::debug;

use tbridge_traits::{BridgeError, InboundMessage, Result};

use crate::bridge::Bridge;

impl Bridge {
    /// Resolve a pending call from a host response.
    ///
    /// Entry point the host transport invokes for the forward direction.
    /// Messages without a callback id, or whose id is unknown or already
    /// settled, are ignored: stray and redelivered host messages have no
    /// observable effect.
    pub fn on_native_callback(&self, msg: InboundMessage) {
        let Some(callback_id) = msg.callback_id else {
            debug!("inbound callback without a callback id, ignoring");
            return;
        };
        // Remove before resolving, so a redelivery of the same response
        // finds no entry and resolution stays at-most-once.
        let Some(entry) = self.take_pending(&callback_id) else {
            debug!(callback_id = %callback_id, "callback for unknown or settled call, ignoring");
            return;
        };
        entry.complete(self.resolve_payload(msg.params));
    }

    /// Route a host-initiated call to the registered handler, if any.
    ///
    /// Calls arriving while no handler is registered are dropped, not
    /// queued; messages without a method name are ignored.
    pub fn on_call_from_native(&self, msg: InboundMessage) {
        let Some(method) = msg.method else {
            return;
        };
        let Some(handler) = self.call_handler() else {
            debug!(method = %method, "host call with no registered handler, dropping");
            return;
        };
        handler.on_call(&method, msg.params.as_ref());
    }

    /// Raw-string form of [`Bridge::on_call_from_native`].
    ///
    /// Malformed JSON is discarded silently: the host did not originate a
    /// traceable request, so there is no caller to notify.
    pub fn on_call_from_native_json(&self, raw: &str) {
        match serde_json::from_str::<InboundMessage>(raw) {
            Ok(msg) => self.on_call_from_native(msg),
            Err(err) => debug!(error = %err, "discarding malformed inbound call"),
        }
    }

    /// Compute the value a matched call resolves with: transform stage
    /// first, then the best-effort reparse stage.
    fn resolve_payload(&self, params: Option<Value>) -> Result<Value> {
        let value = match (self.response_transformer(), params) {
            (Some(transformer), Some(params)) => {
                transformer.transform(params).map_err(BridgeError::Transform)?
            }
            (_, params) => params.unwrap_or(Value::Null),
        };
        Ok(reparse_string_payload(value))
    }
}

/// Hosts frequently double-encode structured payloads as JSON strings.
/// Parse those back when the encoded value is structured; primitives and
/// non-JSON strings pass through as the original string.
fn reparse_string_payload(value: Value) -> Value {
    let Value::String(raw) = value else {
        return value;
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(parsed) if parsed.is_object() || parsed.is_array() => parsed,
        _ => Value::String(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reparse_recovers_encoded_objects_and_arrays() {
        assert_eq!(
            reparse_string_payload(json!(r#"{"a":1}"#)),
            json!({"a": 1})
        );
        assert_eq!(reparse_string_payload(json!("[1,2]")), json!([1, 2]));
    }

    #[test]
    fn reparse_keeps_primitive_encodings_as_strings() {
        assert_eq!(reparse_string_payload(json!("42")), json!("42"));
        assert_eq!(reparse_string_payload(json!("true")), json!("true"));
        assert_eq!(reparse_string_payload(json!("null")), json!("null"));
    }

    #[test]
    fn reparse_keeps_non_json_strings() {
        assert_eq!(reparse_string_payload(json!("plain text")), json!("plain text"));
    }

    #[test]
    fn reparse_passes_structured_values_through() {
        assert_eq!(reparse_string_payload(json!({"a": 1})), json!({"a": 1}));
        assert_eq!(reparse_string_payload(Value::Null), Value::Null);
    }
}

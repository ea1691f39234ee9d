//! Explicit wiring between a host application and the engine's inbound
//! entry points.

use tbridge_engine::Bridge;
use tbridge_traits::InboundMessage;

/// The two entry points a host must invoke to deliver messages into the
/// engine.
///
/// Host glue code receives a binding by explicit injection and forwards
/// transport deliveries through it; the engine itself is never attached to
/// any ambient global object.
#[derive(Clone)]
pub struct HostBinding {
    bridge: Bridge,
}

impl HostBinding {
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    /// The engine this binding feeds.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Deliver a host response for a previously issued call.
    pub fn on_native_callback(&self, msg: InboundMessage) {
        self.bridge.on_native_callback(msg);
    }

    /// Deliver a host-initiated call, structured form.
    pub fn on_call_from_native(&self, msg: InboundMessage) {
        self.bridge.on_call_from_native(msg);
    }

    /// Deliver a host-initiated call, raw JSON form. Malformed strings are
    /// dropped silently.
    pub fn on_call_from_native_json(&self, raw: &str) {
        self.bridge.on_call_from_native_json(raw);
    }
}

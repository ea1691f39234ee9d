//! An in-process host for development and integration testing.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use tbridge_engine::Bridge;
use tbridge_traits::{
    BridgeError, HostEnvironment, InboundMessage, MessageHandlerSurface, NativeCallSurface,
    Result,
};

use crate::binding::HostBinding;

/// Produces the host response payload for one method.
pub type MethodHandler = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// An in-process host.
///
/// Implements the environment and the native call surface in one object:
/// calls issued through an engine constructed over this host are answered
/// synchronously by the registered method handlers and delivered back
/// through the bound [`HostBinding`]. Calls to methods without a handler
/// fail at the send step.
#[derive(Clone, Default)]
pub struct LoopbackHost {
    inner: Arc<LoopbackInner>,
}

#[derive(Default)]
struct LoopbackInner {
    handlers: RwLock<HashMap<String, MethodHandler>>,
    binding: RwLock<Option<HostBinding>>,
}

impl LoopbackHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine wired to this host and return its binding.
    pub fn connect(&self) -> HostBinding {
        let bridge = Bridge::new(Arc::new(self.clone()));
        let binding = HostBinding::new(bridge);
        self.bind(binding.clone());
        binding
    }

    /// Connect the host's reply path to an engine binding.
    pub fn bind(&self, binding: HostBinding) {
        *self
            .inner
            .binding
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(binding);
    }

    /// Answer calls to `method` with the value produced by `handler`.
    /// Registering a handler for the same method replaces the previous one.
    pub fn handle<F>(&self, method: impl Into<String>, handler: F)
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.inner
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(method.into(), Arc::new(handler));
    }

    /// Push a host-initiated call through the bound engine (the reverse
    /// direction). Dropped when no engine is bound.
    pub fn call_script(&self, method: &str, params: Option<Value>) {
        let binding = self
            .inner
            .binding
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match binding {
            Some(binding) => binding.on_call_from_native(InboundMessage::call(method, params)),
            None => debug!(method, "loopback host is not bound, dropping script call"),
        }
    }
}

impl HostEnvironment for LoopbackHost {
    fn native_call_surface(&self) -> Option<Arc<dyn NativeCallSurface>> {
        Some(self.inner.clone())
    }

    fn message_handler(&self) -> Option<Arc<dyn MessageHandlerSurface>> {
        None
    }

    fn user_agent(&self) -> Option<String> {
        None
    }
}

#[async_trait]
impl NativeCallSurface for LoopbackInner {
    async fn call_native(&self, method: &str, params_json: &str, callback_id: &str) -> Result<()> {
        let binding = self
            .binding
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| BridgeError::Send("loopback host is not bound to an engine".into()))?;
        let handler = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .cloned()
            .ok_or_else(|| BridgeError::Send(format!("loopback host has no handler for {method}")))?;
        let params: Value = serde_json::from_str(params_json)
            .map_err(|err| BridgeError::Send(format!("loopback host received invalid params: {err}")))?;

        let reply = handler(params);
        debug!(method, callback_id, "loopback host answering call");
        binding.on_native_callback(InboundMessage::callback(callback_id, Some(reply)));
        Ok(())
    }
}

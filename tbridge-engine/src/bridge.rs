//! The call engine: dual-mode call entry point, callback-id allocation,
//! pending-call registration, and the platform-specific send path.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error, warn};

use tbridge_traits::{
    BridgeError, HostEnvironment, InboundCallHandler, InboundMessage, OutboundMessage, Params,
    Platform, ResponseTransformer, Result,
};

use crate::id::CallbackIdGenerator;
use crate::pending::{Completion, PendingCall, PendingCallTable};
use crate::resolver;

/// Default window a call waits for its host response.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Delay before a host-less environment receives its synthesized response.
pub(crate) const PLACEHOLDER_RESPONSE_DELAY: Duration = Duration::from_millis(100);

/// The payload synthesized for calls issued with no host bridge attached.
///
/// Environments classified as web or unknown never contact a host; instead
/// every call resolves with this value after a short delay, which keeps
/// host-less development environments from hanging. Test code can compare
/// against it to recognize fabricated data.
pub fn placeholder_response() -> Value {
    json!({ "data": { "message": "mock" } })
}

/// A call request: method name, optional flat parameter mapping, and the
/// response window.
#[derive(Debug, Clone)]
pub struct CallOptions {
    method: String,
    params: Option<Params>,
    timeout: Duration,
}

impl CallOptions {
    /// A request for `method` with no parameters and the default window.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Attach the parameter mapping sent to the host.
    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Override the response window (default 5000 ms).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The call-correlation engine.
///
/// Cheap to clone; clones share one pending-call table and one pair of
/// handler slots. Separate engine instances share nothing, so callback ids
/// are only unique within one instance.
///
/// Construction never fails observably: a hosting environment without any
/// detection surface simply classifies as [`Platform::Unknown`].
///
/// Calls must be issued from within a Tokio runtime; timers and the
/// placeholder fallback are scheduled on it.
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<Inner>,
}

struct Inner {
    env: Arc<dyn HostEnvironment>,
    pending: PendingCallTable,
    ids: CallbackIdGenerator,
    transformer: RwLock<Option<Arc<dyn ResponseTransformer>>>,
    call_handler: RwLock<Option<Arc<dyn InboundCallHandler>>>,
}

impl Bridge {
    /// Build an engine over the given hosting environment.
    pub fn new(env: Arc<dyn HostEnvironment>) -> Self {
        Self {
            inner: Arc::new(Inner {
                env,
                pending: PendingCallTable::default(),
                ids: CallbackIdGenerator::new(),
                transformer: RwLock::new(None),
                call_handler: RwLock::new(None),
            }),
        }
    }

    /// Build an engine with a response transformer already installed.
    pub fn with_transformer(
        env: Arc<dyn HostEnvironment>,
        transformer: Arc<dyn ResponseTransformer>,
    ) -> Self {
        let bridge = Self::new(env);
        bridge.set_response_transformer(transformer);
        bridge
    }

    /// Current platform classification, recomputed on every invocation.
    pub fn platform(&self) -> Platform {
        resolver::resolve(self.inner.env.as_ref())
    }

    /// Call a host method and await its response within the default window.
    pub async fn call(&self, method: impl Into<String>, params: Option<Params>) -> Result<Value> {
        let mut options = CallOptions::new(method);
        if let Some(params) = params {
            options = options.params(params);
        }
        self.call_with(options).await
    }

    /// Call a host method with explicit options and await its response.
    pub async fn call_with(&self, options: CallOptions) -> Result<Value> {
        let (sender, receiver) = oneshot::channel();
        self.dispatch(options, Completion::Channel(sender)).await;
        match receiver.await {
            Ok(result) => result,
            Err(_) => Err(BridgeError::ChannelClosed),
        }
    }

    /// Call a host method, delivering the outcome to `on_complete`.
    ///
    /// Returns immediately. The callback fires exactly once with the
    /// response payload or the failure. Callback-mode calls are subject to
    /// the same response window as awaitable calls: an unanswered call
    /// receives [`BridgeError::Timeout`] instead of occupying the pending
    /// table for the rest of the process lifetime. Fire-and-forget callers
    /// can simply ignore the error.
    pub fn call_with_callback<F>(&self, options: CallOptions, on_complete: F)
    where
        F: FnOnce(Result<Value>) + Send + 'static,
    {
        let bridge = self.clone();
        tokio::spawn(async move {
            bridge
                .dispatch(options, Completion::Callback(Box::new(on_complete)))
                .await;
        });
    }

    /// Number of calls still waiting on a host response.
    pub fn pending_calls(&self) -> usize {
        self.inner.pending.len()
    }

    /// Install the response transformer, replacing any previous one.
    pub fn set_response_transformer(&self, transformer: Arc<dyn ResponseTransformer>) {
        *write_slot(&self.inner.transformer) = Some(transformer);
    }

    /// Remove the response transformer.
    pub fn clear_response_transformer(&self) {
        *write_slot(&self.inner.transformer) = None;
    }

    /// Register the handler for host-initiated calls, replacing any
    /// previous one.
    pub fn set_call_handler(&self, handler: Arc<dyn InboundCallHandler>) {
        *write_slot(&self.inner.call_handler) = Some(handler);
    }

    /// Remove the handler for host-initiated calls. Calls arriving while no
    /// handler is registered are dropped.
    pub fn clear_call_handler(&self) {
        *write_slot(&self.inner.call_handler) = None;
    }

    pub(crate) fn response_transformer(&self) -> Option<Arc<dyn ResponseTransformer>> {
        read_slot(&self.inner.transformer)
    }

    pub(crate) fn call_handler(&self) -> Option<Arc<dyn InboundCallHandler>> {
        read_slot(&self.inner.call_handler)
    }

    pub(crate) fn take_pending(&self, callback_id: &str) -> Option<PendingCall> {
        self.inner.pending.take(callback_id)
    }

    /// Register the call and hand it to the send step. All public call
    /// shapes funnel through here with their consumption style already
    /// resolved into a [`Completion`].
    async fn dispatch(&self, options: CallOptions, completion: Completion) {
        let CallOptions {
            method,
            params,
            timeout,
        } = options;
        let callback_id = self.inner.ids.next_id();

        let mut entry = PendingCall::new(completion);
        entry.set_timer(self.arm_timeout(&method, &callback_id, timeout));
        self.inner.pending.insert(callback_id.clone(), entry);

        if let Err(err) = self.send(&method, params, &callback_id).await {
            error!(method = %method, error = %err, "dispatch to host failed");
            self.fail_pending(&callback_id, err);
        }
    }

    fn arm_timeout(&self, method: &str, callback_id: &str, timeout: Duration) -> JoinHandle<()> {
        let bridge = self.clone();
        let method = method.to_string();
        let callback_id = callback_id.to_string();
        tokio::spawn(async move {
            time::sleep(timeout).await;
            bridge.fail_pending(&callback_id, BridgeError::Timeout { method });
        })
    }

    /// Remove the entry and fire its failure continuation. No-op when the
    /// call already settled.
    pub(crate) fn fail_pending(&self, callback_id: &str, err: BridgeError) {
        if let Some(entry) = self.inner.pending.take(callback_id) {
            entry.complete(Err(err));
        }
    }

    /// The platform-specific send step.
    ///
    /// Platform is re-resolved here, not read from a cache: a bridge object
    /// may have been attached since the previous call.
    async fn send(&self, method: &str, params: Option<Params>, callback_id: &str) -> Result<()> {
        let platform = self.platform();
        match platform {
            Platform::Android => {
                let surface = self.inner.env.native_call_surface().ok_or_else(|| {
                    BridgeError::Send("android environment without an attached call surface".into())
                })?;
                let params_json = encode_params(params.as_ref())?;
                surface.call_native(method, &params_json, callback_id).await?;
                debug!(method, platform = %platform, "delivered call to native surface");
            }
            Platform::Ios => {
                let handler = self.inner.env.message_handler().ok_or_else(|| {
                    BridgeError::Send("ios environment without an attached message handler".into())
                })?;
                let message = OutboundMessage {
                    method: method.to_string(),
                    params,
                    callback_id: callback_id.to_string(),
                };
                handler.post_message(message).await?;
                debug!(method, platform = %platform, "posted call to message handler");
            }
            Platform::Web | Platform::Unknown => {
                warn!(
                    method,
                    platform = %platform,
                    "no host bridge available, scheduling placeholder response"
                );
                let bridge = self.clone();
                let callback_id = callback_id.to_string();
                tokio::spawn(async move {
                    time::sleep(PLACEHOLDER_RESPONSE_DELAY).await;
                    bridge.on_native_callback(InboundMessage::callback(
                        callback_id,
                        Some(placeholder_response()),
                    ));
                });
            }
        }
        Ok(())
    }
}

fn encode_params(params: Option<&Params>) -> Result<String> {
    let encoded = match params {
        Some(params) => serde_json::to_string(params),
        None => serde_json::to_string(&Params::new()),
    };
    encoded.map_err(|err| BridgeError::Send(format!("parameter encoding failed: {err}")))
}

fn read_slot<T: ?Sized>(slot: &RwLock<Option<Arc<T>>>) -> Option<Arc<T>> {
    slot.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write_slot<T: ?Sized>(
    slot: &RwLock<Option<Arc<T>>>,
) -> std::sync::RwLockWriteGuard<'_, Option<Arc<T>>> {
    slot.write().unwrap_or_else(PoisonError::into_inner)
}

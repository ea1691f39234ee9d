//! Outbound transport surfaces a host may attach.
//!
//! Each trait mirrors one concrete delivery mechanism. Implementations are
//! expected to be thin: serialize nothing beyond what the signature hands
//! them and report delivery failures through the returned `Result` so the
//! engine can fail the pending call instead of leaking it.

use async_trait::async_trait;

use crate::error::Result;
use crate::message::OutboundMessage;

/// Android-style native call surface.
///
/// Receives the method name, the parameter mapping encoded as a JSON string,
/// and the callback id correlating the eventual response.
#[async_trait]
pub trait NativeCallSurface: Send + Sync {
    async fn call_native(&self, method: &str, params_json: &str, callback_id: &str) -> Result<()>;
}

/// iOS-style message handler surface.
///
/// Receives the structured outbound message as a whole.
#[async_trait]
pub trait MessageHandlerSurface: Send + Sync {
    async fn post_message(&self, message: OutboundMessage) -> Result<()>;
}

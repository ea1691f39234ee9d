//! # Call-Correlation Engine
//!
//! Turns the one-way, fire-and-forget message channel between a script
//! runtime and its host application into a request/response abstraction.
//!
//! ## Overview
//!
//! The engine consists of:
//! - **Callback ids**: strings unique within one engine instance, built from
//!   a monotonic counter plus a time component
//! - **Pending-call table**: the engine's only shared mutable state, mapping
//!   callback ids to their resolution handles
//! - **Call engine**: the dual promise/callback call entry point and the
//!   platform-specific send path
//! - **Inbound paths**: response resolution (with transform and best-effort
//!   reparse stages) and host-initiated call dispatch
//!
//! ## Data Flow
//!
//! ```text
//! script code ──> Bridge::call(method, params)
//!                   │ allocate callback id, register pending call
//!                   ▼
//!            platform resolver ──> transport ──> host
//!                                                  │
//! pending table <── Bridge::on_native_callback <───┘
//!       │ remove entry, transform, reparse
//!       ▼
//! resolve / reject the original call
//! ```
//!
//! The reverse direction (`host -> script`) flows through
//! [`Bridge::on_call_from_native`] into the registered
//! [`InboundCallHandler`].
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tbridge_engine::{Bridge, CallOptions, HeadlessEnvironment};
//!
//! # async fn example() -> tbridge_engine::Result<()> {
//! let bridge = Bridge::new(Arc::new(HeadlessEnvironment));
//! let user = bridge.call("getUser", None).await?;
//! # Ok(())
//! # }
//! ```

mod bridge;
mod id;
mod inbound;
mod pending;
pub mod resolver;

pub use bridge::{placeholder_response, Bridge, CallOptions, DEFAULT_CALL_TIMEOUT};

// Re-export the interface crate's commonly used types.
pub use tbridge_traits::{
    BridgeError, HeadlessEnvironment, HostEnvironment, InboundCallHandler, InboundMessage,
    MessageHandlerSurface, NativeCallSurface, OutboundMessage, Params, Platform,
    ResponseTransformer, Result,
};

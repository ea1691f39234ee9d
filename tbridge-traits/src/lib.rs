//! # Host Bridge Interfaces
//!
//! Contract between the call-correlation engine and platform-specific host
//! transports.
//!
//! ## Overview
//!
//! A script runtime and the native application embedding it can only exchange
//! one-way, fire-and-forget messages. This crate defines everything both
//! sides of that channel agree on:
//!
//! - [`OutboundMessage`](message::OutboundMessage) /
//!   [`InboundMessage`](message::InboundMessage) - the wire-level shapes
//! - [`NativeCallSurface`](transport::NativeCallSurface) /
//!   [`MessageHandlerSurface`](transport::MessageHandlerSurface) - the
//!   outbound transports a host may attach
//! - [`HostEnvironment`](platform::HostEnvironment) - what the engine can
//!   observe about its hosting environment, queried freshly per send
//! - [`ResponseTransformer`](handler::ResponseTransformer) /
//!   [`InboundCallHandler`](handler::InboundCallHandler) - pluggable hooks
//! - [`BridgeError`](error::BridgeError) - the failure taxonomy delivered
//!   through a call's resolution channel
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so implementations can be shared freely
//! across async tasks.

pub mod error;
pub mod handler;
pub mod message;
pub mod platform;
pub mod transport;

pub use error::{BridgeError, Result};

// Re-export commonly used types
pub use handler::{InboundCallHandler, ResponseTransformer};
pub use message::{InboundMessage, OutboundMessage, Params};
pub use platform::{HeadlessEnvironment, HostEnvironment, Platform};
pub use transport::{MessageHandlerSurface, NativeCallSurface};

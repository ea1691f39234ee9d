//! # Host Integration Layer
//!
//! Wires a [`Bridge`](tbridge_engine::Bridge) into a concrete host
//! application.
//!
//! The engine never touches ambient globals: host glue code receives a
//! [`HostBinding`] and forwards transport deliveries through its two entry
//! points ([`HostBinding::on_native_callback`] for response deliveries,
//! [`HostBinding::on_call_from_native`] for host-initiated calls).
//!
//! For host-less development and integration testing, [`LoopbackHost`]
//! implements the environment and the native call surface in-process and
//! answers calls from registered method handlers.
//!
//! ## Usage
//!
//! ```ignore
//! use tbridge_host::{init_logging, LoggingConfig, LoopbackHost};
//!
//! # async fn example() -> anyhow::Result<()> {
//! init_logging(LoggingConfig::default())?;
//!
//! let host = LoopbackHost::new();
//! host.handle("echo", |params| params);
//! let binding = host.connect();
//!
//! let reply = binding.bridge().call("echo", None).await?;
//! # Ok(())
//! # }
//! ```

pub mod binding;
pub mod error;
pub mod logging;
pub mod loopback;

pub use binding::HostBinding;
pub use error::{HostError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use loopback::LoopbackHost;

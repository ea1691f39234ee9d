use thiserror::Error;

/// Errors delivered through a call's failure continuation.
///
/// Every variant is local to a single call: no failure propagates out of the
/// engine to the hosting runtime. Malformed inbound messages are dropped
/// rather than surfaced, since the host did not originate a traceable
/// request, and engine construction never fails observably.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// No response arrived within the configured window.
    #[error("host call timed out: {method}")]
    Timeout { method: String },

    /// The platform-specific dispatch step failed.
    #[error("failed to deliver message to host: {0}")]
    Send(String),

    /// The installed response transformer rejected the payload.
    #[error("response transform failed: {0}")]
    Transform(anyhow::Error),

    /// The engine was dropped before the call settled.
    #[error("bridge shut down before a response arrived")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, BridgeError>;

//! Platform model and the detection surface the engine observes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::transport::{MessageHandlerSurface, NativeCallSurface};

/// The closed set of hosting environments a bridge can run under.
///
/// Always derived, never stored: the hosting environment can change identity
/// between calls (a page that initially has no bridge object may receive one
/// later), so classification is recomputed on every send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Host exposes the Android-style native call surface.
    Android,
    /// Host exposes the iOS-style message handler surface.
    Ios,
    /// Browser-like environment with no host bridge attached.
    Web,
    /// No detection surface at all (non-interactive execution contexts).
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the engine can observe about its hosting environment.
///
/// Implementations must report *current* availability rather than a
/// snapshot: hosts are allowed to attach their bridge objects after the
/// engine has been constructed, and the engine re-queries this trait at the
/// top of every send path.
pub trait HostEnvironment: Send + Sync {
    /// The Android-style call surface, when attached.
    fn native_call_surface(&self) -> Option<Arc<dyn NativeCallSurface>>;

    /// The iOS-style message handler, when attached.
    fn message_handler(&self) -> Option<Arc<dyn MessageHandlerSurface>>;

    /// The user agent string, when the environment exposes one.
    fn user_agent(&self) -> Option<String>;
}

/// Environment with no detection surface at all.
///
/// Classifies as [`Platform::Unknown`]; calls made under it resolve with a
/// placeholder payload instead of reaching a host.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessEnvironment;

impl HostEnvironment for HeadlessEnvironment {
    fn native_call_surface(&self) -> Option<Arc<dyn NativeCallSurface>> {
        None
    }

    fn message_handler(&self) -> Option<Arc<dyn MessageHandlerSurface>> {
        None
    }

    fn user_agent(&self) -> Option<String> {
        None
    }
}

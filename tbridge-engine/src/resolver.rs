//! Platform resolution.

use tbridge_traits::{HostEnvironment, Platform};

/// Classify the current hosting environment.
///
/// First match wins: an attached native call surface beats an attached
/// message handler, which beats user-agent sniffing. A user agent that
/// matches neither host family classifies as generic web; no user agent at
/// all means the environment offers no detection surface (non-interactive
/// contexts) and degrades to [`Platform::Unknown`].
///
/// Total function: absence of signals degrades the classification, it never
/// raises. Evaluated freshly on every send because a host may attach its
/// bridge object after the engine was constructed.
pub fn resolve(env: &dyn HostEnvironment) -> Platform {
    if env.native_call_surface().is_some() {
        return Platform::Android;
    }
    if env.message_handler().is_some() {
        return Platform::Ios;
    }
    let Some(user_agent) = env.user_agent() else {
        return Platform::Unknown;
    };
    let user_agent = user_agent.to_ascii_lowercase();
    if user_agent.contains("android") {
        Platform::Android
    } else if ["iphone", "ipad", "ipod"]
        .iter()
        .any(|tag| user_agent.contains(tag))
    {
        Platform::Ios
    } else {
        Platform::Web
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tbridge_traits::{
        HeadlessEnvironment, MessageHandlerSurface, NativeCallSurface, OutboundMessage, Result,
    };

    struct NullSurface;

    #[async_trait]
    impl NativeCallSurface for NullSurface {
        async fn call_native(&self, _: &str, _: &str, _: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NullHandler;

    #[async_trait]
    impl MessageHandlerSurface for NullHandler {
        async fn post_message(&self, _: OutboundMessage) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubEnv {
        surface: Option<Arc<dyn NativeCallSurface>>,
        handler: Option<Arc<dyn MessageHandlerSurface>>,
        user_agent: Option<String>,
    }

    impl HostEnvironment for StubEnv {
        fn native_call_surface(&self) -> Option<Arc<dyn NativeCallSurface>> {
            self.surface.clone()
        }

        fn message_handler(&self) -> Option<Arc<dyn MessageHandlerSurface>> {
            self.handler.clone()
        }

        fn user_agent(&self) -> Option<String> {
            self.user_agent.clone()
        }
    }

    #[test]
    fn attached_surface_wins_over_user_agent() {
        let env = StubEnv {
            surface: Some(Arc::new(NullSurface)),
            user_agent: Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&env), Platform::Android);
    }

    #[test]
    fn attached_message_handler_classifies_as_ios() {
        let env = StubEnv {
            handler: Some(Arc::new(NullHandler)),
            ..Default::default()
        };
        assert_eq!(resolve(&env), Platform::Ios);
    }

    #[test]
    fn user_agent_sniffing_covers_both_host_families() {
        let android = StubEnv {
            user_agent: Some("Mozilla/5.0 (Linux; Android 14; Pixel 8)".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&android), Platform::Android);

        let ios = StubEnv {
            user_agent: Some("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&ios), Platform::Ios);
    }

    #[test]
    fn unmatched_user_agent_degrades_to_web() {
        let env = StubEnv {
            user_agent: Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/130.0".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&env), Platform::Web);
    }

    #[test]
    fn no_detection_surface_degrades_to_unknown() {
        assert_eq!(resolve(&HeadlessEnvironment), Platform::Unknown);
    }
}

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Out-of-band updates published by the core for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type", rename_all = "camelCase")]
pub enum CoreEvent {
    /// The payment was accepted but must be confirmed at `url` (3-D Secure and similar)
    PaymentVerificationNeeded { url: String },
}

/// Publish handle for [`CoreEvent`]s.
///
/// Fire-and-forget: there is no acknowledgment and a dropped receiver is not an error.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<CoreEvent>,
}

impl Notifier {
    pub fn new(tx: UnboundedSender<CoreEvent>) -> Self {
        Self { tx }
    }

    /// Create a notifier together with the receiving end the UI layer listens on.
    pub fn channel() -> (Self, UnboundedReceiver<CoreEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn notify(&self, event: CoreEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("Dropping core event, no listener: {:?}", e.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_delivers_event() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.notify(CoreEvent::PaymentVerificationNeeded {
            url: "https://pay.example/3ds".to_string(),
        });

        assert_eq!(
            rx.try_recv().unwrap(),
            CoreEvent::PaymentVerificationNeeded {
                url: "https://pay.example/3ds".to_string()
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_notify_without_listener_is_silent() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.notify(CoreEvent::PaymentVerificationNeeded {
            url: "https://pay.example".to_string(),
        });
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_value(CoreEvent::PaymentVerificationNeeded {
            url: "https://pay.example".to_string(),
        })
        .unwrap();
        assert_eq!(json["@type"], "paymentVerificationNeeded");
        assert_eq!(json["url"], "https://pay.example");
    }
}

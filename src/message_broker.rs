use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::menu_service::menu_models::MenuResponse;

/// Events the navigation controller exchanges with the application shell.
///
/// Inbound events drive the controller; `ClearForm` and
/// `IncompleteFormRequested` are outbound notifications for the form layer
/// and are ignored when the controller's own loop receives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavMessage {
    /// Show the list of available applications
    ListApps,

    /// Re-select the current app, dropping everything below it
    CurrentApp,

    /// Enter an application at its top-level menu
    SelectApp { app_id: String },

    /// Select a menu item on the current screen
    SelectMenu { index: u32 },

    /// Jump to a page of the current list screen
    Paginate { page: u64 },

    /// Filter the current list screen
    Search { term: String },

    /// Show the detail view of an entity on the current screen
    ShowDetail { index: usize },

    /// Show the list of stored sessions
    ListSessions,

    /// Resume an incomplete form by session id
    GetIncompleteForm { session_id: String },

    /// A menu response arrived from the server
    RenderResponse { response: MenuResponse },

    /// Roll the step path back to the given breadcrumb
    BreadcrumbSelect { index: usize },

    /// Outbound: any in-progress form must be torn down before navigating
    ClearForm,

    /// Outbound: the form layer should load this incomplete form
    IncompleteFormRequested { session_id: String },
}

/// Broadcast bus connecting the controller to the rest of the shell.
pub struct MessageBroker {
    sender: broadcast::Sender<NavMessage>,
}

impl MessageBroker {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Send a message to all subscribers
    pub fn send(&self, message: NavMessage) -> Result<(), broadcast::error::SendError<NavMessage>> {
        debug!("📨 Sending message: {:?}", message);
        self.sender.send(message).map(|_| ())
    }

    /// Subscribe to messages
    pub fn subscribe(&self) -> broadcast::Receiver<NavMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Clone for MessageBroker {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_reaches_all_subscribers() {
        let broker = MessageBroker::new(16);
        let mut a = broker.subscribe();
        let mut b = broker.subscribe();
        assert_eq!(broker.subscriber_count(), 2);

        broker.send(NavMessage::ListApps).unwrap();
        assert!(matches!(a.recv().await.unwrap(), NavMessage::ListApps));
        assert!(matches!(b.recv().await.unwrap(), NavMessage::ListApps));
    }

    #[test]
    fn test_send_without_subscribers_errors() {
        let broker = MessageBroker::new(16);
        assert!(broker.send(NavMessage::ListApps).is_err());
    }
}

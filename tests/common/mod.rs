// Each test target compiles this module separately and uses a subset of it
#![allow(dead_code)]

pub mod mock_menu_client;
pub mod recording_renderer;

use std::sync::Arc;

use session_nav::controller::NavigationController;
use session_nav::history::MemoryHistory;
use session_nav::message_broker::MessageBroker;

use mock_menu_client::MockMenuClient;
use recording_renderer::RecordingRenderer;

pub struct TestHarness {
    pub history: Arc<MemoryHistory>,
    pub client: Arc<MockMenuClient>,
    pub renderer: Arc<RecordingRenderer>,
    pub broker: MessageBroker,
    pub controller:
        Arc<NavigationController<MemoryHistory, MockMenuClient, RecordingRenderer>>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_client(MockMenuClient::new())
    }

    pub fn with_client(client: MockMenuClient) -> Self {
        let history = Arc::new(MemoryHistory::new());
        let client = Arc::new(client);
        let renderer = Arc::new(RecordingRenderer::new());
        let broker = MessageBroker::new(32);
        let controller = Arc::new(NavigationController::new(
            history.clone(),
            client.clone(),
            renderer.clone(),
            broker.clone(),
        ));
        Self {
            history,
            client,
            renderer,
            broker,
            controller,
        }
    }
}

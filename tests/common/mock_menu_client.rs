use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use session_nav::menu_service::menu_client::MenuClientTrait;
use session_nav::menu_service::menu_models::{
    AppSummary, CommandItem, MenuRequest, MenuResponse, SessionSummary,
};

/// Canned responses for the mock menu server
#[derive(Debug, Clone)]
pub struct MockResponses {
    pub apps: Vec<AppSummary>,
    pub sessions: Vec<SessionSummary>,
    /// Served in order, one per get_menu call; the last one repeats
    pub menus: Vec<MenuResponse>,
    /// Delay applied to the matching get_menu call, by call index
    pub menu_delays_ms: Vec<u64>,
    pub fail_menu: bool,
    pub fail_apps: bool,
}

impl Default for MockResponses {
    fn default() -> Self {
        Self {
            apps: vec![
                AppSummary {
                    id: "A1".to_string(),
                    name: Some("Village Health".to_string()),
                },
                AppSummary {
                    id: "A2".to_string(),
                    name: Some("Supply Chain".to_string()),
                },
            ],
            sessions: vec![SessionSummary {
                id: "session-1".to_string(),
                title: Some("Registration".to_string()),
                date_opened: Some("2024-05-01T10:00:00Z".to_string()),
            }],
            menus: vec![MenuResponse {
                commands: Some(vec![CommandItem {
                    display_text: Some("Case List".to_string()),
                    navigation_state: None,
                }]),
                title: Some("Home".to_string()),
                locales: vec!["en".to_string()],
                menu_session_id: Some("S1".to_string()),
                ..Default::default()
            }],
            menu_delays_ms: vec![],
            fail_menu: false,
            fail_apps: false,
        }
    }
}

/// Mock implementation of MenuClientTrait recording every request it serves
pub struct MockMenuClient {
    responses: Mutex<MockResponses>,
    menu_requests: Mutex<Vec<MenuRequest>>,
    call_count: Mutex<usize>,
}

impl MockMenuClient {
    pub fn new() -> Self {
        Self::with_responses(MockResponses::default())
    }

    pub fn with_responses(responses: MockResponses) -> Self {
        Self {
            responses: Mutex::new(responses),
            menu_requests: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    pub fn with_failure() -> Self {
        Self::with_responses(MockResponses {
            fail_menu: true,
            fail_apps: true,
            ..Default::default()
        })
    }

    /// Every menu request served so far, in order
    pub fn menu_requests(&self) -> Vec<MenuRequest> {
        self.menu_requests.lock().unwrap().clone()
    }

    pub fn menu_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl MenuClientTrait for MockMenuClient {
    async fn get_apps(&self) -> Result<Vec<AppSummary>> {
        let responses = self.responses.lock().unwrap().clone();
        if responses.fail_apps {
            return Err(anyhow!("mock transport failure: apps"));
        }
        Ok(responses.apps)
    }

    async fn get_menu(&self, request: &MenuRequest) -> Result<MenuResponse> {
        let (response, delay) = {
            let responses = self.responses.lock().unwrap();
            let mut count = self.call_count.lock().unwrap();
            let call_index = *count;
            *count += 1;
            self.menu_requests.lock().unwrap().push(request.clone());

            if responses.fail_menu {
                return Err(anyhow!("mock transport failure: menu"));
            }
            let response = responses
                .menus
                .get(call_index)
                .or_else(|| responses.menus.last())
                .cloned()
                .ok_or_else(|| anyhow!("mock has no menu responses"))?;
            let delay = responses.menu_delays_ms.get(call_index).copied().unwrap_or(0);
            (response, delay)
        };

        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(response)
    }

    async fn get_sessions(&self) -> Result<Vec<SessionSummary>> {
        Ok(self.responses.lock().unwrap().sessions.clone())
    }
}

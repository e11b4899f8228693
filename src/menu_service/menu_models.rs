use serde::{Deserialize, Serialize};

use crate::nav_state::NavigationState;

/// Parameters of a menu fetch, taken verbatim from the navigation state.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MenuRequest {
    #[serde(rename = "appId", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub steps: Vec<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl From<&NavigationState> for MenuRequest {
    fn from(state: &NavigationState) -> Self {
        Self {
            app_id: state.app_id.clone(),
            session_id: state.session_id.clone(),
            steps: state.steps.clone(),
            page: state.page,
            search: state.search.clone(),
        }
    }
}

/// One selectable command on a command screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandItem {
    #[serde(rename = "displayText")]
    pub display_text: Option<String>,
    #[serde(rename = "navigationState", skip_serializing_if = "Option::is_none")]
    pub navigation_state: Option<String>,
}

/// One row on an entity list screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntityItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// Raw menu response as the server sends it. Which of `commands`/`entities`
/// is present decides the screen kind; classification happens in
/// [`crate::screen::Screen::classify`], never here.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MenuResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<EntityItem>>,

    pub title: Option<String>,

    #[serde(default)]
    pub locales: Vec<String>,

    #[serde(rename = "menuSessionId", skip_serializing_if = "Option::is_none")]
    pub menu_session_id: Option<String>,
}

/// An application available to the current user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSummary {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppListResponse {
    #[serde(default)]
    pub apps: Vec<AppSummary>,
}

/// A stored (possibly incomplete) session on the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionSummary {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "dateOpened")]
    pub date_opened: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SessionListResponse {
    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
}

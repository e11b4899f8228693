//! The decoded representation of where the user currently is in the menu
//! hierarchy. The URL fragment is the only durable store for this state:
//! it is decoded at the start of every navigation event, mutated, re-encoded
//! and discarded.

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Navigation position within an app's menu hierarchy.
///
/// `steps` is the ordered path of selection indices taken through the menus.
/// It is append-only except for breadcrumb rollback, which truncates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    #[serde(rename = "appId", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl NavigationState {
    /// State for a freshly selected app: just the app id, nothing else.
    pub fn for_app(app_id: &str) -> Self {
        Self {
            app_id: Some(app_id.to_string()),
            ..Default::default()
        }
    }

    /// Steps are only meaningful underneath an app.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.app_id.is_none() && !self.steps.is_empty() {
            return Err(NavError::StepsWithoutApp);
        }
        Ok(())
    }

    /// Append a menu selection to the path.
    pub fn add_step(&mut self, index: u32) -> Result<(), NavError> {
        if self.app_id.is_none() {
            return Err(NavError::StepsWithoutApp);
        }
        self.steps.push(index);
        // A deeper selection invalidates pagination and search of the old list
        self.page = None;
        self.search = None;
        Ok(())
    }

    /// Roll the path back to `len` steps (breadcrumb selection).
    pub fn truncate_steps(&mut self, len: usize) {
        self.steps.truncate(len);
        self.page = None;
        self.search = None;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = Some(page);
    }

    pub fn set_search(&mut self, term: &str) {
        if term.is_empty() {
            self.search = None;
        } else {
            self.search = Some(term.to_string());
        }
        self.page = None;
    }

    /// The server session replaces any prior one, it is never merged.
    pub fn set_session_id(&mut self, session_id: Option<String>) {
        self.session_id = session_id;
    }

    /// Drop everything except the app selection.
    pub fn clear_except_app(&mut self) {
        let app_id = self.app_id.take();
        *self = Self {
            app_id,
            ..Default::default()
        };
    }
}

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use crate::menu_service::http_client::HttpClient;
use crate::menu_service::menu_models::{
    AppListResponse, AppSummary, MenuRequest, MenuResponse, SessionListResponse, SessionSummary,
};

/// Trait defining the interface for menu server operations
#[async_trait]
pub trait MenuClientTrait: Send + Sync {
    /// List the applications available to the current user
    async fn get_apps(&self) -> Result<Vec<AppSummary>>;

    /// Fetch the screen for a navigation position
    async fn get_menu(&self, request: &MenuRequest) -> Result<MenuResponse>;

    /// List the stored sessions of the current user
    async fn get_sessions(&self) -> Result<Vec<SessionSummary>>;
}

/// Menu server client backed by the shared [`HttpClient`]
pub struct MenuClient {
    http: HttpClient,
}

impl MenuClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MenuClientTrait for MenuClient {
    async fn get_apps(&self) -> Result<Vec<AppSummary>> {
        info!("Fetching app list");
        let response: AppListResponse = self.http.get("apps").await?;
        debug!("Got {} apps", response.apps.len());
        Ok(response.apps)
    }

    async fn get_menu(&self, request: &MenuRequest) -> Result<MenuResponse> {
        info!(
            "Fetching menu for app {:?}, steps {:?}, page {:?}",
            request.app_id, request.steps, request.page
        );
        self.http.post("navigate", request).await
    }

    async fn get_sessions(&self) -> Result<Vec<SessionSummary>> {
        info!("Fetching session list");
        let response: SessionListResponse = self.http.get("sessions").await?;
        debug!("Got {} sessions", response.sessions.len());
        Ok(response.sessions)
    }
}

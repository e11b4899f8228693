//! The navigation controller.
//!
//! The invariant this type maintains: the visible screen always corresponds
//! to the navigation state encoded in the current URL fragment. Every
//! operation that changes navigation intent re-encodes the fragment before
//! (or alongside) issuing the fetch for the next screen.
//!
//! All collaborators are injected: the history store, the menu client and
//! the renderer are constructor parameters, and the event bus is a handle,
//! not an ambient global.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::error::NavError;
use crate::fragment::{self, HOME_FRAGMENT};
use crate::history::History;
use crate::menu_service::menu_client::MenuClientTrait;
use crate::menu_service::menu_models::{MenuRequest, MenuResponse};
use crate::message_broker::{MessageBroker, NavMessage};
use crate::nav_state::NavigationState;
use crate::renderer::Renderer;
use crate::screen::Screen;

pub struct NavigationController<H, C, R>
where
    H: History,
    C: MenuClientTrait,
    R: Renderer,
{
    history: Arc<H>,
    client: Arc<C>,
    renderer: Arc<R>,
    broker: MessageBroker,
    // Bumped on every issued fetch; a response whose snapshot is older than
    // the counter belongs to a superseded navigation and is dropped
    generation: AtomicU64,
}

impl<H, C, R> NavigationController<H, C, R>
where
    H: History,
    C: MenuClientTrait,
    R: Renderer,
{
    pub fn new(history: Arc<H>, client: Arc<C>, renderer: Arc<R>, broker: MessageBroker) -> Self {
        Self {
            history,
            client,
            renderer,
            broker,
            generation: AtomicU64::new(0),
        }
    }

    /// Subscribe to the bus and handle navigation events until it closes.
    pub async fn run(&self) -> Result<(), NavError> {
        let mut receiver = self.broker.subscribe();
        info!("🚀 Starting navigation controller loop");

        while let Ok(message) = receiver.recv().await {
            debug!("📨 Handling message: {:?}", message);
            if let Err(e) = self.handle(message).await {
                error!("❌ Navigation event failed: {}", e);
            }
        }

        Ok(())
    }

    /// Dispatch a single navigation event.
    pub async fn handle(&self, message: NavMessage) -> Result<(), NavError> {
        match message {
            NavMessage::ListApps => self.list_apps().await,
            NavMessage::CurrentApp => self.current_app().await,
            NavMessage::SelectApp { app_id } => self.select_app(&app_id).await,
            NavMessage::SelectMenu { index } => self.select_menu(index).await,
            NavMessage::Paginate { page } => self.paginate(page).await,
            NavMessage::Search { term } => self.search(&term).await,
            NavMessage::ShowDetail { index } => {
                self.show_detail(index);
                Ok(())
            }
            NavMessage::ListSessions => self.list_sessions().await,
            NavMessage::GetIncompleteForm { session_id } => {
                self.get_incomplete_form(&session_id);
                Ok(())
            }
            NavMessage::RenderResponse { response } => self.render_response(response).await,
            NavMessage::BreadcrumbSelect { index } => self.breadcrumb_select(index).await,
            // Outbound notifications for other subscribers
            NavMessage::ClearForm | NavMessage::IncompleteFormRequested { .. } => Ok(()),
        }
    }

    /// Clear any in-progress form, go to the root fragment and show the list
    /// of available applications.
    pub async fn list_apps(&self) -> Result<(), NavError> {
        self.announce(NavMessage::ClearForm);
        self.history.navigate(HOME_FRAGMENT);
        let apps = self
            .client
            .get_apps()
            .await
            .map_err(NavError::Transport)?;
        self.renderer.show_apps(&apps);
        Ok(())
    }

    /// Enter an application at its top-level menu.
    pub async fn select_app(&self, app_id: &str) -> Result<(), NavError> {
        let state = NavigationState::for_app(app_id);
        self.navigate_to(&state)?;
        self.issue_menu_fetch(&state).await
    }

    /// Re-select the current app, dropping steps, pagination and search.
    pub async fn current_app(&self) -> Result<(), NavError> {
        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        // Re-selecting the app drops steps, pagination, search and session
        state.clear_except_app();
        match state.app_id.take() {
            Some(app_id) => self.select_app(&app_id).await,
            // No app selected; the root screen is the app list
            None => self.list_apps().await,
        }
    }

    /// Fetch the screen for whatever the current fragment encodes.
    pub async fn list_menus(&self) -> Result<(), NavError> {
        self.announce(NavMessage::ClearForm);
        let Some(state) = self.current_state().await? else {
            return Ok(());
        };
        self.issue_menu_fetch(&state).await
    }

    /// Append a menu selection to the path and re-fetch.
    pub async fn select_menu(&self, index: u32) -> Result<(), NavError> {
        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        state.add_step(index)?;
        self.navigate_to(&state)?;
        self.list_menus().await
    }

    /// Jump to a page of the current list screen and re-fetch.
    pub async fn paginate(&self, page: u64) -> Result<(), NavError> {
        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        state.set_page(page);
        self.navigate_to(&state)?;
        self.list_menus().await
    }

    /// Filter the current list screen and re-fetch.
    pub async fn search(&self, term: &str) -> Result<(), NavError> {
        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        state.set_search(term);
        self.navigate_to(&state)?;
        self.list_menus().await
    }

    /// Roll the step path back to `index` steps and re-fetch.
    pub async fn breadcrumb_select(&self, index: usize) -> Result<(), NavError> {
        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        state.truncate_steps(index);
        self.navigate_to(&state)?;
        self.list_menus().await
    }

    /// Classify a server response, bind the (possibly new) session id into
    /// the fragment and hand the screen to the renderer.
    pub async fn render_response(&self, response: MenuResponse) -> Result<(), NavError> {
        let screen = Screen::classify(response)?;

        let Some(mut state) = self.current_state().await? else {
            return Ok(());
        };
        state.set_session_id(screen.meta().session_id.clone());
        self.navigate_to(&state)?;

        self.renderer.show_menu(&screen);
        Ok(())
    }

    pub fn show_detail(&self, index: usize) {
        self.renderer.show_detail(index);
    }

    /// List the user's stored sessions.
    pub async fn list_sessions(&self) -> Result<(), NavError> {
        let sessions = self
            .client
            .get_sessions()
            .await
            .map_err(NavError::Transport)?;
        self.renderer.show_sessions(&sessions);
        Ok(())
    }

    /// The form layer owns incomplete forms; just announce the request.
    pub fn get_incomplete_form(&self, session_id: &str) {
        self.announce(NavMessage::IncompleteFormRequested {
            session_id: session_id.to_string(),
        });
    }

    /// Decode the current fragment. On a malformed fragment the recovery is
    /// explicit: warn, redirect to the app list and report no state.
    async fn current_state(&self) -> Result<Option<NavigationState>, NavError> {
        let current = self.history.current_fragment();
        match fragment::decode(&current) {
            Ok(state) => Ok(Some(state)),
            Err(e) if e.is_state_error() => {
                warn!("Unusable fragment {:?} ({}), returning to app list", current, e);
                self.list_apps().await?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Re-encode the state into the fragment; the URL mutation is the
    /// observable side effect of every navigation-intent change.
    fn navigate_to(&self, state: &NavigationState) -> Result<(), NavError> {
        let encoded = fragment::encode(state)?;
        self.history.navigate(&encoded);
        Ok(())
    }

    /// Fetch the screen for `state`, dropping the response if a newer
    /// navigation was issued while it was in flight.
    async fn issue_menu_fetch(&self, state: &NavigationState) -> Result<(), NavError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = MenuRequest::from(state);

        let response = self
            .client
            .get_menu(&request)
            .await
            .map_err(NavError::Transport)?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Dropping stale menu response for generation {}", generation);
            return Ok(());
        }
        self.render_response(response).await
    }

    fn announce(&self, message: NavMessage) {
        // No subscribers is fine; the shell may not be listening yet
        if self.broker.send(message).is_err() {
            debug!("No subscribers for outbound navigation message");
        }
    }
}

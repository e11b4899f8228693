use std::sync::Mutex;

use session_nav::menu_service::menu_models::{AppSummary, SessionSummary};
use session_nav::renderer::Renderer;
use session_nav::screen::Screen;

/// Everything the controller asked to render, in order
#[derive(Debug, Clone)]
pub enum Rendered {
    Apps(Vec<AppSummary>),
    Menu(Screen),
    Sessions(Vec<SessionSummary>),
    Detail(usize),
}

pub struct RecordingRenderer {
    rendered: Mutex<Vec<Rendered>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
        }
    }

    pub fn rendered(&self) -> Vec<Rendered> {
        self.rendered.lock().unwrap().clone()
    }

    /// The menu screens rendered so far, in order
    pub fn menu_screens(&self) -> Vec<Screen> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::Menu(screen) => Some(screen),
                _ => None,
            })
            .collect()
    }

    pub fn app_lists(&self) -> Vec<Vec<AppSummary>> {
        self.rendered()
            .into_iter()
            .filter_map(|r| match r {
                Rendered::Apps(apps) => Some(apps),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn show_apps(&self, apps: &[AppSummary]) {
        self.rendered.lock().unwrap().push(Rendered::Apps(apps.to_vec()));
    }

    fn show_menu(&self, screen: &Screen) {
        self.rendered.lock().unwrap().push(Rendered::Menu(screen.clone()));
    }

    fn show_sessions(&self, sessions: &[SessionSummary]) {
        self.rendered
            .lock()
            .unwrap()
            .push(Rendered::Sessions(sessions.to_vec()));
    }

    fn show_detail(&self, index: usize) {
        self.rendered.lock().unwrap().push(Rendered::Detail(index));
    }
}

//! Rendering collaborator. Presentation is outside this crate; the
//! controller hands classified screens to whatever implements [`Renderer`].

use crate::menu_service::menu_models::{AppSummary, SessionSummary};
use crate::screen::Screen;

pub trait Renderer: Send + Sync {
    fn show_apps(&self, apps: &[AppSummary]);
    fn show_menu(&self, screen: &Screen);
    fn show_sessions(&self, sessions: &[SessionSummary]);
    fn show_detail(&self, index: usize);
}

/// Plain-text renderer for the command line binary.
pub struct StdoutRenderer;

impl StdoutRenderer {
    fn app_line(index: usize, app: &AppSummary) -> String {
        format!(
            "  [{}] {} ({})",
            index,
            app.name.as_deref().unwrap_or("<unnamed>"),
            app.id
        )
    }

    fn menu_header(screen: &Screen) -> String {
        format!(
            "{} - {} screen, {} items",
            screen.meta().title.as_deref().unwrap_or("<untitled>"),
            screen.kind(),
            screen.len()
        )
    }

    fn session_line(session: &SessionSummary) -> String {
        format!(
            "  {} - {} ({})",
            session.id,
            session.title.as_deref().unwrap_or("<untitled>"),
            session.date_opened.as_deref().unwrap_or("unknown date")
        )
    }
}

impl Renderer for StdoutRenderer {
    fn show_apps(&self, apps: &[AppSummary]) {
        println!("Applications ({}):", apps.len());
        for (index, app) in apps.iter().enumerate() {
            println!("{}", Self::app_line(index, app));
        }
    }

    fn show_menu(&self, screen: &Screen) {
        println!("{}", Self::menu_header(screen));
        match screen {
            Screen::Commands { items, .. } => {
                for (index, item) in items.iter().enumerate() {
                    println!("  [{}] {}", index, item.display_text.as_deref().unwrap_or("<blank>"));
                }
            }
            Screen::Entities { items, .. } => {
                for (index, item) in items.iter().enumerate() {
                    println!("  [{}] {}", index, item.id);
                }
            }
        }
    }

    fn show_sessions(&self, sessions: &[SessionSummary]) {
        println!("Sessions ({}):", sessions.len());
        for session in sessions {
            println!("{}", Self::session_line(session));
        }
    }

    fn show_detail(&self, index: usize) {
        println!("Detail view for item {}", index);
    }
}

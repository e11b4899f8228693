//! Classification of server responses into an explicit screen type.
//!
//! The wire format tags screens by field presence only; the enum here is the
//! single place where that is decided, so nothing downstream ever inspects
//! the raw response again.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::menu_service::menu_models::{CommandItem, EntityItem, MenuResponse};

/// Metadata shared by both screen kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenMeta {
    pub title: Option<String>,
    pub locales: Vec<String>,
    pub session_id: Option<String>,
}

/// A server-described screen, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Screen {
    Commands {
        items: Vec<CommandItem>,
        meta: ScreenMeta,
    },
    Entities {
        items: Vec<EntityItem>,
        meta: ScreenMeta,
    },
}

impl Screen {
    /// Decide the screen kind from the response. `commands` takes precedence
    /// when both fields are present; neither present is an error, never an
    /// empty entity list.
    pub fn classify(response: MenuResponse) -> Result<Self, NavError> {
        let meta = ScreenMeta {
            title: response.title,
            locales: response.locales,
            session_id: response.menu_session_id,
        };
        if let Some(items) = response.commands {
            return Ok(Screen::Commands { items, meta });
        }
        if let Some(items) = response.entities {
            return Ok(Screen::Entities { items, meta });
        }
        Err(NavError::UnclassifiedScreen)
    }

    pub fn meta(&self) -> &ScreenMeta {
        match self {
            Screen::Commands { meta, .. } => meta,
            Screen::Entities { meta, .. } => meta,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Screen::Commands { .. } => "commands",
            Screen::Entities { .. } => "entities",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Screen::Commands { items, .. } => items.len(),
            Screen::Entities { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

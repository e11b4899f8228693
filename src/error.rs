//! Error taxonomy for the navigation layer.

use thiserror::Error;

/// Failures the navigation controller distinguishes and recovers from.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("URL fragment could not be decoded: {0}")]
    MalformedFragment(String),

    #[error("navigation state carries steps but no app id")]
    StepsWithoutApp,

    #[error("menu request failed: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("server response has neither commands nor entities")]
    UnclassifiedScreen,
}

impl NavError {
    /// True for fragment-level failures, which the controller answers by
    /// redirecting to the app list.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            NavError::MalformedFragment(_) | NavError::StepsWithoutApp
        )
    }
}

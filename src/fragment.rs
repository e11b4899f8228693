//! URL fragment codec for [`NavigationState`].
//!
//! The state is serialized to JSON and wrapped in URL-safe unpadded base64 so
//! the whole thing travels as a single opaque token in the address bar. The
//! codec must be lossless for every field the state carries.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::error::NavError;
use crate::nav_state::NavigationState;

/// Fragment of the app-list screen, the root of every navigation.
pub const HOME_FRAGMENT: &str = "/";

pub fn encode(state: &NavigationState) -> Result<String, NavError> {
    state.validate()?;
    let json = serde_json::to_vec(state)
        .map_err(|e| NavError::MalformedFragment(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode(fragment: &str) -> Result<NavigationState, NavError> {
    if fragment.is_empty() || fragment == HOME_FRAGMENT {
        return Ok(NavigationState::default());
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(fragment)
        .map_err(|e| NavError::MalformedFragment(e.to_string()))?;
    let state: NavigationState = serde_json::from_slice(&bytes)
        .map_err(|e| NavError::MalformedFragment(e.to_string()))?;
    state.validate()?;
    Ok(state)
}

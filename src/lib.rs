//! Client-side navigation core for a menu-driven form server.
//!
//! Keeps the visible screen in lockstep with the navigation state encoded in
//! the current URL fragment, and drives the fetch/render cycle for new
//! screens. Presentation, history storage and the event bus are all injected
//! collaborators.

pub mod config;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod history;
pub mod log_appender;
pub mod menu_service;
pub mod message_broker;
pub mod nav_state;
pub mod renderer;
pub mod screen;

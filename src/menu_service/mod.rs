//! Remote menu API: HTTP plumbing, wire models and the typed client.

pub mod http_client;
pub mod menu_client;
pub mod menu_models;

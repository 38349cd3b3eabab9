//! REST API handlers, request/response types, and error mapping.

pub mod auth;
pub mod error;
pub mod inventory;
pub mod items;
pub mod users;

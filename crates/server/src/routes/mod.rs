//! HTTP route handlers.

pub mod api;
pub mod author;
pub mod edition;
pub mod health;
mod helpers;
pub mod titles;

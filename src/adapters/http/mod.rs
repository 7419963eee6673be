//! HTTP adapters - axum routers for the public site.

pub mod pages;

pub use pages::{pages_router, PagesAppState};

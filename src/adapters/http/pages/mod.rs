//! Pages HTTP adapter module.
//!
//! Serves the public page routes. Each route resolves its canonical form and
//! either redirects to it or returns the view model as JSON.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{PagesApiError, PagesAppState};
pub use routes::pages_router;

//! HTTP transport for Shortly.
//!
//! Exposes `POST /api/v1/shorten` and `GET /{id}` on top of the shortening
//! and resolution services.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;

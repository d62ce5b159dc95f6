mod health;
mod link;

pub use health::health_handler;
pub use link::{method_not_allowed_handler, missing_id_handler, redirect_handler, shorten_handler};

use std::sync::Arc;

use shortly_core::Shortener;
use shortly_redirector::Redirector;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    default_host: String,
}

impl AppState {
    /// `default_host` is used for short URLs when a request carries no
    /// `Host` header.
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        default_host: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            default_host: default_host.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn default_host(&self) -> &str {
        &self.default_host
    }
}

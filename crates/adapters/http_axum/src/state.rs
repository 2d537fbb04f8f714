//! Shared application state for axum handlers.

use std::sync::Arc;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};
use smartstay_app::services::home_service::HomeService;
use smartstay_app::services::newsletter_service::NewsletterService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<HR, NR> {
    /// Home-state store operations.
    pub home_service: Arc<HomeService<HR>>,
    /// Newsletter subscription operations.
    pub newsletter_service: Arc<NewsletterService<NR>>,
}

impl<HR, NR> Clone for AppState<HR, NR> {
    fn clone(&self) -> Self {
        Self {
            home_service: Arc::clone(&self.home_service),
            newsletter_service: Arc::clone(&self.newsletter_service),
        }
    }
}

impl<HR, NR> AppState<HR, NR>
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(home_service: HomeService<HR>, newsletter_service: NewsletterService<NR>) -> Self {
        Self {
            home_service: Arc::new(home_service),
            newsletter_service: Arc::new(newsletter_service),
        }
    }
}

//! Newsletter service — subscription use-cases for the marketing site.

use smartstay_domain::error::SmartStayError;
use smartstay_domain::newsletter::Subscription;

use crate::ports::NewsletterRepository;

/// Application service for newsletter subscriptions.
pub struct NewsletterService<R> {
    repo: R,
}

impl<R: NewsletterRepository> NewsletterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and record a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`SmartStayError::Validation`] when the address is malformed,
    /// or a storage error from the repository.
    pub async fn subscribe(&self, email: &str) -> Result<(), SmartStayError> {
        let subscription = Subscription::new(email)?;
        self.repo.add(subscription.email).await
    }

    /// List every recorded address.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn subscriptions(&self) -> Result<Vec<String>, SmartStayError> {
        self.repo.list().await
    }
}

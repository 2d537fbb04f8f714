//! Mutex-guarded newsletter subscription list.

use std::sync::Mutex;

use smartstay_app::ports::NewsletterRepository;
use smartstay_domain::error::{SmartStayError, StorageError};

/// In-process [`NewsletterRepository`] implementation. Addresses are kept
/// de-duplicated in insertion order.
#[derive(Default)]
pub struct MemoryNewsletterRepository {
    emails: Mutex<Vec<String>>,
}

impl NewsletterRepository for MemoryNewsletterRepository {
    async fn add(&self, email: String) -> Result<(), SmartStayError> {
        let mut emails = self.emails.lock().map_err(|_| StorageError::LockPoisoned)?;
        if !emails.contains(&email) {
            emails.push(email);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, SmartStayError> {
        let emails = self
            .emails
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .clone();
        Ok(emails)
    }
}

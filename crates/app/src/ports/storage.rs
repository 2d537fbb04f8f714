//! Storage ports — snapshot access to the in-process state.
//!
//! The home state is small enough to move wholesale: a mutation is a
//! load → mutate → replace round-trip, which keeps every rule in the domain
//! crate and leaves adapters with nothing but storage.

use std::future::Future;

use smartstay_domain::error::SmartStayError;
use smartstay_domain::home::HomeState;

/// Access to the single canonical [`HomeState`] snapshot.
pub trait HomeStateRepository {
    /// Load a copy of the current state.
    fn load(&self) -> impl Future<Output = Result<HomeState, SmartStayError>> + Send;

    /// Replace the stored state wholesale.
    fn replace(&self, state: HomeState) -> impl Future<Output = Result<(), SmartStayError>> + Send;
}

/// Storage for newsletter subscriptions (de-duplicated by address).
pub trait NewsletterRepository {
    /// Record an address. Recording the same address twice is not an error.
    fn add(&self, email: String) -> impl Future<Output = Result<(), SmartStayError>> + Send;

    /// List every recorded address in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<String>, SmartStayError>> + Send;
}

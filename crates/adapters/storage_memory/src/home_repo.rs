//! Mutex-guarded holder of the canonical [`HomeState`].

use std::sync::Mutex;

use smartstay_app::ports::HomeStateRepository;
use smartstay_domain::error::{SmartStayError, StorageError};
use smartstay_domain::home::HomeState;

/// In-process [`HomeStateRepository`] implementation.
pub struct MemoryHomeStateRepository {
    state: Mutex<HomeState>,
}

impl MemoryHomeStateRepository {
    /// Create a repository seeded with the given state.
    #[must_use]
    pub fn new(initial: HomeState) -> Self {
        Self {
            state: Mutex::new(initial),
        }
    }
}

impl Default for MemoryHomeStateRepository {
    fn default() -> Self {
        Self::new(HomeState::default_layout())
    }
}

impl HomeStateRepository for MemoryHomeStateRepository {
    async fn load(&self) -> Result<HomeState, SmartStayError> {
        let state = self
            .state
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .clone();
        Ok(state)
    }

    async fn replace(&self, state: HomeState) -> Result<(), SmartStayError> {
        *self.state.lock().map_err(|_| StorageError::LockPoisoned)? = state;
        Ok(())
    }
}

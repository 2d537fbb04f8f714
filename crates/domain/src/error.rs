//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`. Unknown
//! room/device/schedule references are deliberately *not* errors: the store
//! treats them as silent no-ops and returns the unchanged state.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartStayError {
    /// Input failed schema or invariant validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Input failed validation against the domain schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Scene path segment did not name a known scene.
    #[error("unknown scene `{0}`")]
    UnknownScene(String),

    /// Thermostat temperature outside the supported range.
    #[error("temperature {0} is outside the supported range 16..=30")]
    TemperatureOutOfRange(f64),

    /// Schedule time did not match the `HH:MM` format.
    #[error("invalid schedule time `{0}`, expected HH:MM")]
    InvalidTime(String),

    /// Newsletter subscription email is not a plausible address.
    #[error("invalid email address `{0}`")]
    InvalidEmail(String),
}

/// The storage adapter failed in a way the caller cannot recover from.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The in-process state lock was poisoned by a panicking writer.
    #[error("state lock poisoned")]
    LockPoisoned,
}

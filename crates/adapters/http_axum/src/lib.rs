//! # smartstay-adapter-http-axum
//!
//! HTTP adapter — translates the REST surface into application-service calls.
//!
//! ## Responsibilities
//! - Assemble the axum router (`/health`, `/api/…`)
//! - Map domain errors to HTTP status codes and the `{error, details?}` body
//! - Validate payloads at the edge before any mutation happens
//!
//! Handlers are generic over the repository types carried by
//! [`state::AppState`], mirroring the application layer's constructor
//! injection and avoiding dynamic dispatch.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

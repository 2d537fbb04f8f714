//! # smartstay-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HomeStateRepository` — load/replace the single home-state snapshot
//!   - `NewsletterRepository` — record and list newsletter subscriptions
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HomeService` — every store operation, each returning the full updated state
//!   - `NewsletterService` — subscribe, list subscriptions
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `smartstay-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

//! # smartstay-domain
//!
//! Pure domain model for the smartstay simulated smart-home backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (lights, thermostats, appliances) and **Rooms**
//! - Define the **`HomeState`** aggregate and every mutation the store exposes
//! - Define **Scenes** and the single source of scene-action derivation
//! - Define **Schedules** (stored intent; never executed)
//! - Contain all invariant enforcement (thermostat clamping, format checks)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod home;
pub mod newsletter;
pub mod scene;
pub mod schedule;

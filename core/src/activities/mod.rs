//! In-memory roster of extracurricular activities.
//!
//! Activities keep their insertion order so listings are stable, and
//! signups are idempotent per email.

pub mod types;
mod catalog;


pub use types::{Activity, ActivityRoster, RosterError, SignupOutcome};

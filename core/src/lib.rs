//! Arithmetic expression evaluation plus the activity roster and demo
//! sessions served by the backend.

pub mod activities;
pub mod auth;
pub mod expression;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

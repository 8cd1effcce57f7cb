// OpenSSL-backed TrustEngine - re-exports all public interfaces

mod constants;
mod identity;
mod usage;
mod engine;

pub use constants::{field_for_error, is_fatal_error};
pub use identity::{parse_identity, Identity};
pub use engine::*;

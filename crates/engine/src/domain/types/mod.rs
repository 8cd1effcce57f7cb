// Re-export all types so callers can use `domain::types::*`

pub use self::core::*;
pub use bytes::*;
pub use trust::*;
pub use config::*;

// Module declarations
mod core;
mod bytes;
mod trust;
mod config;

pub mod diagnostics;
pub mod error;
pub mod trust_engine;
pub mod types;

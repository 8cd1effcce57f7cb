//! Concrete `TrustEngine` bindings.

#[cfg(feature = "openssl")]
pub mod openssl;

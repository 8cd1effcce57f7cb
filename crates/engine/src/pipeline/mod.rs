//! The five pipeline stages, leaf first. Each stage is generic over the
//! `TrustEngine` doing the actual work.

pub mod builder;
pub mod decoder;
pub mod evaluator;
pub mod policy;
pub mod reporter;

pub use builder::CertificateChain;
pub use evaluator::TrustEvaluator;
pub use policy::TrustPolicy;
pub use reporter::{DiagnosticsReporter, SEPARATOR};

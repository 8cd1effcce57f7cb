// crates/engine/src/domain/trust_engine.rs

use super::diagnostics::CertificateProperties;
use super::error::EngineResult;
use super::types::{PolicyKind, PolicyProperties, RawCertificateBytes, TrustVerdict};

/// Trait implemented by trust-evaluation backends (OpenSSL today).
///
/// Every associated type is an owned handle: dropping it releases the
/// engine resource, cloning a certificate retains it.
pub trait TrustEngine {
    type Certificate: Clone;
    type Chain;
    type Policy;
    type Context;

    /// Parse one DER certificate. A rejected encoding is `Ok(None)`;
    /// `Err` is reserved for the engine failing to wrap the bytes at all.
    fn decode(&self, der: RawCertificateBytes<'_>) -> EngineResult<Option<Self::Certificate>>;

    /// Assemble handles into a chain container, order preserved.
    fn build_chain(&self, certs: &[Self::Certificate]) -> EngineResult<Self::Chain>;

    fn make_policy(&self, kind: PolicyKind, properties: &PolicyProperties) -> EngineResult<Self::Policy>;

    fn create_context(&self, chain: &Self::Chain, policy: &Self::Policy) -> EngineResult<Self::Context>;

    /// Blocking evaluation. `Err` means the call itself failed, not that the
    /// chain is untrusted.
    fn evaluate(&self, context: &mut Self::Context) -> EngineResult<TrustVerdict>;

    /// Per-certificate diagnostic properties of an evaluated context.
    fn properties(&self, context: &Self::Context) -> EngineResult<Vec<CertificateProperties>>;
}

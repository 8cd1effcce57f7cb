//! ChainBuilder: purely structural assembly of decoded handles.

use tracing::debug;

use crate::domain::error::EngineResult;
use crate::domain::trust_engine::TrustEngine;

/// A presented chain: index 0 is the leaf, the last entry the trust anchor.
/// The order is the caller's, not necessarily the path the engine verifies.
#[derive(Debug)]
pub struct CertificateChain<C> {
    handle: C,
    len: usize,
}

impl<C> CertificateChain<C> {
    pub fn handle(&self) -> &C {
        &self.handle
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Hand `certs` to the engine as one chain. Order and count are not checked
/// here; whether the chain makes sense is decided at evaluation time.
pub fn build<E: TrustEngine>(engine: &E, certs: &[E::Certificate]) -> EngineResult<CertificateChain<E::Chain>> {
    let handle = engine.build_chain(certs)?;
    debug!(len = certs.len(), "built certificate chain");
    Ok(CertificateChain { handle, len: certs.len() })
}

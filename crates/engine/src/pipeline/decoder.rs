//! CertificateDecoder: raw DER buffers in, engine certificate handles out.

use tracing::debug;

use crate::domain::error::{EngineError, EngineResult};
use crate::domain::trust_engine::TrustEngine;
use crate::domain::types::{LimitsConfig, RawCertificateBytes};

/// Decode the buffer at `index` of the presented chain.
///
/// An engine that declines the encoding (`Ok(None)`) is reported as
/// `MalformedCertificate`, never passed on as an empty handle.
pub fn decode<E: TrustEngine>(
    engine: &E,
    index: usize,
    bytes: RawCertificateBytes<'_>,
) -> EngineResult<E::Certificate> {
    match engine.decode(bytes)? {
        Some(cert) => {
            debug!(index, len = bytes.as_slice().len(), "decoded certificate");
            Ok(cert)
        }
        None => Err(EngineError::MalformedCertificate { index }),
    }
}

/// Decode every buffer in presentation order, stopping at the first failure.
/// Handles decoded before the failure are dropped on the way out.
pub fn decode_all<E: TrustEngine>(
    engine: &E,
    buffers: &[&[u8]],
    limits: &LimitsConfig,
) -> EngineResult<Vec<E::Certificate>> {
    let mut certs = Vec::with_capacity(buffers.len());
    for (index, buf) in buffers.iter().enumerate() {
        let view = RawCertificateBytes::new(buf, limits)?;
        certs.push(decode(engine, index, view)?);
    }
    Ok(certs)
}

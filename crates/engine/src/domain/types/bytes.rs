use crate::domain::error::{EngineError, EngineResult};

use super::config::LimitsConfig;

/// Borrowed, read-only view over the DER encoding of one certificate.
///
/// The view never copies the buffer; it only lives as long as the decode call
/// that consumes it.
#[derive(Clone, Copy)]
pub struct RawCertificateBytes<'a> {
    data: &'a [u8],
}

impl<'a> RawCertificateBytes<'a> {
    pub fn new(data: &'a [u8], limits: &LimitsConfig) -> EngineResult<Self> {
        if data.is_empty() {
            return Err(EngineError::Allocation(
                "cannot wrap a zero-length certificate buffer".into(),
            ));
        }
        if data.len() > limits.max_certificate_size {
            return Err(EngineError::Allocation(format!(
                "certificate buffer of {} bytes exceeds the {} byte limit",
                data.len(),
                limits.max_certificate_size
            )));
        }
        Ok(Self { data })
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

}

impl std::fmt::Debug for RawCertificateBytes<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawCertificateBytes")
            .field("data_len", &self.data.len())
            .finish()
    }
}

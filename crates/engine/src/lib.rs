// crates/engine/src/lib.rs

//! Public facade for the IPsec trust engine.
//! Runs a presented certificate chain through decode → build → policy →
//! evaluate → report, against any `TrustEngine` (OpenSSL by default).

pub mod adapters;
pub mod domain;
pub mod pipeline;

use std::io::Write;

use tracing::debug;

pub use domain::trust_engine::TrustEngine;
use pipeline::{builder, decoder, policy, DiagnosticsReporter, TrustEvaluator};

/// Run the whole pipeline with `engine`.
///
/// `Ok(())` means the chain was trusted. An untrusted chain is
/// `Err(EngineError::ChainValidation)`, after its diagnostics were written to
/// `out`; every other error means the check could not be completed.
pub fn check_chain<E: TrustEngine, W: Write>(
    engine: &E,
    request: &CheckRequest<'_>,
    out: W,
) -> EngineResult<()> {
    if request.identity.is_empty() {
        return Err(EngineError::Usage("identity must not be empty".into()));
    }
    if request.certificates.is_empty() {
        return Err(EngineError::Usage("at least one certificate is required".into()));
    }
    if request.certificates.len() > request.limits.max_chain_length {
        return Err(EngineError::Usage(format!(
            "chain of {} certificates exceeds the limit of {}",
            request.certificates.len(),
            request.limits.max_chain_length
        )));
    }
    debug!(identity = request.identity, certificates = request.certificates.len(), "checking chain");

    let certs = decoder::decode_all(engine, &request.certificates, &request.limits)?;
    let chain = builder::build(engine, &certs)?;
    let policy = policy::make_policy(engine, request.identity)?;

    let mut reporter = DiagnosticsReporter::new(out, request.format);
    TrustEvaluator::new(engine).evaluate(&chain, &policy, &mut reporter)
}

/// `check_chain` with the OpenSSL binding configured by `config`.
pub fn check_ipsec_chain<W: Write>(
    request: &CheckRequest<'_>,
    config: EvaluationConfig,
    out: W,
) -> EngineResult<()> {
    #[cfg(not(feature = "openssl"))]
    {
        let _ = (request, config, out);
        return Err(EngineError::Feature("openssl"));
    }
    #[cfg(feature = "openssl")]
    {
        let engine = adapters::openssl::OpensslEngine::new(config)?;
        check_chain(&engine, request, out)
    }
}

// Re-exports for convenience
pub use domain::diagnostics::{CertificateProperties, DiagnosticRecord, Property, PropertyValue};
pub use domain::error::{EngineError, EngineResult, ExitStatus};
pub use domain::types::{
    AnchorSource, CheckRequest, EngineDefaults, EvaluationConfig, LimitsConfig, PolicyKind, PolicyProperties,
    RawCertificateBytes, ReportFormat, TrustVerdict,
};
pub use pipeline::SEPARATOR;
#[cfg(feature = "openssl")]
pub use adapters::openssl::OpensslEngine;

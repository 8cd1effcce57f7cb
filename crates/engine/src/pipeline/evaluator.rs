//! TrustEvaluator: create context, evaluate, and on anything short of
//! `Proceed` report diagnostics and fail the chain.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::domain::diagnostics::DiagnosticRecord;
use crate::domain::error::{EngineError, EngineResult};
use crate::domain::trust_engine::TrustEngine;

use super::builder::CertificateChain;
use super::policy::TrustPolicy;
use super::reporter::DiagnosticsReporter;

pub struct TrustEvaluator<'e, E: TrustEngine> {
    engine: &'e E,
}

impl<'e, E: TrustEngine> TrustEvaluator<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// `Ok(())` only for `Proceed`. Every other verdict is reported through
    /// `reporter` and returned as `EngineError::ChainValidation`.
    pub fn evaluate<W: Write>(
        &self,
        chain: &CertificateChain<E::Chain>,
        policy: &TrustPolicy<E::Policy>,
        reporter: &mut DiagnosticsReporter<W>,
    ) -> EngineResult<()> {
        let mut context = self
            .engine
            .create_context(chain.handle(), policy.handle())
            .map_err(|e| match e {
                EngineError::TrustContextCreation(_) => e,
                other => EngineError::TrustContextCreation(other.to_string()),
            })?;

        let verdict = self.engine.evaluate(&mut context).map_err(|e| match e {
            EngineError::Evaluation(_) => e,
            other => EngineError::Evaluation(other.to_string()),
        })?;
        debug!(
            %verdict,
            policy = policy.kind().name(),
            chain_len = chain.len(),
            identity = policy.identity(),
            "trust evaluation finished"
        );

        if verdict.is_proceed() {
            info!(identity = policy.identity(), "certificate chain trusted");
            return Ok(());
        }

        warn!(%verdict, identity = policy.identity(), "certificate chain not trusted");
        let record = match self.engine.properties(&context) {
            Ok(per_certificate) => DiagnosticRecord::from_engine(per_certificate),
            Err(e) => {
                warn!(error = %e, "could not extract trust diagnostics");
                DiagnosticRecord::default()
            }
        };
        reporter.report(&record);

        Err(EngineError::ChainValidation { verdict })
    }
}

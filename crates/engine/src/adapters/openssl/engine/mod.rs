// adapters/openssl/engine/mod.rs

use openssl::stack::Stack;
use openssl::x509::store::X509Store;
use openssl::x509::X509;
use tracing::debug;

use crate::domain::diagnostics::CertificateProperties;
use crate::domain::error::{EngineError, EngineResult};
use crate::domain::trust_engine::TrustEngine;
use crate::domain::types::{
  EvaluationConfig, PolicyKind, PolicyProperties, RawCertificateBytes, TrustVerdict,
};
use super::identity::{parse_identity, Identity};
use super::usage::is_dotted_oid;

mod context;
mod evaluate;
mod properties;

/// `TrustEngine` backed by OpenSSL's X509_STORE verification.
#[derive(Debug, Clone)]
pub struct OpensslEngine {
  config: EvaluationConfig,
  allowed_ekus: Vec<String>,
}

/// Presented chain as an OpenSSL stack, leaf first.
pub struct OpensslChain {
  certs: Stack<X509>,
}

/// IPsec policy bound to a parsed peer identity.
#[derive(Debug, Clone)]
pub struct OpensslPolicy {
  identity: Identity,
}

impl OpensslPolicy {
  pub fn identity(&self) -> &Identity {
    &self.identity
  }
}

/// One verification problem, pinned to a position in the presented chain.
#[derive(Debug, Clone)]
pub(crate) struct Finding {
  pub index: usize,
  pub field: &'static str,
  pub message: String,
}

pub struct OpensslContext {
  store: X509Store,
  leaf: X509,
  untrusted: Stack<X509>,
  presented: Vec<X509>,
  presented_der: Vec<Vec<u8>>,
  allowed_ekus: Vec<String>,
  findings: Vec<Finding>,
}

impl OpensslEngine {
  pub fn new(config: EvaluationConfig) -> EngineResult<Self> {
    let allowed_ekus = config.effective_ekus();
    if let Some(bad) = allowed_ekus.iter().find(|oid| !is_dotted_oid(oid)) {
      return Err(EngineError::Config(format!("'{bad}' is not a dotted OID")));
    }
    Ok(Self { config, allowed_ekus })
  }
}

impl TrustEngine for OpensslEngine {
  type Certificate = X509;
  type Chain = OpensslChain;
  type Policy = OpensslPolicy;
  type Context = OpensslContext;

  fn decode(&self, der: RawCertificateBytes<'_>) -> EngineResult<Option<X509>> {
    match X509::from_der(der.as_slice()) {
      Ok(cert) => Ok(Some(cert)),
      Err(e) => {
        debug!(error = %e, "openssl rejected certificate encoding");
        Ok(None)
      }
    }
  }

  fn build_chain(&self, certs: &[X509]) -> EngineResult<OpensslChain> {
    let alloc = |e: openssl::error::ErrorStack| EngineError::Allocation(format!("certificate stack: {e}"));
    let mut stack = Stack::new().map_err(alloc)?;
    for cert in certs {
      stack.push(cert.clone()).map_err(alloc)?;
    }
    Ok(OpensslChain { certs: stack })
  }

  fn make_policy(&self, kind: PolicyKind, properties: &PolicyProperties) -> EngineResult<OpensslPolicy> {
    let name = properties.policy_name().ok_or_else(|| {
      EngineError::Allocation(format!("{} requires a policy name property", kind.name()))
    })?;
    Ok(OpensslPolicy { identity: parse_identity(name) })
  }

  fn create_context(&self, chain: &OpensslChain, policy: &OpensslPolicy) -> EngineResult<OpensslContext> {
    context::create_context(&self.config, &self.allowed_ekus, chain, policy)
  }

  fn evaluate(&self, context: &mut OpensslContext) -> EngineResult<TrustVerdict> {
    evaluate::evaluate(context)
  }

  fn properties(&self, context: &OpensslContext) -> EngineResult<Vec<CertificateProperties>> {
    Ok(properties::properties(context))
  }
}

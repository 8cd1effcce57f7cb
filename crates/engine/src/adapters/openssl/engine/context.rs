// adapters/openssl/engine/context.rs

use openssl::stack::Stack;
use openssl::x509::store::{X509Store, X509StoreBuilder};
use openssl::x509::verify::{X509CheckFlags, X509VerifyFlags, X509VerifyParam};
use openssl::x509::X509;

use crate::domain::error::{EngineError, EngineResult};
use crate::domain::types::{AnchorSource, EvaluationConfig};
use super::super::identity::Identity;
use super::{OpensslChain, OpensslContext, OpensslPolicy};

fn ctx_err(e: impl std::fmt::Display) -> EngineError {
  EngineError::TrustContextCreation(e.to_string())
}

pub fn create_context(
  config: &EvaluationConfig,
  allowed_ekus: &[String],
  chain: &OpensslChain,
  policy: &OpensslPolicy,
) -> EngineResult<OpensslContext> {
  let presented: Vec<X509> = chain.certs.iter().map(|c| c.to_owned()).collect();
  let leaf = presented.first().cloned().ok_or_else(|| ctx_err("certificate chain is empty"))?;

  let mut untrusted = Stack::new().map_err(ctx_err)?;
  for cert in presented.iter().skip(1) {
    untrusted.push(cert.clone()).map_err(ctx_err)?;
  }

  let presented_der = presented
    .iter()
    .map(|c| c.to_der())
    .collect::<Result<Vec<_>, _>>()
    .map_err(ctx_err)?;

  let store = build_store(config, &presented, policy.identity())?;

  Ok(OpensslContext {
    store,
    leaf,
    untrusted,
    presented,
    presented_der,
    allowed_ekus: allowed_ekus.to_vec(),
    findings: Vec::new(),
  })
}

fn build_store(config: &EvaluationConfig, presented: &[X509], identity: &Identity) -> EngineResult<X509Store> {
  let mut builder = X509StoreBuilder::new().map_err(ctx_err)?;

  if matches!(config.anchors, AnchorSource::Presented | AnchorSource::Both) {
    if let Some(anchor) = presented.last() {
      builder.add_cert(anchor.clone()).map_err(ctx_err)?;
    }
  }
  if matches!(config.anchors, AnchorSource::System | AnchorSource::Both) {
    builder.set_default_paths().map_err(ctx_err)?;
  }

  let param = verify_param(config, identity)?;
  builder.set_param(&param).map_err(ctx_err)?;
  Ok(builder.build())
}

fn verify_param(config: &EvaluationConfig, identity: &Identity) -> EngineResult<X509VerifyParam> {
  let mut param = X509VerifyParam::new().map_err(ctx_err)?;
  param.set_hostflags(X509CheckFlags::NO_PARTIAL_WILDCARDS);
  match identity {
    Identity::Ip(ip) => param.set_ip(*ip),
    Identity::Dns(name) | Identity::Verbatim(name) => param.set_host(name),
  }
  .map_err(ctx_err)?;

  if !config.check_time {
    param.set_flags(X509VerifyFlags::NO_CHECK_TIME).map_err(ctx_err)?;
  } else if let Some(at) = config.at_time {
    let at = at.try_into().map_err(|_| ctx_err(format!("time {at} out of range")))?;
    param.set_time(at);
  }

  if let Some(depth) = config.max_depth {
    let depth = depth.try_into().map_err(|_| ctx_err(format!("depth {depth} out of range")))?;
    param.set_depth(depth);
  }
  Ok(param)
}

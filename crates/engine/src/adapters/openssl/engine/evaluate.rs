// adapters/openssl/engine/evaluate.rs

use openssl::x509::X509StoreContext;
use tracing::debug;

use crate::domain::error::{EngineError, EngineResult};
use crate::domain::types::TrustVerdict;
use super::super::constants::{field_for_error, is_fatal_error, FIELD_EXTENDED_KEY_USAGE};
use super::super::usage::{extended_key_usages, usage_permitted};
use super::{Finding, OpensslContext};

struct VerifyFailure {
  code: i32,
  message: String,
  depth: usize,
  cert_der: Option<Vec<u8>>,
}

fn eval_err(e: impl std::fmt::Display) -> EngineError {
  EngineError::Evaluation(e.to_string())
}

pub fn evaluate(ctx: &mut OpensslContext) -> EngineResult<TrustVerdict> {
  ctx.findings.clear();

  let mut store_ctx = X509StoreContext::new().map_err(eval_err)?;
  let failure = store_ctx
    .init(&ctx.store, &ctx.leaf, &ctx.untrusted, |c| {
      if c.verify_cert()? {
        return Ok(None);
      }
      let cert_der = match c.current_cert() {
        Some(cert) => Some(cert.to_der()?),
        None => None,
      };
      Ok(Some(VerifyFailure {
        code: c.error().as_raw(),
        message: c.error().error_string().to_string(),
        depth: c.error_depth() as usize,
        cert_der,
      }))
    })
    .map_err(eval_err)?;

  let verdict = match failure {
    Some(f) => {
      let index = locate(&ctx.presented_der, f.cert_der.as_deref(), f.depth);
      debug!(code = f.code, depth = f.depth, index, message = %f.message, "openssl rejected chain");
      ctx.findings.push(Finding { index, field: field_for_error(f.code), message: f.message });
      if is_fatal_error(f.code) {
        TrustVerdict::FatalTrustFailure
      } else {
        TrustVerdict::RecoverableTrustFailure
      }
    }
    None => {
      let found = extended_key_usages(&ctx.presented_der[0]).map_err(eval_err)?;
      if usage_permitted(found.as_deref(), &ctx.allowed_ekus) {
        TrustVerdict::Proceed
      } else {
        let listed = found.unwrap_or_default().join(", ");
        ctx.findings.push(Finding {
          index: 0,
          field: FIELD_EXTENDED_KEY_USAGE,
          message: format!("leaf extended key usage does not permit IPsec ({listed})"),
        });
        TrustVerdict::RecoverableTrustFailure
      }
    }
  };
  Ok(verdict)
}

/// Position of the failing certificate in the presented chain. Falls back to
/// the verification depth when the engine reports a certificate the caller
/// never presented.
fn locate(presented_der: &[Vec<u8>], cert_der: Option<&[u8]>, depth: usize) -> usize {
  cert_der
    .and_then(|der| presented_der.iter().position(|p| p.as_slice() == der))
    .unwrap_or_else(|| depth.min(presented_der.len().saturating_sub(1)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn locate_prefers_presented_position() {
    let presented = vec![vec![1u8], vec![2u8], vec![3u8]];
    assert_eq!(locate(&presented, Some(&[3u8][..]), 0), 2);
  }

  #[test]
  fn locate_clamps_unknown_certificates() {
    let presented = vec![vec![1u8], vec![2u8]];
    assert_eq!(locate(&presented, Some(&[9u8][..]), 5), 1);
    assert_eq!(locate(&presented, None, 0), 0);
  }
}

// adapters/openssl/engine/properties.rs

use openssl::x509::X509NameRef;

use crate::domain::diagnostics::CertificateProperties;
use super::super::constants::{FIELD_ISSUER, FIELD_SUBJECT};
use super::OpensslContext;

/// One property list per presented certificate: its names, then every
/// finding pinned to it, in the order evaluation produced them.
pub fn properties(ctx: &OpensslContext) -> Vec<CertificateProperties> {
  ctx
    .presented
    .iter()
    .enumerate()
    .map(|(index, cert)| {
      let mut props = CertificateProperties::new();
      props.push(FIELD_SUBJECT, format_name(cert.subject_name()));
      props.push(FIELD_ISSUER, format_name(cert.issuer_name()));
      for finding in ctx.findings.iter().filter(|f| f.index == index) {
        props.push(finding.field, finding.message.clone());
      }
      props
    })
    .collect()
}

pub(crate) fn format_name(name: &X509NameRef) -> String {
  name
    .entries()
    .map(|entry| {
      let key = entry.object().nid().short_name().unwrap_or("?");
      format!("{key}={}", printable(entry.data().as_slice()))
    })
    .collect::<Vec<_>>()
    .join(", ")
}

/// Attribute bytes as text. Control characters (embedded NULs included) are
/// escaped rather than cutting the value short.
fn printable(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len());
  for c in String::from_utf8_lossy(bytes).chars() {
    if c.is_control() {
      out.extend(c.escape_default());
    } else {
      out.push(c);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_nul_does_not_truncate_the_value() {
    assert_eq!(printable(b"vpn.example.com\0.evil"), "vpn.example.com\\u{0}.evil");
  }

  #[test]
  fn plain_values_pass_through() {
    assert_eq!(printable("Gr\u{fc}n AG".as_bytes()), "Gr\u{fc}n AG");
  }
}

use x509_parser::prelude::*;

const OID_ANY: &str = "2.5.29.37.0";
const OID_SERVER_AUTH: &str = "1.3.6.1.5.5.7.3.1";
const OID_CLIENT_AUTH: &str = "1.3.6.1.5.5.7.3.2";
const OID_CODE_SIGNING: &str = "1.3.6.1.5.5.7.3.3";
const OID_EMAIL_PROTECTION: &str = "1.3.6.1.5.5.7.3.4";
const OID_TIME_STAMPING: &str = "1.3.6.1.5.5.7.3.8";
const OID_OCSP_SIGNING: &str = "1.3.6.1.5.5.7.3.9";

/// EKU OIDs listed by the certificate, or `None` when it has no EKU extension.
pub fn extended_key_usages(der: &[u8]) -> Result<Option<Vec<String>>, String> {
  let (_, cert) = X509Certificate::from_der(der).map_err(|e| e.to_string())?;
  let ext = cert.extended_key_usage().map_err(|e| e.to_string())?;
  Ok(ext.map(|ext| {
    let eku = ext.value;
    let named = [
      (eku.any, OID_ANY),
      (eku.server_auth, OID_SERVER_AUTH),
      (eku.client_auth, OID_CLIENT_AUTH),
      (eku.code_signing, OID_CODE_SIGNING),
      (eku.email_protection, OID_EMAIL_PROTECTION),
      (eku.time_stamping, OID_TIME_STAMPING),
      (eku.ocsp_signing, OID_OCSP_SIGNING),
    ];
    let mut oids: Vec<String> = named
      .iter()
      .filter(|(present, _)| *present)
      .map(|(_, oid)| oid.to_string())
      .collect();
    oids.extend(eku.other.iter().map(|o| o.to_id_string()));
    oids
  }))
}

/// A leaf without the extension is unrestricted; otherwise one listed usage
/// must be allowed.
pub fn usage_permitted(found: Option<&[String]>, allowed: &[String]) -> bool {
  match found {
    None => true,
    Some(oids) => oids.iter().any(|o| allowed.contains(o)),
  }
}

/// Dotted-decimal OID with at least two arcs.
pub fn is_dotted_oid(s: &str) -> bool {
  let arcs: Vec<&str> = s.split('.').collect();
  arcs.len() >= 2 && arcs.iter().all(|a| !a.is_empty() && a.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn allowed() -> Vec<String> {
    vec!["1.3.6.1.5.5.7.3.17".to_string()]
  }

  #[test]
  fn missing_extension_is_permitted() {
    assert!(usage_permitted(None, &allowed()));
  }

  #[test]
  fn listed_usage_must_intersect() {
    let code_signing = vec![OID_CODE_SIGNING.to_string()];
    assert!(!usage_permitted(Some(&code_signing), &allowed()));
    let ike = vec![OID_CODE_SIGNING.to_string(), "1.3.6.1.5.5.7.3.17".to_string()];
    assert!(usage_permitted(Some(&ike), &allowed()));
  }

  #[test]
  fn oid_syntax() {
    assert!(is_dotted_oid("1.3.6.1.5.5.7.3.17"));
    assert!(!is_dotted_oid("serverAuth"));
    assert!(!is_dotted_oid("1..2"));
    assert!(!is_dotted_oid("1"));
  }

  #[test]
  fn garbage_der_is_an_error() {
    assert!(extended_key_usages(&[0x30, 0x01]).is_err());
  }
}

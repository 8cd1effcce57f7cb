// OpenSSL X509_V_ERR_* values this adapter gives a name to. These are stable
// across 1.1.x and 3.x.
pub const ERR_UNABLE_TO_GET_ISSUER_CERT: i32 = 2;
pub const ERR_UNABLE_TO_DECRYPT_CERT_SIGNATURE: i32 = 4;
pub const ERR_UNABLE_TO_DECODE_ISSUER_PUBLIC_KEY: i32 = 6;
pub const ERR_CERT_SIGNATURE_FAILURE: i32 = 7;
pub const ERR_CERT_NOT_YET_VALID: i32 = 9;
pub const ERR_CERT_HAS_EXPIRED: i32 = 10;
pub const ERR_DEPTH_ZERO_SELF_SIGNED_CERT: i32 = 18;
pub const ERR_SELF_SIGNED_CERT_IN_CHAIN: i32 = 19;
pub const ERR_UNABLE_TO_GET_ISSUER_CERT_LOCALLY: i32 = 20;
pub const ERR_UNABLE_TO_VERIFY_LEAF_SIGNATURE: i32 = 21;
pub const ERR_CERT_CHAIN_TOO_LONG: i32 = 22;
pub const ERR_CERT_REVOKED: i32 = 23;
pub const ERR_INVALID_CA: i32 = 24;
pub const ERR_PATH_LENGTH_EXCEEDED: i32 = 25;
pub const ERR_INVALID_PURPOSE: i32 = 26;
pub const ERR_CERT_UNTRUSTED: i32 = 27;
pub const ERR_CERT_REJECTED: i32 = 28;
pub const ERR_HOSTNAME_MISMATCH: i32 = 62;
pub const ERR_EMAIL_MISMATCH: i32 = 63;
pub const ERR_IP_ADDRESS_MISMATCH: i32 = 64;

// Diagnostic field names.
pub const FIELD_SUBJECT: &str = "Subject";
pub const FIELD_ISSUER: &str = "Issuer";
pub const FIELD_NAME_MISMATCH: &str = "NameMismatch";
pub const FIELD_IP_MISMATCH: &str = "IpAddressMismatch";
pub const FIELD_EXTENDED_KEY_USAGE: &str = "ExtendedKeyUsage";

/// Diagnostic field name for an OpenSSL verification error.
pub fn field_for_error(code: i32) -> &'static str {
  match code {
    ERR_UNABLE_TO_GET_ISSUER_CERT
    | ERR_UNABLE_TO_GET_ISSUER_CERT_LOCALLY
    | ERR_UNABLE_TO_VERIFY_LEAF_SIGNATURE => "MissingIssuer",
    ERR_UNABLE_TO_DECRYPT_CERT_SIGNATURE
    | ERR_UNABLE_TO_DECODE_ISSUER_PUBLIC_KEY
    | ERR_CERT_SIGNATURE_FAILURE => "SignatureInvalid",
    ERR_CERT_NOT_YET_VALID => "NotYetValid",
    ERR_CERT_HAS_EXPIRED => "Expired",
    ERR_DEPTH_ZERO_SELF_SIGNED_CERT
    | ERR_SELF_SIGNED_CERT_IN_CHAIN
    | ERR_CERT_UNTRUSTED
    | ERR_CERT_REJECTED => "AnchorUntrusted",
    ERR_CERT_CHAIN_TOO_LONG => "ChainTooLong",
    ERR_CERT_REVOKED => "Revoked",
    ERR_INVALID_CA => "InvalidCa",
    ERR_PATH_LENGTH_EXCEEDED => "PathLengthExceeded",
    ERR_INVALID_PURPOSE => FIELD_EXTENDED_KEY_USAGE,
    ERR_HOSTNAME_MISMATCH | ERR_EMAIL_MISMATCH => FIELD_NAME_MISMATCH,
    ERR_IP_ADDRESS_MISMATCH => FIELD_IP_MISMATCH,
    _ => "VerifyError",
  }
}

/// Errors no user override could make acceptable.
pub fn is_fatal_error(code: i32) -> bool {
  matches!(
    code,
    ERR_UNABLE_TO_DECRYPT_CERT_SIGNATURE
      | ERR_UNABLE_TO_DECODE_ISSUER_PUBLIC_KEY
      | ERR_CERT_SIGNATURE_FAILURE
      | ERR_CERT_REVOKED
      | ERR_INVALID_CA
      | ERR_PATH_LENGTH_EXCEEDED
  )
}

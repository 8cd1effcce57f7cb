use std::net::IpAddr;

use url::Host;

/// How the policy identity is matched against the leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
  /// IP SAN match.
  Ip(IpAddr),
  /// DNS name match, normalised (lower-case, IDNA).
  Dns(String),
  /// Not parseable as a host; handed to the name check unchanged.
  Verbatim(String),
}

/// Only a literal address (dotted-quad IPv4, bare or bracketed IPv6) is an
/// IP identity. Shorthand IPv4 forms such as `10.1` or `1234` stay verbatim.
pub fn parse_identity(identity: &str) -> Identity {
  if let Ok(ip) = identity.parse::<IpAddr>() {
    return Identity::Ip(ip);
  }
  match Host::parse(identity) {
    Ok(Host::Ipv4(_)) => Identity::Verbatim(identity.to_string()),
    Ok(Host::Ipv6(a)) => Identity::Ip(IpAddr::V6(a)),
    Ok(Host::Domain(d)) => Identity::Dns(d),
    Err(_) => Identity::Verbatim(identity.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn domains_are_lowercased() {
    assert_eq!(parse_identity("VPN.Example.COM"), Identity::Dns("vpn.example.com".into()));
  }

  #[test]
  fn bare_and_bracketed_addresses_are_ips() {
    assert!(matches!(parse_identity("10.0.0.1"), Identity::Ip(IpAddr::V4(_))));
    assert!(matches!(parse_identity("::1"), Identity::Ip(IpAddr::V6(_))));
    assert!(matches!(parse_identity("[2001:db8::1]"), Identity::Ip(IpAddr::V6(_))));
  }

  #[test]
  fn shorthand_ipv4_forms_are_not_addresses() {
    for s in ["10.1", "1234", "0x7f.1", "127.1"] {
      assert_eq!(parse_identity(s), Identity::Verbatim(s.into()), "{s}");
    }
  }

  #[test]
  fn unparseable_identity_is_kept_verbatim() {
    assert_eq!(parse_identity("gw one"), Identity::Verbatim("gw one".into()));
  }
}

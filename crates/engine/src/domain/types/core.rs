use serde::Serialize;

/// Outcome of one trust evaluation, as reported by the engine.
///
/// Only `Proceed` counts as trusted. Every other value, including
/// `Unspecified`, is reported to callers as a failed chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrustVerdict {
    Invalid,
    Proceed,
    Deny,
    Unspecified,
    RecoverableTrustFailure,
    FatalTrustFailure,
    OtherError,
}

impl TrustVerdict {
    pub fn is_proceed(self) -> bool {
        self == TrustVerdict::Proceed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrustVerdict::Invalid => "invalid",
            TrustVerdict::Proceed => "proceed",
            TrustVerdict::Deny => "deny",
            TrustVerdict::Unspecified => "unspecified",
            TrustVerdict::RecoverableTrustFailure => "recoverable trust failure",
            TrustVerdict::FatalTrustFailure => "fatal trust failure",
            TrustVerdict::OtherError => "other error",
        }
    }
}

impl std::fmt::Display for TrustVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of trust policy a `TrustEngine` can be asked for. Only IPsec today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    IpSec,
}

impl PolicyKind {
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::IpSec => "IPsec policy",
        }
    }
}

/// How diagnostics are rendered on the report channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Where trust anchors come from when the engine builds its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    /// The last certificate of the presented chain.
    Presented,
    /// The platform's default CA locations.
    System,
    Both,
}

impl std::str::FromStr for AnchorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "presented" => Ok(AnchorSource::Presented),
            "system" => Ok(AnchorSource::System),
            "both" => Ok(AnchorSource::Both),
            other => Err(format!("unknown anchor source '{other}' (expected presented, system or both)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_proceed_is_success() {
        let all = [
            TrustVerdict::Invalid,
            TrustVerdict::Proceed,
            TrustVerdict::Deny,
            TrustVerdict::Unspecified,
            TrustVerdict::RecoverableTrustFailure,
            TrustVerdict::FatalTrustFailure,
            TrustVerdict::OtherError,
        ];
        let passing: Vec<_> = all.iter().filter(|v| v.is_proceed()).collect();
        assert_eq!(passing, vec![&TrustVerdict::Proceed]);
    }

    #[test]
    fn anchor_source_parses() {
        assert_eq!("system".parse::<AnchorSource>().unwrap(), AnchorSource::System);
        assert!("keychain".parse::<AnchorSource>().is_err());
    }
}

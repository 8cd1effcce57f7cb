//! PolicyFactory: binds an identity to the IPsec trust policy.

use tracing::debug;

use crate::domain::error::EngineResult;
use crate::domain::trust_engine::TrustEngine;
use crate::domain::types::{PolicyKind, PolicyProperties, POLICY_NAME_KEY};

#[derive(Debug)]
pub struct TrustPolicy<P> {
    kind: PolicyKind,
    identity: String,
    handle: P,
}

impl<P> TrustPolicy<P> {
    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn handle(&self) -> &P {
        &self.handle
    }
}

/// Property set for `identity`. The identity is passed through as-is;
/// no hostname syntax is enforced.
pub fn policy_properties(identity: &str) -> PolicyProperties {
    let mut props = PolicyProperties::new();
    props.set(POLICY_NAME_KEY, identity);
    props
}

pub fn make_policy<E: TrustEngine>(engine: &E, identity: &str) -> EngineResult<TrustPolicy<E::Policy>> {
    let kind = PolicyKind::IpSec;
    let handle = engine.make_policy(kind, &policy_properties(identity))?;
    debug!(policy = kind.name(), identity, "created trust policy");
    Ok(TrustPolicy { kind, identity: identity.to_string(), handle })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_through_unvalidated() {
        let props = policy_properties("not a hostname!");
        assert_eq!(props.policy_name(), Some("not a hostname!"));
        assert_eq!(props.len(), 1);
    }
}

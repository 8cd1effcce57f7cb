/// Property key under which the identity is bound to a policy.
pub const POLICY_NAME_KEY: &str = "policy name";

/// Extended key usages an IPsec leaf may carry (OID dot notation).
pub const IPSEC_ALLOWED_EKUS: &[&str] = &[
    "2.5.29.37.0",       // anyExtendedKeyUsage
    "1.3.6.1.5.5.7.3.1", // serverAuth
    "1.3.6.1.5.5.7.3.5", // ipsecEndSystem
    "1.3.6.1.5.5.7.3.6", // ipsecTunnel
    "1.3.6.1.5.5.7.3.7", // ipsecUser
    "1.3.6.1.5.5.7.3.17", // ipsecIKE
];

/// Property set handed to the engine when a policy is created.
/// Keys are unique; insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyProperties {
    entries: Vec<(String, String)>,
}

impl PolicyProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.get(POLICY_NAME_KEY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

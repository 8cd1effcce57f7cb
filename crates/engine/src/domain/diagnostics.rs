// crates/engine/src/domain/diagnostics.rs
use std::borrow::Cow;

use serde::Serialize;

/// A single diagnostic value as the engine reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    /// Raw bytes. Not text-representable; rendered as a placeholder.
    Data(Vec<u8>),
}

impl PropertyValue {
    /// Text form of the value. Binary data becomes a size placeholder.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            PropertyValue::Text(s) => Cow::Borrowed(s),
            PropertyValue::Integer(i) => Cow::Owned(i.to_string()),
            PropertyValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            PropertyValue::Data(bytes) => Cow::Owned(format!("<binary {} bytes>", bytes.len())),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// Diagnostic fields for one certificate of the evaluated chain,
/// in engine-reported order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CertificateProperties {
    pub properties: Vec<Property>,
}

impl CertificateProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.push(Property { key: key.into(), value: value.into() });
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Per-certificate entry of a `DiagnosticRecord` as it is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateDiagnostics {
    /// Position in the presented chain (0 = leaf).
    pub index: usize,
    pub properties: Vec<Property>,
}

/// Everything the engine had to say about a chain it did not trust.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticRecord {
    pub certificates: Vec<CertificateDiagnostics>,
}

impl DiagnosticRecord {
    /// Accumulate engine output, keeping certificate and field order.
    pub fn from_engine(per_certificate: Vec<CertificateProperties>) -> Self {
        let certificates = per_certificate
            .into_iter()
            .enumerate()
            .map(|(index, c)| CertificateDiagnostics { index, properties: c.properties })
            .collect();
        Self { certificates }
    }

    pub fn field_count(&self) -> usize {
        self.certificates.iter().map(|c| c.properties.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

use super::core::{AnchorSource, ReportFormat};
use super::trust::IPSEC_ALLOWED_EKUS;

/// Centralized defaults for the trust engine.
/// All opinionated defaults should be defined here for consistency.
pub struct EngineDefaults;

impl EngineDefaults {
    // Trust defaults
    pub const ANCHOR_SOURCE: AnchorSource = AnchorSource::Presented; // Chain brings its own root
    pub const CHECK_TIME: bool = true; // Validity periods are enforced
    pub const AT_TIME: Option<i64> = None; // Evaluate "now"
    pub const MAX_DEPTH: Option<u32> = None; // Engine default depth

    // Output defaults
    pub const REPORT_FORMAT: ReportFormat = ReportFormat::Text;

    // Limit defaults
    pub const MAX_CERTIFICATE_SIZE: usize = 64 * 1024; // 64 KiB per DER certificate
    pub const MAX_CHAIN_LENGTH: usize = 10;
}

/// Per-call limits on the input handed to the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct LimitsConfig {
    /// Max size of one DER certificate buffer.
    pub max_certificate_size: usize,
    /// Max number of certificates in a presented chain.
    pub max_chain_length: usize,
}

impl LimitsConfig {
    /// Opinionated production defaults.
    pub fn defaults() -> Self {
        Self {
            max_certificate_size: EngineDefaults::MAX_CERTIFICATE_SIZE,
            max_chain_length: EngineDefaults::MAX_CHAIN_LENGTH,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Knobs for the trust engine binding. The engine does no I/O of its own;
/// callers load files and fill this in.
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    pub anchors: AnchorSource,
    /// Enforce certificate validity periods.
    pub check_time: bool,
    /// Evaluate validity at this Unix time instead of now.
    pub at_time: Option<i64>,
    /// Maximum number of intermediates allowed in the verified path.
    pub max_depth: Option<u32>,
    /// Accepted leaf EKUs in OID dot notation. `None` uses the IPsec set.
    pub allowed_ekus: Option<Vec<String>>,
}

impl EvaluationConfig {
    /// Secure opinionated defaults.
    pub fn secure_default() -> Self {
        Self {
            anchors: EngineDefaults::ANCHOR_SOURCE,
            check_time: EngineDefaults::CHECK_TIME,
            at_time: EngineDefaults::AT_TIME,
            max_depth: EngineDefaults::MAX_DEPTH,
            allowed_ekus: None,
        }
    }

    /// EKU OIDs the leaf may carry, resolving `None` to the IPsec defaults.
    pub fn effective_ekus(&self) -> Vec<String> {
        match &self.allowed_ekus {
            Some(ekus) => ekus.clone(),
            None => IPSEC_ALLOWED_EKUS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::secure_default()
    }
}

/// One pipeline run: who the chain should belong to, and the chain itself.
#[derive(Debug, Clone)]
pub struct CheckRequest<'a> {
    pub identity: &'a str,
    /// DER buffers, leaf first and trust anchor last.
    pub certificates: Vec<&'a [u8]>,
    pub format: ReportFormat,
    pub limits: LimitsConfig,
}

impl<'a> CheckRequest<'a> {
    /// Secure opinionated defaults; caller supplies identity and chain.
    pub fn secure_default(identity: &'a str, certificates: Vec<&'a [u8]>) -> Self {
        Self {
            identity,
            certificates,
            format: EngineDefaults::REPORT_FORMAT,
            limits: LimitsConfig::defaults(),
        }
    }
}

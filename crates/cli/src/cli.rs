use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ipsec_trust_engine::{AnchorSource, EvaluationConfig, ReportFormat};

/// Check an X.509 certificate chain against the IPsec trust policy
/// (exit code 0 = trusted, 1 = not trusted, 2 = usage, 3 = error)
#[derive(Parser, Debug)]
#[command(name = "ipsec-cert-check", version)]
pub struct Cli {
    /// Host name or IP address the leaf certificate must be issued to
    pub identity: String,

    /// DER certificate files: leaf first, then intermediates, trust anchor last
    #[arg(required = true, num_args = 1.., value_name = "CERT_FILE")]
    pub certificates: Vec<PathBuf>,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// Trust anchor source: presented, system or both
    #[arg(long, value_name = "SOURCE", default_value = "presented")]
    pub anchor: AnchorSource,

    /// Verify at a specific Unix timestamp
    #[arg(long, value_name = "EPOCH", conflicts_with = "no_check_time")]
    pub at_time: Option<i64>,

    /// Skip validity date checks
    #[arg(long)]
    pub no_check_time: bool,

    /// Maximum chain depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<u32>,

    /// Accepted leaf extended key usage OID (repeatable; replaces the IPsec set)
    #[arg(long = "allowed-eku", value_name = "OID")]
    pub allowed_ekus: Vec<String>,

    /// Increase log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn evaluation_config(&self) -> EvaluationConfig {
        let mut config = EvaluationConfig::secure_default();
        config.anchors = self.anchor;
        config.check_time = !self.no_check_time;
        config.at_time = self.at_time;
        config.max_depth = self.max_depth;
        if !self.allowed_ekus.is_empty() {
            config.allowed_ekus = Some(self.allowed_ekus.clone());
        }
        config
    }

    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }

    /// Default log filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "ipsec_cert_check=info,ipsec_trust_engine=info",
            _ => "ipsec_cert_check=debug,ipsec_trust_engine=debug",
        }
    }
}

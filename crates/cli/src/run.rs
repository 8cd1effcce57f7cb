use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ipsec_trust_engine::{self as engine, CheckRequest, EngineError, ExitStatus, LimitsConfig};
use tracing::{debug, info};

use crate::cli::Cli;

fn oversize(path: &Path, len: u64, limit: usize) -> EngineError {
    EngineError::Allocation(format!(
        "certificate file {} of {len} bytes exceeds the {limit} byte limit",
        path.display()
    ))
}

/// Read one DER certificate file, never holding more than `limit + 1` bytes.
/// Regular files are rejected on their size alone; anything else is read
/// through a capped reader.
fn read_certificate(path: &Path, limit: usize) -> engine::EngineResult<Vec<u8>> {
    let file_err = |source: io::Error| EngineError::File { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(file_err)?;
    let len = file.metadata().map_err(file_err)?.len();
    if len > limit as u64 {
        return Err(oversize(path, len, limit));
    }

    let mut data = Vec::with_capacity(len as usize);
    file.take(limit as u64 + 1).read_to_end(&mut data).map_err(file_err)?;
    if data.len() > limit {
        return Err(oversize(path, data.len() as u64, limit));
    }
    debug!(path = %path.display(), len = data.len(), "read certificate file");
    Ok(data)
}

/// Load the files named on the command line and check them, writing any
/// diagnostics to `out`.
pub fn run<W: Write>(cli: &Cli, out: W) -> Result<()> {
    let limits = LimitsConfig::defaults();
    if cli.certificates.len() > limits.max_chain_length {
        return Err(EngineError::Usage(format!(
            "chain of {} certificates exceeds the limit of {}",
            cli.certificates.len(),
            limits.max_chain_length
        ))
        .into());
    }

    let buffers = cli
        .certificates
        .iter()
        .map(|p| read_certificate(p, limits.max_certificate_size))
        .collect::<Result<Vec<_>, _>>()?;

    let mut request = CheckRequest::secure_default(&cli.identity, buffers.iter().map(Vec::as_slice).collect());
    request.format = cli.report_format();
    request.limits = limits;

    engine::check_ipsec_chain(&request, cli.evaluation_config(), out)
        .with_context(|| format!("checking chain for '{}'", cli.identity))?;
    info!(identity = %cli.identity, "chain trusted");
    Ok(())
}

/// Exit status for a failed run. Errors that did not come from the engine
/// count as fatal.
pub fn exit_status(err: &anyhow::Error) -> ExitStatus {
    err.downcast_ref::<EngineError>()
        .map(EngineError::exit_status)
        .unwrap_or(ExitStatus::Fatal)
}

//! ipsec-cert-check: verify a certificate chain for an IPsec peer identity.

mod cli;
mod run;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    match run::run(&cli, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = run::exit_status(&err);
            debug!(code = status.code(), "run failed");
            eprintln!("ipsec-cert-check: {err:#}");
            ExitCode::from(status.code())
        }
    }
}

fn init_logging(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    // Already initialised is not worth failing the run over.
    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
}

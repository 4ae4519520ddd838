use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;
use trazar::{cli::Cli, replay::ReplaySource, session::TraceSession, source::ObservationSource};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Replay the configured event stream into the session
fn run_replay(cli: &Cli, session: &mut TraceSession) -> Result<u64> {
    if cli.events.as_os_str() == "-" {
        let stdin = io::stdin();
        let mut source = ReplaySource::new(stdin.lock());
        source.drive(session)?;
        Ok(source.skipped())
    } else {
        let file = File::open(&cli.events)
            .with_context(|| format!("failed to open events file {}", cli.events.display()))?;
        let mut source = ReplaySource::new(BufReader::new(file));
        source.drive(session)?;
        Ok(source.skipped())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut session = TraceSession::start(cli.trace_config())?;
    let skipped = run_replay(&cli, &mut session)?;
    let elapsed = session.stop()?;

    eprintln!(
        "[trazar: {} call(s) logged to {} in {:.4}s]",
        session.lines_written(),
        cli.output.display(),
        elapsed
    );
    if skipped > 0 {
        eprintln!("[trazar: {} malformed record(s) skipped]", skipped);
    }

    Ok(())
}

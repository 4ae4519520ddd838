//! Trace session lifecycle and log sink
//!
//! A session owns its configuration, call stack and sink handle; nothing here
//! is process-global except a registry of active sink paths, kept so that two
//! live sessions cannot truncate and interleave writes into the same file.
//!
//! Error policy follows the two halves of the design: lifecycle operations
//! (`start`, `stop`) report failures to the caller, while the hot observation
//! path (`on_step`) never propagates anything: a failed write drops that one
//! observation and the traced program keeps running.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::TraceConfig;
use crate::site::CallSite;
use crate::stack::CallStack;

/// Errors reported by session lifecycle operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to open log sink {}: {source}", .path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a session is already writing to {}", .0.display())]
    AlreadyRunning(PathBuf),

    #[error("session is not running")]
    NotRunning,

    #[error("failed to write trace summary: {0}")]
    WriteSummary(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Stopped,
}

/// One tracing session: from `start` to `stop`, every observation event fed
/// to it is filtered, deduplicated and appended to the log sink
#[derive(Debug)]
pub struct TraceSession {
    config: TraceConfig,
    sink: File,
    stack: CallStack,
    started_at: Instant,
    state: SessionState,
    lines_written: u64,
}

impl TraceSession {
    /// Start a session: truncate/create the log sink and begin timing
    ///
    /// Fails if the sink path cannot be opened for writing, or if another
    /// live session already owns the same path.
    pub fn start(config: TraceConfig) -> Result<Self, SessionError> {
        claim_sink(&config.log_path)?;

        let sink = match File::create(&config.log_path) {
            Ok(file) => file,
            Err(source) => {
                release_sink(&config.log_path);
                return Err(SessionError::OpenSink {
                    path: config.log_path.clone(),
                    source,
                });
            }
        };

        Ok(Self {
            config,
            sink,
            stack: CallStack::new(),
            started_at: Instant::now(),
            state: SessionState::Running,
            lines_written: 0,
        })
    }

    /// The observation entry point, fired once per execution step
    ///
    /// Infallible by contract: this runs inside the traced program, so any
    /// failure is confined here and the observation is dropped.
    pub fn on_step(&mut self, site: &CallSite) {
        if self.state != SessionState::Running {
            debug!("observation dropped: session not running");
            return;
        }

        let Some(line) = self.stack.observe(site, &self.config) else {
            return;
        };

        if let Err(e) = self.append(&line) {
            warn!(error = %e, "observation dropped: log sink write failed");
        }
    }

    /// Stop the session and append the terminal summary line
    ///
    /// Returns the elapsed seconds. Stopping a session twice is a caller
    /// contract violation and reported as [`SessionError::NotRunning`].
    pub fn stop(&mut self) -> Result<f64, SessionError> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning);
        }
        self.state = SessionState::Stopped;
        release_sink(&self.config.log_path);

        let elapsed = self.started_at.elapsed().as_secs_f64();
        writeln!(
            self.sink,
            "\n--- TRACE TERMINEE EN {:.4} secondes ---",
            elapsed
        )?;
        self.sink.flush()?;
        Ok(elapsed)
    }

    /// Call-entry lines appended so far (summary line excluded)
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Current depth of the open-call stack
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Session configuration
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    // Each line is flushed on its own: a crash mid-trace must still leave a
    // readable partial log.
    fn append(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()?;
        self.lines_written += 1;
        Ok(())
    }
}

impl Drop for TraceSession {
    fn drop(&mut self) {
        if self.state == SessionState::Running {
            warn!(
                path = %self.config.log_path.display(),
                "session dropped while running; log has no summary line"
            );
            release_sink(&self.config.log_path);
        }
    }
}

/// Sink paths owned by live sessions
static ACTIVE_SINKS: OnceLock<Mutex<HashSet<PathBuf>>> = OnceLock::new();

fn active_sinks() -> &'static Mutex<HashSet<PathBuf>> {
    ACTIVE_SINKS.get_or_init(|| Mutex::new(HashSet::new()))
}

fn claim_sink(path: &Path) -> Result<(), SessionError> {
    let mut sinks = active_sinks()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if !sinks.insert(path.to_path_buf()) {
        return Err(SessionError::AlreadyRunning(path.to_path_buf()));
    }
    Ok(())
}

fn release_sink(path: &Path) {
    let mut sinks = active_sinks()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    sinks.remove(path);
}

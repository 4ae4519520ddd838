//! Replay observation source
//!
//! Reads newline-delimited JSON call-site records and feeds them to a step
//! hook. This is the stock source shipped with the CLI: any runtime able to
//! dump its step events as JSONL can be traced offline, without the engine
//! hooking that runtime directly.
//!
//! Record shape (one per line):
//!
//! ```json
//! {"kind":{"method":{"owner":"App\\Foo","call_type":"static"}},"function":"bar","args":[{"int":1}]}
//! {"kind":{"function":{"source_file":"/src/boot.ext"}},"function":"main"}
//! ```
//!
//! A malformed record is an observation-time failure: it is dropped with a
//! warning and replay continues. Failing to read from the underlying stream
//! at all is a plumbing error and is reported.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::warn;

use crate::site::CallSite;
use crate::source::{ObservationSource, StepHook};

/// Observation source backed by a JSONL event stream
#[derive(Debug)]
pub struct ReplaySource<R> {
    reader: R,
    skipped: u64,
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, skipped: 0 }
    }

    /// Records dropped because they failed to parse
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: BufRead> ObservationSource for ReplaySource<R> {
    fn drive(&mut self, hook: &mut dyn StepHook) -> Result<()> {
        for (lineno, line) in self.reader.by_ref().lines().enumerate() {
            let line = line.context("failed to read observation record")?;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }
            match serde_json::from_str::<CallSite>(record) {
                Ok(site) => hook.on_step(&site),
                Err(e) => {
                    self.skipped += 1;
                    warn!(line = lineno + 1, error = %e, "observation dropped: malformed record");
                }
            }
        }
        Ok(())
    }
}

//! CLI argument parsing for Trazar

use std::path::PathBuf;

use clap::Parser;

use crate::config::{TraceConfig, DEFAULT_LOG_PATH};

#[derive(Parser, Debug)]
#[command(name = "trazar")]
#[command(version)]
#[command(about = "Lightweight call tracer producing an indented call-entry tree", long_about = None)]
pub struct Cli {
    /// Path of the call-entry log (truncated at start)
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_LOG_PATH)]
    pub output: PathBuf,

    /// Only trace methods whose owner starts with this namespace prefix (repeatable)
    #[arg(short = 'n', long = "namespace", value_name = "PREFIX")]
    pub namespaces: Vec<String>,

    /// Only trace functions whose source file contains this substring (repeatable)
    #[arg(short = 'F', long = "file-pattern", value_name = "SUBSTR")]
    pub file_patterns: Vec<String>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Observation events to replay, as newline-delimited JSON ("-" = stdin)
    #[arg(value_name = "EVENTS", default_value = "-")]
    pub events: PathBuf,
}

impl Cli {
    /// Build the session configuration from the parsed flags
    ///
    /// No flags on an axis leaves that axis unfiltered.
    pub fn trace_config(&self) -> TraceConfig {
        TraceConfig {
            log_path: self.output.clone(),
            include_namespaces: non_empty(&self.namespaces),
            include_file_patterns: non_empty(&self.file_patterns),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

//! Trace session configuration

use std::path::PathBuf;

/// Default log sink when no path is configured
pub const DEFAULT_LOG_PATH: &str = "trace.log";

/// Immutable configuration for one trace session
///
/// `None` on a filter axis means no filtering on that axis: every call of
/// that kind is accepted.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Destination of the call-entry log; truncated when the session starts
    pub log_path: PathBuf,
    /// Namespace prefixes a method owner must start with to be traced
    pub include_namespaces: Option<Vec<String>>,
    /// Substrings a plain function's source file must contain to be traced
    pub include_file_patterns: Option<Vec<String>>,
}

impl TraceConfig {
    /// Configuration with no filtering, logging to the given path
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            include_namespaces: None,
            include_file_patterns: None,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

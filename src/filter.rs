//! Call-site filtering
//!
//! Two independent axes, selected by the kind of caller:
//! - method calls filter on namespace prefixes of the owning type
//! - plain function calls filter on substrings of the source file path
//!
//! An unconfigured axis accepts everything on it. The tracer's own calls are
//! rejected unconditionally, before either axis is consulted.

use crate::config::TraceConfig;
use crate::site::{CallSite, CallerKind};

/// Qualified name of the tracer's own session type
///
/// Observations owned by this name are never traced; tracing them would
/// recurse into the tracer itself. The exclusion is an identity check against
/// this constant, not an incidental pattern match, and it applies regardless
/// of any configured filter.
pub const SELF_OWNER: &str = "trazar::TraceSession";

/// Decide whether a call site is of interest under the given configuration
pub fn accept(site: &CallSite, config: &TraceConfig) -> bool {
    if site.owner() == Some(SELF_OWNER) {
        return false;
    }

    match &site.kind {
        CallerKind::Method { owner, .. } => match &config.include_namespaces {
            None => true,
            Some(prefixes) => prefixes.iter().any(|p| owner.starts_with(p.as_str())),
        },
        CallerKind::Function { source_file } => match &config.include_file_patterns {
            None => true,
            Some(patterns) => patterns.iter().any(|p| source_file.contains(p.as_str())),
        },
    }
}

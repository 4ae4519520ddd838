//! Call-entry change detection
//!
//! The observation source fires on every execution step, not only at call
//! boundaries. Logging each event verbatim would emit one line per step, so
//! every accepted signature is compared against the top of a stack of open
//! calls: only a change pushes and produces a line. This collapses the step
//! stream into call-entry events at O(1) per observation.
//!
//! The stack never pops. Exit is not observable at step granularity, so depth
//! only grows within a session; the indent of each new line reflects the
//! number of calls entered so far, not the exact shape of the live call tree.

use crate::config::TraceConfig;
use crate::filter;
use crate::site::CallSite;

/// Currently-open interesting calls, deepest last
#[derive(Debug, Default)]
pub struct CallStack {
    frames: Vec<String>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open calls
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Signature of the innermost open call, if any
    pub fn top(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Process one observation event
    ///
    /// Returns the log line for a newly entered call, or `None` when the site
    /// is filtered out or is a repeated step inside the call already on top.
    pub fn observe(&mut self, site: &CallSite, config: &TraceConfig) -> Option<String> {
        if !filter::accept(site, config) {
            return None;
        }

        let signature = site.signature();
        if self.frames.last().is_some_and(|top| *top == signature) {
            return None;
        }

        let indent = "  ".repeat(self.frames.len());
        let line = format!("{}-> {}", indent, signature);
        self.frames.push(signature);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{ArgValue, CallType};

    fn site(function: &str) -> CallSite {
        CallSite::method("App\\Foo", CallType::Static, function, vec![])
    }

    #[test]
    fn test_first_call_logs_without_indent() {
        let mut stack = CallStack::new();
        let line = stack.observe(&site("bar"), &TraceConfig::default());
        assert_eq!(line.as_deref(), Some("-> App\\Foo::bar()"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_repeated_step_is_suppressed() {
        let mut stack = CallStack::new();
        let config = TraceConfig::default();
        assert!(stack.observe(&site("bar"), &config).is_some());
        assert!(stack.observe(&site("bar"), &config).is_none());
        assert!(stack.observe(&site("bar"), &config).is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_new_call_indents_one_level_per_open_frame() {
        let mut stack = CallStack::new();
        let config = TraceConfig::default();
        stack.observe(&site("bar"), &config);
        let second = stack.observe(&site("baz"), &config);
        assert_eq!(second.as_deref(), Some("  -> App\\Foo::baz()"));
        let third = stack.observe(&site("qux"), &config);
        assert_eq!(third.as_deref(), Some("    -> App\\Foo::qux()"));
    }

    #[test]
    fn test_depth_never_decreases() {
        // Re-observing an earlier signature is a new entry, not a return:
        // the stack only grows.
        let mut stack = CallStack::new();
        let config = TraceConfig::default();
        stack.observe(&site("bar"), &config);
        stack.observe(&site("baz"), &config);
        let again = stack.observe(&site("bar"), &config);
        assert_eq!(again.as_deref(), Some("    -> App\\Foo::bar()"));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_same_function_different_args_is_a_new_call() {
        let mut stack = CallStack::new();
        let config = TraceConfig::default();
        let one = CallSite::method("App\\Foo", CallType::Static, "bar", vec![ArgValue::Int(1)]);
        let two = CallSite::method("App\\Foo", CallType::Static, "bar", vec![ArgValue::Int(2)]);
        assert!(stack.observe(&one, &config).is_some());
        assert!(stack.observe(&two, &config).is_some());
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_filtered_site_leaves_stack_untouched() {
        let mut stack = CallStack::new();
        let config = TraceConfig {
            include_namespaces: Some(vec!["App\\".to_string()]),
            ..TraceConfig::default()
        };
        let foreign = CallSite::method("Lib\\X", CallType::Static, "run", vec![]);
        assert!(stack.observe(&foreign, &config).is_none());
        assert_eq!(stack.depth(), 0);
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_top_tracks_last_entered_call() {
        let mut stack = CallStack::new();
        let config = TraceConfig::default();
        stack.observe(&site("bar"), &config);
        assert_eq!(stack.top(), Some("App\\Foo::bar()"));
        stack.observe(&site("baz"), &config);
        assert_eq!(stack.top(), Some("App\\Foo::baz()"));
    }
}

//! Observation source interface
//!
//! The engine does not know where observation events come from. Anything that
//! can report "who is the immediate caller right now" at frequent points
//! during execution can drive a session: a runtime tick hook, a profiler
//! callback, or a recorded event stream (see [`crate::replay`]). The only
//! assumption made is that events fire often enough to observe a call's entry
//! before substantial work happens inside it.

use anyhow::Result;

use crate::session::TraceSession;
use crate::site::CallSite;

/// Receiver side of an observation source
///
/// One entry point, fired once per execution step. Implementations must not
/// fail: a hook runs inside the traced program, so problems are handled
/// locally and the offending observation dropped.
pub trait StepHook {
    fn on_step(&mut self, site: &CallSite);
}

impl StepHook for TraceSession {
    fn on_step(&mut self, site: &CallSite) {
        TraceSession::on_step(self, site);
    }
}

/// A mechanism that produces observation events
///
/// The hook is borrowed for the duration of the drive; together with the
/// session's running state this is the attach/detach lifecycle. Test doubles
/// can skip the trait entirely and feed synthesized [`CallSite`] values to a
/// hook directly.
pub trait ObservationSource {
    /// Feed observation events into the hook until the source is exhausted
    fn drive(&mut self, hook: &mut dyn StepHook) -> Result<()>;
}

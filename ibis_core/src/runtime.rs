//! Process-wide runtime lifecycle.
//!
//! [`init`] captures the raw process argument vector and marks the runtime
//! as live; [`shutdown`] tears the state down again and clears the topic
//! registry so later registrations start from fresh queues. Both calls are
//! expected exactly once per process, bracketing everything else.

use crate::communication::registry;
use crate::error::{IbisError, IbisResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

struct RuntimeState {
    args: Vec<String>,
    started_at: Instant,
}

static STATE: Lazy<RwLock<Option<RuntimeState>>> = Lazy::new(|| RwLock::new(None));

/// Initialize the process-wide runtime from the raw argument vector.
///
/// Arguments are captured opaquely; nothing is parsed here.
pub fn init<I>(args: I) -> IbisResult<()>
where
    I: IntoIterator<Item = String>,
{
    let mut state = STATE.write();
    if state.is_some() {
        return Err(IbisError::AlreadyInitialized);
    }
    *state = Some(RuntimeState {
        args: args.into_iter().collect(),
        started_at: Instant::now(),
    });
    Ok(())
}

/// Tear down the process-wide runtime state.
pub fn shutdown() -> IbisResult<()> {
    let mut state = STATE.write();
    if state.take().is_none() {
        return Err(IbisError::NotInitialized);
    }
    registry::clear();
    Ok(())
}

/// Whether [`init`] has been called without a matching [`shutdown`].
pub fn is_initialized() -> bool {
    STATE.read().is_some()
}

/// Argument vector captured at [`init`], if the runtime is live.
pub fn args() -> Option<Vec<String>> {
    STATE.read().as_ref().map(|state| state.args.clone())
}

/// Time elapsed since [`init`], if the runtime is live.
pub fn uptime() -> Option<Duration> {
    STATE.read().as_ref().map(|state| state.started_at.elapsed())
}

//! # Recording configuration
//!
//! Controls whether applied operations are wired into the computation graph.
//! The flag is scoped to the current thread and defaults to `true`. It is
//! changed only through [`RecordingGuard`], which restores the previous value
//! when dropped.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static RECORDING_ENABLED: Cell<bool> = Cell::new(true);
}

/// Returns `true` if operations applied on this thread record graph history.
pub fn is_recording_enabled() -> bool {
    RECORDING_ENABLED.with(|flag| flag.get())
}

/// Restores the recording flag it replaced when dropped.
///
/// The guard is bound to the thread that created it.
#[must_use = "recording is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct RecordingGuard {
    previous: bool,
    _not_send: PhantomData<*const ()>,
}

impl Drop for RecordingGuard {
    fn drop(&mut self) {
        let previous = self.previous;
        RECORDING_ENABLED.with(|flag| flag.set(previous));
    }
}

/// Sets the recording flag to `enabled` until the returned guard is dropped.
pub fn using_recording(enabled: bool) -> RecordingGuard {
    let previous = RECORDING_ENABLED.with(|flag| flag.replace(enabled));
    log::trace!("recording set to {} (was {})", enabled, previous);
    RecordingGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Disables recording until the returned guard is dropped.
///
/// ```
/// use revgrad_core::config::{is_recording_enabled, with_recording_disabled};
///
/// {
///     let _guard = with_recording_disabled();
///     assert!(!is_recording_enabled());
/// }
/// assert!(is_recording_enabled());
/// ```
pub fn with_recording_disabled() -> RecordingGuard {
    using_recording(false)
}

/// Runs `f` with recording disabled and returns its result.
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = with_recording_disabled();
    f()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Resize debounce — an explicit two-state machine.
///
/// Resize events arrive in bursts while the user drags a window edge.
/// The machine turns a burst into a single deferred resize: the first
/// event opens a 100ms settling window, later events inside the window
/// are dropped without extending it, and the poll after the deadline
/// fires exactly once.
///
/// Time is caller-supplied in milliseconds (any monotonic timeline
/// works); the machine never reads a clock itself.

/// Settling window opened by the first resize event, in milliseconds.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// Debounce states.
enum DebounceState {
    /// No resize pending
    Idle,
    /// A resize fires once `poll` passes the deadline
    Pending { deadline: f64 },
}

/// Two-state resize debounce machine.
pub struct ResizeDebounce {
    state: DebounceState,
}

impl ResizeDebounce {
    /// Create the machine in the Idle state.
    pub fn new() -> Self {
        Self {
            state: DebounceState::Idle,
        }
    }

    /// True while a resize is scheduled and not yet fired.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Record a resize event at the given time.
    ///
    /// From Idle this schedules the settling deadline; while pending the
    /// event is dropped and the deadline is NOT extended, so a steady
    /// stream of events still resolves within one window.
    pub fn notify(&mut self, now: f64) {
        if let DebounceState::Idle = self.state {
            self.state = DebounceState::Pending {
                deadline: now + RESIZE_DEBOUNCE_MS,
            };
        }
    }

    /// Check whether the settling window has elapsed.
    ///
    /// Returns true exactly once per window, at the first poll at or
    /// past the deadline, and leaves the machine Idle again. The caller
    /// runs the actual resize on a true result; whatever that resize
    /// does (including aborting on a hidden viewport) the machine stays
    /// Idle until the next event.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.state {
            DebounceState::Pending { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "resize_tests.rs"]
mod tests;

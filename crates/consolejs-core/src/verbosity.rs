//! Verbosity filtering
//!
//! Decides whether a message at a given level is emitted under the current
//! threshold, and provides a scoped override that is always undone.

use parking_lot::{ReentrantMutex, ReentrantMutexGuard, RwLock};

use crate::levels::Level;

/// Current threshold and the derived enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbosityState {
    threshold: Level,
    enabled: bool,
}

impl Default for VerbosityState {
    fn default() -> Self {
        Self {
            threshold: Level::None,
            enabled: false,
        }
    }
}

impl VerbosityState {
    pub fn new(threshold: Level) -> Self {
        let mut state = Self::default();
        state.set_threshold(threshold);
        state
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Store the threshold and re-derive `enabled`; returns the stored level
    pub fn set_threshold(&mut self, level: Level) -> Level {
        self.threshold = level;
        self.enabled = level != Level::None;
        self.threshold
    }

    /// Whether a message at `level` passes the filter
    ///
    /// Verbose messages pass whenever output is enabled at all. Other levels
    /// pass when they are at or above the threshold.
    pub fn should_emit(&self, level: Level) -> bool {
        if !self.enabled {
            return false;
        }
        match level {
            Level::None => false,
            Level::Verbose => true,
            _ => level.as_i32() >= self.threshold.as_i32(),
        }
    }
}

/// Shared verbosity state with a serialized override slot
#[derive(Debug, Default)]
pub struct VerbosityFilter {
    state: RwLock<VerbosityState>,
    override_slot: ReentrantMutex<()>,
}

impl VerbosityFilter {
    pub fn new(threshold: Level) -> Self {
        Self {
            state: RwLock::new(VerbosityState::new(threshold)),
            override_slot: ReentrantMutex::new(()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> VerbosityState {
        *self.state.read()
    }

    pub fn threshold(&self) -> Level {
        self.state.read().threshold()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read().is_enabled()
    }

    pub fn set_threshold(&self, level: Level) -> Level {
        self.state.write().set_threshold(level)
    }

    pub fn should_emit(&self, level: Level) -> bool {
        self.state.read().should_emit(level)
    }

    /// Force the threshold to `level` until the returned guard is dropped
    ///
    /// Overrides from different threads are serialized; the state captured
    /// on entry is written back verbatim on every exit path, unwinding
    /// included.
    pub fn override_threshold(&self, level: Level) -> VerbosityOverride<'_> {
        let slot = self.override_slot.lock();
        let saved = {
            let mut state = self.state.write();
            let saved = *state;
            state.set_threshold(level);
            saved
        };
        tracing::trace!(target: "consolejs", from = %saved.threshold(), to = %level, "verbosity override");
        VerbosityOverride {
            filter: self,
            saved,
            _slot: slot,
        }
    }
}

/// Guard returned by [`VerbosityFilter::override_threshold`]
pub struct VerbosityOverride<'a> {
    filter: &'a VerbosityFilter,
    saved: VerbosityState,
    _slot: ReentrantMutexGuard<'a, ()>,
}

impl VerbosityOverride<'_> {
    /// State that will be restored on drop
    pub fn saved(&self) -> VerbosityState {
        self.saved
    }
}

impl Drop for VerbosityOverride<'_> {
    fn drop(&mut self) {
        *self.filter.state.write() = self.saved;
    }
}

impl std::fmt::Debug for VerbosityOverride<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbosityOverride")
            .field("saved", &self.saved)
            .finish()
    }
}

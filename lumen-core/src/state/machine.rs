//! State machine definition
//!
//! All drawing, flushing and command traffic is gated on the current
//! lifecycle state. Operations issued while the panel is not ready are
//! silent no-ops rather than errors, so callers may race initialization
//! without crashing.

use super::events::Event;

/// Device lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Constructed, no bus traffic yet
    #[default]
    Uninitialized,
    /// Reset pulse in progress
    Resetting,
    /// Register configuration being written
    Configuring,
    /// Configured, display not yet switched on
    Ready,
    /// Display on and showing RAM contents
    Displaying,
    /// Configured but display switched off
    Blanked,
    /// Torn down; a fresh reset is required before reuse
    Deinitialized,
}

impl DeviceState {
    /// Check whether drawing and flush operations take effect
    pub fn accepts_drawing(&self) -> bool {
        matches!(self, DeviceState::Ready | DeviceState::Displaying)
    }

    /// Check whether the controller has been configured
    pub fn is_initialized(&self) -> bool {
        matches!(
            self,
            DeviceState::Ready | DeviceState::Displaying | DeviceState::Blanked
        )
    }

    /// Check whether teardown already ran
    pub fn is_deinitialized(&self) -> bool {
        matches!(self, DeviceState::Deinitialized)
    }

    /// Process an event and return the next state
    ///
    /// This is the core transition logic. A reset may start from any
    /// state (re-initialization is allowed); unlisted pairs keep the
    /// current state.
    pub fn transition(self, event: Event) -> Self {
        use DeviceState::*;
        use Event::*;

        match (self, event) {
            // Reset is accepted from every state
            (_, ResetStarted) => Resetting,
            (_, Teardown) => Deinitialized,

            (Resetting, ResetReleased) => Configuring,
            (Configuring, ConfigApplied) => Ready,

            (Ready, DisplayEnabled) => Displaying,
            (Blanked, DisplayEnabled) => Displaying,
            (Displaying, DisplayDisabled) => Blanked,

            // Default: stay in current state
            _ => self,
        }
    }
}

//! Lifecycle events driven by the device sequencer

/// Events that move the device through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Reset pulse started on the reset line
    ResetStarted,
    /// Reset line released; register programming may begin
    ResetReleased,
    /// Full configuration sequence written
    ConfigApplied,
    /// Display-on command issued
    DisplayEnabled,
    /// Display-off command issued
    DisplayDisabled,
    /// Final reset + display-off teardown issued
    Teardown,
}

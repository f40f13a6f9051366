//! Configuration type definitions
//!
//! All presentation durations are counted in ticks of the fixed
//! presentation timer; the wall clock plays no part in phase timing.

use crate::presentation::Phase;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation tick period in milliseconds
pub const TICK_PERIOD_MS: u32 = 500;

/// Title shown before the first delivery arrives
pub const DEFAULT_TITLE: &str = "A POEM";

/// Errors detected when validating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A timed phase has a zero duration and would never be left
    ZeroPhaseDuration(Phase),
    /// The poem refresh interval is zero minutes
    ZeroRefreshInterval,
}

/// Per-phase durations, counted in ticks
///
/// A phase with duration N is left on the N-th tick spent in it. The
/// poem phase is the exception: its value is the interval between
/// fragment reveals, and the phase ends only on pagination exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhasePlan {
    /// Blank lead-in before the title appears
    pub start_ticks: u16,
    /// How long the title stays up
    pub title_ticks: u16,
    /// Blank gap between title and poem
    pub blank_before_ticks: u16,
    /// Interval between fragment reveals during the poem
    pub fragment_interval_ticks: u16,
    /// Blank tail after the poem before the cycle restarts
    pub blank_after_ticks: u16,
}

impl Default for PhasePlan {
    fn default() -> Self {
        Self {
            start_ticks: 1,
            title_ticks: 4,
            blank_before_ticks: 1,
            fragment_interval_ticks: 8,
            blank_after_ticks: 1,
        }
    }
}

impl PhasePlan {
    /// Ticks before the given phase expires
    pub fn duration_ticks(&self, phase: Phase) -> u16 {
        match phase {
            Phase::Start => self.start_ticks,
            Phase::Title => self.title_ticks,
            Phase::BlankBeforePoem => self.blank_before_ticks,
            Phase::Poem => self.fragment_interval_ticks,
            Phase::BlankAfterPoem => self.blank_after_ticks,
        }
    }

    /// Check that every timed phase can expire
    pub fn validate(&self) -> Result<(), ConfigError> {
        for phase in [
            Phase::Start,
            Phase::Title,
            Phase::BlankBeforePoem,
            Phase::BlankAfterPoem,
        ] {
            if self.duration_ticks(phase) == 0 {
                return Err(ConfigError::ZeroPhaseDuration(phase));
            }
        }
        Ok(())
    }
}

/// Poem refresh schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefreshConfig {
    /// Request a fresh poem every N minutes, on minutes divisible by N
    pub every_minutes: u8,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { every_minutes: 10 }
    }
}

impl RefreshConfig {
    /// Check that the schedule can fire
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.every_minutes == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        Ok(())
    }
}

/// Top-level presentation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PresentationConfig {
    /// Phase durations
    pub plan: PhasePlan,
    /// Poem refresh schedule
    pub refresh: RefreshConfig,
}

impl PresentationConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plan.validate()?;
        self.refresh.validate()
    }
}

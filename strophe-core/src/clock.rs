//! Wall-clock gating
//!
//! The presentation timer is decoupled from the wall clock. Clock
//! observations are used for exactly two things: refreshing the
//! displayed time-of-day string once per minute boundary, and firing
//! the periodic poem request once per qualifying minute.

/// Wall-clock fields delivered by the clock source, roughly once per second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTick {
    /// Minute of the hour (0-59)
    pub minute: u8,
    /// Second of the minute (0-59); carried for collaborators, the gate
    /// itself latches on the minute value
    pub second: u8,
}

/// Actions owed to the collaborators after a clock observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockOutcome {
    /// Redraw the time-of-day string
    pub refresh_time_display: bool,
    /// Send a poem request to the companion (best-effort, no retry)
    pub request_poem: bool,
}

/// Once-per-minute gate for time refresh and poem requests
///
/// Latching on the observed minute makes the gate robust to repeated or
/// skipped individual seconds: a qualifying minute fires exactly once
/// however many observations land inside it.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    every_minutes: u8,
    last_minute: Option<u8>,
}

impl RefreshSchedule {
    /// Create a schedule firing on minutes divisible by `every_minutes`
    pub fn new(every_minutes: u8) -> Self {
        Self {
            every_minutes,
            last_minute: None,
        }
    }

    /// Observe one clock tick
    ///
    /// The first observation counts as a minute boundary, so the time
    /// display is populated immediately after startup.
    pub fn observe(&mut self, tick: ClockTick) -> ClockOutcome {
        let minute_turned = self.last_minute != Some(tick.minute);
        self.last_minute = Some(tick.minute);

        if !minute_turned {
            return ClockOutcome::default();
        }

        ClockOutcome {
            refresh_time_display: true,
            request_poem: self.every_minutes != 0 && tick.minute % self.every_minutes == 0,
        }
    }
}

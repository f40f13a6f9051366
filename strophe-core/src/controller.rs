//! Presentation controller
//!
//! The central coordinator: owns the presentation machine, the pending
//! delivery slot, and the refresh schedule. The tick path and the
//! asynchronous delivery path meet only at the pending slot; pagination
//! state is touched by the tick path alone, so a delivery can land at
//! any time without disturbing the poem on screen.

use strophe_protocol::{CompanionMessage, Frame, PoemDelivery};

use crate::clock::{ClockOutcome, ClockTick, RefreshSchedule};
use crate::config::{ConfigError, PresentationConfig};
use crate::presentation::{Intents, Phase, Presentation};

/// Coordinates the presentation machine with its collaborators
#[derive(Debug)]
pub struct Controller {
    presentation: Presentation,
    refresh: RefreshSchedule,
    pending: Option<PoemDelivery>,
}

impl Controller {
    /// Create a controller; fails fast on invalid configuration
    pub fn new(config: PresentationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            presentation: Presentation::new(config.plan)?,
            refresh: RefreshSchedule::new(config.refresh.every_minutes),
            pending: None,
        })
    }

    /// Drive one presentation tick
    ///
    /// A staged delivery is adopted first whenever the machine is
    /// sitting in `Start`; mid-cycle deliveries wait here until the
    /// cycle restarts.
    pub fn on_tick(&mut self) -> Intents<'_> {
        if self.presentation.phase() == Phase::Start {
            if let Some(poem) = self.pending.take() {
                log::debug!("adopting staged poem, body {} bytes", poem.body.len());
                self.presentation.load_poem(&poem.title, &poem.body);
            }
        }
        self.presentation.on_tick()
    }

    /// Stage a freshly delivered poem
    ///
    /// Replaces any previously staged pair; the newest delivery wins.
    pub fn deliver(&mut self, poem: PoemDelivery) {
        log::info!(
            "staged poem: title {} bytes, body {} bytes",
            poem.title.len(),
            poem.body.len()
        );
        self.pending = Some(poem);
    }

    /// Handle a raw inbound frame from the companion link
    ///
    /// A malformed frame is logged and dropped; the held poem keeps
    /// playing.
    pub fn on_frame(&mut self, frame: &Frame) {
        match CompanionMessage::from_frame(frame) {
            Ok(CompanionMessage::Poem(poem)) => self.deliver(poem),
            Err(err) => log::warn!("dropped inbound message: {:?}", err),
        }
    }

    /// Observe a wall-clock tick
    ///
    /// The returned outcome tells the glue what it owes the
    /// collaborators: a time-string redraw, a poem request, or nothing.
    pub fn on_clock(&mut self, tick: ClockTick) -> ClockOutcome {
        let outcome = self.refresh.observe(tick);
        if outcome.request_poem {
            log::info!("requesting fresh poem");
        }
        outcome
    }

    /// Current presentation phase
    pub fn phase(&self) -> Phase {
        self.presentation.phase()
    }

    /// Check whether a delivery is waiting for adoption
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The presentation machine (read access for rendering glue)
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
}

//! Tick-driven presentation machine
//!
//! Owns the current phase, the phase timer, the title, and the
//! pagination engine. `on_tick` is the only mutator of phase and timer:
//! it increments the timer, then on expiry performs the transition and
//! returns the render intents the transition owes the surface.

use heapless::{String, Vec};
use strophe_protocol::{copy_truncated, MAX_TITLE_LEN};

use super::intents::RenderIntent;
use super::phase::Phase;
use crate::config::{ConfigError, PhasePlan, DEFAULT_TITLE};
use crate::paginate::Paginator;
use crate::traits::surface::Region;

/// Maximum render intents a single tick can emit
pub const MAX_INTENTS_PER_TICK: usize = 4;

/// Intents owed to the surface after one tick
pub type Intents<'a> = Vec<RenderIntent<'a>, MAX_INTENTS_PER_TICK>;

/// Elapsed time within the current phase, counted in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseTimer {
    elapsed_ticks: u32,
}

impl PhaseTimer {
    /// Reset to the top of a phase
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    /// Count one tick and return the new elapsed count
    pub fn tick(&mut self) -> u32 {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        self.elapsed_ticks
    }

    /// Ticks spent in the current phase so far
    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }
}

/// The presentation state machine
#[derive(Debug)]
pub struct Presentation {
    phase: Phase,
    timer: PhaseTimer,
    title: String<MAX_TITLE_LEN>,
    paginator: Paginator,
    plan: PhasePlan,
}

impl Presentation {
    /// Create a machine at the top of the cycle
    ///
    /// Fails fast on a plan with a zero-duration timed phase.
    pub fn new(plan: PhasePlan) -> Result<Self, ConfigError> {
        plan.validate()?;
        let mut title = String::new();
        copy_truncated(DEFAULT_TITLE, &mut title);
        Ok(Self {
            phase: Phase::Start,
            timer: PhaseTimer::default(),
            title,
            paginator: Paginator::new(),
            plan,
        })
    }

    /// Install a new poem pair
    ///
    /// Replaces title and body together and rewinds pagination. The
    /// controller calls this only while the machine sits in `Start`, so
    /// a poem mid-presentation is never disturbed.
    pub fn load_poem(&mut self, title: &str, body: &str) {
        copy_truncated(title, &mut self.title);
        self.paginator.set_source(body);
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks spent in the current phase
    pub fn elapsed_ticks(&self) -> u32 {
        self.timer.elapsed_ticks()
    }

    /// Current title
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The pagination engine (read access)
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Drive one presentation tick
    ///
    /// Timed phases expire after their configured tick count. The poem
    /// phase instead treats its duration as the inter-fragment interval
    /// and is left only once pagination reported exhaustion on an
    /// earlier interval.
    pub fn on_tick(&mut self) -> Intents<'_> {
        let elapsed = self.timer.tick();
        let mut intents = Intents::new();

        if elapsed < u32::from(self.plan.duration_ticks(self.phase)) {
            return intents;
        }
        self.timer.reset();

        match self.phase {
            Phase::Start => {
                self.phase = Phase::Title;
                let _ = intents.push(RenderIntent::SetText(Region::Title, self.title.as_str()));
                let _ = intents.push(RenderIntent::Show(Region::Title));
            }
            Phase::Title => {
                self.phase = Phase::BlankBeforePoem;
                let _ = intents.push(RenderIntent::Hide(Region::Title));
            }
            Phase::BlankBeforePoem => {
                self.phase = Phase::Poem;
                self.paginator.rewind();
                let _ = intents.push(RenderIntent::SetText(
                    Region::Fragment,
                    self.paginator.fragment(),
                ));
                let _ = intents.push(RenderIntent::Show(Region::Fragment));
            }
            Phase::Poem => {
                if self.paginator.is_exhausted() {
                    self.phase = Phase::BlankAfterPoem;
                    self.paginator.rewind();
                    let _ = intents.push(RenderIntent::Hide(Region::Fragment));
                } else {
                    let _ = self.paginator.advance();
                    let _ = intents.push(RenderIntent::SetText(
                        Region::Fragment,
                        self.paginator.fragment(),
                    ));
                }
            }
            Phase::BlankAfterPoem => {
                self.phase = Phase::Start;
            }
        }

        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_plan() -> PhasePlan {
        PhasePlan {
            start_ticks: 1,
            title_ticks: 1,
            blank_before_ticks: 1,
            fragment_interval_ticks: 1,
            blank_after_ticks: 1,
        }
    }

    #[test]
    fn test_initial_state() {
        let machine = Presentation::new(PhasePlan::default()).unwrap();
        assert_eq!(machine.phase(), Phase::Start);
        assert_eq!(machine.elapsed_ticks(), 0);
        assert_eq!(machine.title(), "A POEM");
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let plan = PhasePlan {
            blank_after_ticks: 0,
            ..PhasePlan::default()
        };
        assert_eq!(
            Presentation::new(plan).err(),
            Some(ConfigError::ZeroPhaseDuration(Phase::BlankAfterPoem))
        );
    }

    #[test]
    fn test_timed_phase_counts_ticks() {
        let plan = PhasePlan {
            start_ticks: 3,
            ..quick_plan()
        };
        let mut machine = Presentation::new(plan).unwrap();

        assert!(machine.on_tick().is_empty());
        assert_eq!(machine.elapsed_ticks(), 1);
        assert!(machine.on_tick().is_empty());
        assert_eq!(machine.phase(), Phase::Start);

        assert_eq!(
            machine.on_tick().as_slice(),
            &[
                RenderIntent::SetText(Region::Title, "A POEM"),
                RenderIntent::Show(Region::Title),
            ]
        );
        assert_eq!(machine.phase(), Phase::Title);
        assert_eq!(machine.elapsed_ticks(), 0);
    }

    #[test]
    fn test_title_exit_hides_title() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        let _ = machine.on_tick(); // Start -> Title

        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::Hide(Region::Title)]
        );
        assert_eq!(machine.phase(), Phase::BlankBeforePoem);
    }

    #[test]
    fn test_poem_entry_shows_empty_fragment_region() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        machine.load_poem("T", "a|b");
        let _ = machine.on_tick(); // Start -> Title
        let _ = machine.on_tick(); // Title -> BlankBeforePoem

        // BlankBeforePoem -> Poem
        assert_eq!(
            machine.on_tick().as_slice(),
            &[
                RenderIntent::SetText(Region::Fragment, ""),
                RenderIntent::Show(Region::Fragment),
            ]
        );
        assert_eq!(machine.phase(), Phase::Poem);
    }

    #[test]
    fn test_poem_reveals_fragments_then_exits() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        machine.load_poem("T", "a|b");
        let _ = machine.on_tick(); // -> Title
        let _ = machine.on_tick(); // -> BlankBeforePoem
        let _ = machine.on_tick(); // -> Poem

        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::SetText(Region::Fragment, "a|")]
        );

        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::SetText(Region::Fragment, "b")]
        );
        assert_eq!(machine.phase(), Phase::Poem);

        // Exhaustion was flagged while exposing "b"; the next interval
        // leaves the phase.
        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::Hide(Region::Fragment)]
        );
        assert_eq!(machine.phase(), Phase::BlankAfterPoem);

        assert!(machine.on_tick().is_empty()); // -> Start
        assert_eq!(machine.phase(), Phase::Start);
    }

    #[test]
    fn test_fragment_interval_two_ticks() {
        let plan = PhasePlan {
            fragment_interval_ticks: 2,
            ..quick_plan()
        };
        let mut machine = Presentation::new(plan).unwrap();
        machine.load_poem("T", "one|two");
        let _ = machine.on_tick();
        let _ = machine.on_tick();
        let _ = machine.on_tick(); // -> Poem

        // First tick of the interval does not advance the fragment
        assert!(machine.on_tick().is_empty());
        // The second does
        let intents = machine.on_tick();
        assert_eq!(
            intents.as_slice(),
            &[RenderIntent::SetText(Region::Fragment, "one|")]
        );
    }

    #[test]
    fn test_empty_poem_runs_one_empty_fragment() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        let _ = machine.on_tick(); // -> Title
        let _ = machine.on_tick(); // -> BlankBeforePoem
        let _ = machine.on_tick(); // -> Poem

        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::SetText(Region::Fragment, "")]
        );

        assert_eq!(
            machine.on_tick().as_slice(),
            &[RenderIntent::Hide(Region::Fragment)]
        );
        assert_eq!(machine.phase(), Phase::BlankAfterPoem);
    }

    #[test]
    fn test_pagination_cleared_on_poem_exit() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        machine.load_poem("T", "solo");
        for _ in 0..4 {
            let _ = machine.on_tick(); // through Poem revealing "solo"
        }
        let _ = machine.on_tick(); // exit Poem
        assert_eq!(machine.phase(), Phase::BlankAfterPoem);
        assert_eq!(machine.paginator().fragment(), "");
        assert!(!machine.paginator().is_exhausted());
    }

    #[test]
    fn test_cycle_repeats_without_new_delivery() {
        let mut machine = Presentation::new(quick_plan()).unwrap();
        machine.load_poem("T", "x");

        // One full cycle: Start, Title, BlankBefore, Poem("x"), exit, BlankAfter
        for _ in 0..6 {
            let _ = machine.on_tick();
        }
        assert_eq!(machine.phase(), Phase::Start);

        // The same poem plays again on the next cycle
        let _ = machine.on_tick(); // -> Title
        let _ = machine.on_tick(); // -> BlankBeforePoem
        let _ = machine.on_tick(); // -> Poem
        let intents = machine.on_tick();
        assert_eq!(
            intents.as_slice(),
            &[RenderIntent::SetText(Region::Fragment, "x")]
        );
    }
}

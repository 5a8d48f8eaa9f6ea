//! Scroll-triggered reveal controller.
//!
//! One controller per page section. It hides the section's targets on
//! mount, plays the section timeline forward when the section enters the
//! visible range and backward when it leaves, any number of times. A
//! crossing that arrives mid-transition turns the playhead around where
//! it is, so a reverse always starts from what is currently on screen.
//!
//! The controller does no I/O itself. Targets are written through
//! [`AnimationTarget`], visibility is delivered by whoever owns the
//! [`VisibilityObserver`], and time only moves when [`RevealController::tick`]
//! is called by the frame clock.

use thiserror::Error;

use super::timeline::{AnimationSpec, Presentation, Timeline};
use super::visibility::{Trigger, VisibilityEvent};

/// Something on screen a presentation can be written to.
pub trait AnimationTarget {
    fn apply(&self, presentation: &Presentation);
}

/// Host side of visibility observation for one section.
pub trait VisibilityObserver {
    fn observe(&mut self, section: &str, trigger: &Trigger);
    fn release(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealing,
    Revealed,
    Reversing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevealError {
    #[error("section `{section}`: animation target {index} is not mounted")]
    MissingTarget { section: String, index: usize },
    #[error("section `{section}`: animation target {index} has no stage")]
    UnexpectedTarget { section: String, index: usize },
}

pub struct RevealController<T> {
    section: String,
    targets: Vec<T>,
    hidden: Vec<Presentation>,
    timeline: Timeline,
    trigger: Trigger,
    state: RevealState,
    playhead_ms: f64,
    observer: Option<Box<dyn VisibilityObserver>>,
    torn_down: bool,
}

impl<T: AnimationTarget> RevealController<T> {
    /// Resolve targets and put them in their hidden presentation.
    ///
    /// Fails without touching any target when one is absent or when the
    /// count does not match the stages of `spec`.
    pub fn mount(
        section: impl Into<String>,
        targets: Vec<Option<T>>,
        spec: &AnimationSpec,
        trigger: Trigger,
    ) -> Result<Self, RevealError> {
        let section = section.into();
        let expected = spec.target_count();

        if targets.len() > expected {
            return Err(RevealError::UnexpectedTarget {
                section,
                index: expected,
            });
        }
        if targets.len() < expected {
            return Err(RevealError::MissingTarget {
                index: targets.len(),
                section,
            });
        }
        if let Some(index) = targets.iter().position(Option::is_none) {
            return Err(RevealError::MissingTarget { section, index });
        }

        let targets: Vec<T> = targets.into_iter().flatten().collect();
        let hidden = spec.hidden();
        for (target, presentation) in targets.iter().zip(&hidden) {
            target.apply(presentation);
        }

        Ok(RevealController {
            section,
            targets,
            hidden,
            timeline: spec.timeline(),
            trigger,
            state: RevealState::Hidden,
            playhead_ms: 0.0,
            observer: None,
            torn_down: false,
        })
    }

    /// Start observing visibility. Replaces (and releases) any earlier observer.
    pub fn attach(&mut self, mut observer: Box<dyn VisibilityObserver>) {
        if self.torn_down {
            return;
        }
        if let Some(mut previous) = self.observer.take() {
            previous.release();
        }
        observer.observe(&self.section, &self.trigger);
        self.observer = Some(observer);
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn playhead_ms(&self) -> f64 {
        self.playhead_ms
    }

    pub fn is_animating(&self) -> bool {
        !self.torn_down && matches!(self.state, RevealState::Revealing | RevealState::Reversing)
    }

    /// Handle a visibility crossing. Returns true when a transition started
    /// and the frame clock needs to run.
    pub fn on_visibility(&mut self, event: VisibilityEvent) -> bool {
        if self.torn_down {
            return false;
        }
        let next = match (event, self.state) {
            (VisibilityEvent::Entered, RevealState::Hidden | RevealState::Reversing) => {
                RevealState::Revealing
            }
            (VisibilityEvent::Exited, RevealState::Revealed | RevealState::Revealing) => {
                RevealState::Reversing
            }
            _ => return false,
        };
        self.state = next;
        true
    }

    /// Advance the playhead by `elapsed_ms` in the current direction and
    /// render. Returns true while the transition is still in flight.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        if !self.is_animating() {
            return false;
        }
        let duration = self.timeline.duration_ms();
        let elapsed = elapsed_ms.max(0.0);

        match self.state {
            RevealState::Revealing => {
                self.playhead_ms = (self.playhead_ms + elapsed).min(duration);
                self.render();
                if self.playhead_ms >= duration {
                    self.state = RevealState::Revealed;
                }
            }
            RevealState::Reversing => {
                self.playhead_ms = (self.playhead_ms - elapsed).max(0.0);
                if self.playhead_ms <= 0.0 {
                    // Same presentation mount applied, whatever the stage durations.
                    self.render_hidden();
                    self.state = RevealState::Hidden;
                } else {
                    self.render();
                }
            }
            RevealState::Hidden | RevealState::Revealed => {}
        }
        self.is_animating()
    }

    /// Cancel whatever is in flight and release the observation. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(mut observer) = self.observer.take() {
            observer.release();
        }
    }

    fn render(&self) {
        for (target, presentation) in self.targets.iter().zip(self.timeline.sample(self.playhead_ms)) {
            target.apply(&presentation);
        }
    }

    fn render_hidden(&self) {
        for (target, presentation) in self.targets.iter().zip(&self.hidden) {
            target.apply(presentation);
        }
    }
}

impl<T> Drop for RevealController<T> {
    fn drop(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.release();
        }
    }
}

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use gloo_timers::callback::{Interval, Timeout};

use super::engine::EngineConfig;

/// Per-section frame clock.
///
/// Runs a frame callback on an interval while a transition is in flight.
/// After the callback has reported idle for `auto_sleep_frames` frames the
/// interval is dropped from a zero-delay timeout, never from inside its own
/// callback. Dropping the clock cancels everything.
pub struct FrameClock {
    config: EngineConfig,
    interval: RefCell<Option<Interval>>,
    sleep: RefCell<Option<Timeout>>,
    idle_frames: Cell<u32>,
    last_frame: Cell<Option<DateTime<Utc>>>,
}

impl FrameClock {
    pub fn new(config: EngineConfig) -> Rc<Self> {
        Rc::new(FrameClock {
            config,
            interval: RefCell::new(None),
            sleep: RefCell::new(None),
            idle_frames: Cell::new(0),
            last_frame: Cell::new(None),
        })
    }

    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }

    /// `frame` gets the elapsed ms since the previous frame and returns
    /// whether it still has work.
    pub fn start<F>(self: &Rc<Self>, frame: F)
    where
        F: Fn(f64) -> bool + 'static,
    {
        self.idle_frames.set(0);
        self.sleep.borrow_mut().take();
        if self.is_running() {
            return;
        }

        self.last_frame.set(Some(Utc::now()));
        let clock = Rc::downgrade(self);
        let interval = Interval::new(self.config.frame_interval_ms, move || {
            if let Some(clock) = clock.upgrade() {
                clock.on_frame(&frame);
            }
        });
        *self.interval.borrow_mut() = Some(interval);
    }

    pub fn stop(&self) {
        self.sleep.borrow_mut().take();
        self.interval.borrow_mut().take();
        self.last_frame.set(None);
    }

    fn on_frame(self: &Rc<Self>, frame: &dyn Fn(f64) -> bool) {
        let now = Utc::now();
        let measured = self
            .last_frame
            .replace(Some(now))
            .map(|last| (now - last).num_milliseconds() as f64)
            .unwrap_or(0.0);

        if frame(self.config.frame_elapsed(measured)) {
            self.idle_frames.set(0);
            return;
        }

        let idle = self.idle_frames.get().saturating_add(1);
        self.idle_frames.set(idle);
        if idle >= self.config.auto_sleep_frames && self.sleep.borrow().is_none() {
            let clock: Weak<Self> = Rc::downgrade(self);
            let sleep = Timeout::new(0, move || {
                if let Some(clock) = clock.upgrade() {
                    clock.interval.borrow_mut().take();
                    clock.last_frame.set(None);
                }
            });
            *self.sleep.borrow_mut() = Some(sleep);
        }
    }
}

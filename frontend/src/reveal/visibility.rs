//! Visibility crossings from section geometry.

/// Threshold lines of one section, as fractions of the viewport height
/// measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// The section enters once its top edge is at or above this line.
    pub enter_start: f64,
    /// The section leaves once its bottom edge is above this line. Without
    /// one it only leaves by scrolling back above `enter_start`.
    pub enter_end: Option<f64>,
}

impl Trigger {
    pub const fn new(enter_start: f64, enter_end: Option<f64>) -> Self {
        Trigger {
            enter_start,
            enter_end,
        }
    }

    pub fn in_range(&self, bounds: Bounds, viewport_height: f64) -> bool {
        let entered = bounds.top <= self.enter_start * viewport_height;
        let not_past = self
            .enter_end
            .map_or(true, |end| bounds.bottom >= end * viewport_height);
        entered && not_past
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::new(0.8, Some(0.2))
    }
}

/// Section bounding box relative to the viewport, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Bounds { top, bottom }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    Entered,
    Exited,
}

/// Turns a stream of geometry samples into crossing events.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    trigger: Trigger,
    inside: Option<bool>,
}

impl VisibilityTracker {
    pub fn new(trigger: Trigger) -> Self {
        VisibilityTracker {
            trigger,
            inside: None,
        }
    }

    /// Emits only when the in-range flag changes. The first sample emits
    /// `Entered` when already in range and nothing otherwise.
    pub fn sample(&mut self, bounds: Bounds, viewport_height: f64) -> Option<VisibilityEvent> {
        if viewport_height <= 0.0 {
            return None;
        }
        let inside = self.trigger.in_range(bounds, viewport_height);
        let previous = self.inside.replace(inside);
        match (previous, inside) {
            (None, true) | (Some(false), true) => Some(VisibilityEvent::Entered),
            (Some(true), false) => Some(VisibilityEvent::Exited),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    #[test]
    fn test_first_sample_outside_is_silent() {
        let mut tracker = VisibilityTracker::new(Trigger::default());
        assert_eq!(tracker.sample(Bounds::new(1200.0, 1800.0), VH), None);
    }

    #[test]
    fn test_first_sample_inside_enters() {
        let mut tracker = VisibilityTracker::new(Trigger::new(1.0, Some(0.0)));
        assert_eq!(
            tracker.sample(Bounds::new(0.0, 900.0), VH),
            Some(VisibilityEvent::Entered)
        );
    }

    #[test]
    fn test_emits_only_on_change() {
        let mut tracker = VisibilityTracker::new(Trigger::default());
        tracker.sample(Bounds::new(900.0, 1500.0), VH);
        assert_eq!(tracker.sample(Bounds::new(800.0, 1400.0), VH), Some(VisibilityEvent::Entered));
        assert_eq!(tracker.sample(Bounds::new(300.0, 900.0), VH), None);
        // Bottom edge passes the 20% line.
        assert_eq!(tracker.sample(Bounds::new(-450.0, 150.0), VH), Some(VisibilityEvent::Exited));
        assert_eq!(tracker.sample(Bounds::new(-900.0, -300.0), VH), None);
        // Scrolling back up re-enters from below the exit line.
        assert_eq!(tracker.sample(Bounds::new(-300.0, 300.0), VH), Some(VisibilityEvent::Entered));
        // And back above the enter line.
        assert_eq!(tracker.sample(Bounds::new(850.0, 1450.0), VH), Some(VisibilityEvent::Exited));
    }

    #[test]
    fn test_without_exit_line_only_leaves_upward() {
        let mut tracker = VisibilityTracker::new(Trigger::new(0.8, None));
        assert_eq!(tracker.sample(Bounds::new(700.0, 1300.0), VH), Some(VisibilityEvent::Entered));
        assert_eq!(tracker.sample(Bounds::new(-5000.0, -4400.0), VH), None);
        assert_eq!(tracker.sample(Bounds::new(810.0, 1410.0), VH), Some(VisibilityEvent::Exited));
    }

    #[test]
    fn test_zero_viewport_is_ignored() {
        let mut tracker = VisibilityTracker::new(Trigger::default());
        assert_eq!(tracker.sample(Bounds::new(0.0, 100.0), 0.0), None);
        assert_eq!(tracker.sample(Bounds::new(0.0, 600.0), VH), Some(VisibilityEvent::Entered));
    }
}

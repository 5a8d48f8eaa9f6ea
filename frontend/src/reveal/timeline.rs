//! Section timelines.
//!
//! An [`AnimationSpec`] is an ordered list of stages. Each stage animates a
//! contiguous group of targets from a hidden [`Presentation`] to
//! [`Presentation::VISIBLE`]. Building the spec into a [`Timeline`] lays the
//! stages out in time: one tween per target, positioned by the stage
//! position, the stage stagger and the end of the stage before it.

use super::easing::Easing;

/// What a target looks like at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f64,
    /// Vertical translation in px.
    pub offset_y: f64,
    pub scale: f64,
}

impl Presentation {
    pub const VISIBLE: Presentation = Presentation {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, otherwise untouched.
    pub const fn transparent() -> Self {
        Presentation {
            opacity: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn offset(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    pub const fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn lerp(&self, to: &Presentation, t: f64) -> Presentation {
        Presentation {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// CSS `transform` value for this presentation.
    pub fn transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.offset_y, self.scale)
    }
}

/// Where a stage starts relative to the stage before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At the end of the previous stage.
    Sequential,
    /// The given number of ms before the end of the previous stage.
    Overlap(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    targets: usize,
    from: Presentation,
    duration_ms: f64,
    easing: Easing,
    stagger_ms: f64,
    position: Position,
}

impl Stage {
    /// A stage animating `targets` elements, 1s power3.out, sequential.
    pub fn new(targets: usize) -> Self {
        Stage {
            targets,
            from: Presentation::transparent(),
            duration_ms: 1000.0,
            easing: Easing::default(),
            stagger_ms: 0.0,
            position: Position::Sequential,
        }
    }

    pub fn from(mut self, from: Presentation) -> Self {
        self.from = from;
        self
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Named easing; unknown names keep the current easing.
    pub fn ease(mut self, name: &str) -> Self {
        if let Some(easing) = Easing::from_name(name) {
            self.easing = easing;
        }
        self
    }

    pub fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms.max(0.0);
        self
    }

    pub fn overlap(mut self, overlap_ms: f64) -> Self {
        self.position = Position::Overlap(overlap_ms);
        self
    }

    pub fn targets(&self) -> usize {
        self.targets
    }
}

/// Immutable animation configuration of one section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationSpec {
    stages: Vec<Stage>,
}

impl AnimationSpec {
    pub fn builder() -> AnimationSpecBuilder {
        AnimationSpecBuilder::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of targets the stages animate, in order.
    pub fn target_count(&self) -> usize {
        self.stages.iter().map(Stage::targets).sum()
    }

    /// Hidden presentation of every target, indexed like the targets.
    pub fn hidden(&self) -> Vec<Presentation> {
        self.stages
            .iter()
            .flat_map(|stage| std::iter::repeat(stage.from).take(stage.targets))
            .collect()
    }

    pub fn timeline(&self) -> Timeline {
        Timeline::build(self)
    }
}

#[derive(Debug, Default)]
pub struct AnimationSpecBuilder {
    stages: Vec<Stage>,
}

impl AnimationSpecBuilder {
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(self) -> AnimationSpec {
        AnimationSpec {
            stages: self.stages,
        }
    }
}

/// One target's share of a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub from: Presentation,
    pub easing: Easing,
}

impl Tween {
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    pub fn sample(&self, at_ms: f64) -> Presentation {
        if at_ms <= self.start_ms && self.duration_ms > 0.0 {
            return self.from;
        }
        if at_ms >= self.end_ms() {
            return Presentation::VISIBLE;
        }
        let t = (at_ms - self.start_ms) / self.duration_ms;
        self.from.lerp(&Presentation::VISIBLE, self.easing.apply(t))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    duration_ms: f64,
}

impl Timeline {
    fn build(spec: &AnimationSpec) -> Self {
        let mut tweens = Vec::with_capacity(spec.target_count());
        let mut previous_end = 0.0_f64;
        let mut target = 0;

        for stage in &spec.stages {
            let start = match stage.position {
                Position::Sequential => previous_end,
                Position::Overlap(ms) => (previous_end - ms).max(0.0),
            };

            let mut stage_end = start;
            for i in 0..stage.targets {
                let tween = Tween {
                    target,
                    start_ms: start + i as f64 * stage.stagger_ms,
                    duration_ms: stage.duration_ms,
                    from: stage.from,
                    easing: stage.easing,
                };
                stage_end = tween.end_ms();
                tweens.push(tween);
                target += 1;
            }
            previous_end = stage_end;
        }

        let duration_ms = tweens.iter().map(Tween::end_ms).fold(0.0, f64::max);
        Timeline {
            tweens,
            duration_ms,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Presentation of every target at `at_ms`, indexed like the targets.
    pub fn sample(&self, at_ms: f64) -> Vec<Presentation> {
        self.tweens.iter().map(|tween| tween.sample(at_ms)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> AnimationSpec {
        let lifted = Presentation::transparent().offset(50.0).scaled(0.9);
        AnimationSpec::builder()
            .stage(
                Stage::new(1)
                    .from(Presentation::transparent().scaled(1.1))
                    .duration(2000.0)
                    .ease("power3.out"),
            )
            .stage(Stage::new(1).duration(1500.0).ease("power2.out").overlap(1500.0))
            .stage(Stage::new(1).from(lifted).duration(1500.0).overlap(1000.0))
            .stage(Stage::new(1).from(lifted).duration(1000.0).overlap(500.0))
            .build()
    }

    #[test]
    fn test_overlap_is_measured_from_previous_end() {
        let timeline = hero().timeline();
        let starts: Vec<f64> = timeline.tweens().iter().map(|t| t.start_ms).collect();
        assert_eq!(starts, vec![0.0, 500.0, 1000.0, 2000.0]);
        assert_eq!(timeline.duration_ms(), 3000.0);
    }

    #[test]
    fn test_stagger_offsets_each_target() {
        let spec = AnimationSpec::builder()
            .stage(Stage::new(1).from(Presentation::transparent().offset(40.0)).duration(800.0))
            .stage(Stage::new(3).duration(800.0).stagger(200.0).overlap(400.0))
            .build();
        let timeline = spec.timeline();
        let starts: Vec<f64> = timeline.tweens().iter().map(|t| t.start_ms).collect();
        assert_eq!(starts, vec![0.0, 400.0, 600.0, 800.0]);
        for pair in timeline.tweens()[1..].windows(2) {
            assert!(pair[1].start_ms - pair[0].start_ms >= 200.0);
        }
        assert_eq!(timeline.duration_ms(), 1600.0);
    }

    #[test]
    fn test_overlap_never_starts_before_zero() {
        let spec = AnimationSpec::builder()
            .stage(Stage::new(1).duration(300.0))
            .stage(Stage::new(1).duration(300.0).overlap(900.0))
            .build();
        assert_eq!(spec.timeline().tweens()[1].start_ms, 0.0);
    }

    #[test]
    fn test_sample_endpoints() {
        let spec = hero();
        let timeline = spec.timeline();
        assert_eq!(timeline.sample(0.0), spec.hidden());
        assert!(timeline
            .sample(timeline.duration_ms())
            .iter()
            .all(|p| *p == Presentation::VISIBLE));
    }

    #[test]
    fn test_sample_is_partial_mid_tween() {
        let tween = Tween {
            target: 0,
            start_ms: 100.0,
            duration_ms: 1000.0,
            from: Presentation::transparent().offset(60.0),
            easing: Easing::Linear,
        };
        let mid = tween.sample(600.0);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.offset_y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_has_no_midpoint() {
        let spec = AnimationSpec::builder().stage(Stage::new(2).duration(0.0)).build();
        let timeline = spec.timeline();
        assert_eq!(timeline.duration_ms(), 0.0);
        // Start and end coincide: sampling gives the end, the start lives in `hidden`.
        assert!(timeline.sample(0.0).iter().all(|p| *p == Presentation::VISIBLE));
        assert!(spec.hidden().iter().all(|p| *p == Presentation::transparent()));
    }

    #[test]
    fn test_hidden_follows_stage_order() {
        let spec = AnimationSpec::builder()
            .stage(Stage::new(1).from(Presentation::transparent().offset(40.0)))
            .stage(Stage::new(2).from(Presentation::transparent().offset(60.0).scaled(0.9)))
            .build();
        let hidden = spec.hidden();
        assert_eq!(spec.target_count(), 3);
        assert_eq!(hidden[0].offset_y, 40.0);
        assert_eq!(hidden[2].scale, 0.9);
    }

    #[test]
    fn test_transform_css() {
        let p = Presentation::transparent().offset(50.0).scaled(0.9);
        assert_eq!(p.transform(), "translateY(50.00px) scale(0.9000)");
    }
}

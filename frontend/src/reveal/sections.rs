//! Reveal compositions of the four page sections.

use super::hook::RevealConfig;
use super::timeline::{AnimationSpec, Presentation, Stage};
use super::visibility::Trigger;

/// Top edge at 80% of the viewport enters, bottom edge above 20% leaves.
const SCROLL_TRIGGER: Trigger = Trigger::new(0.8, Some(0.2));

/// Background, overlay, text and call-to-action, each stage starting
/// before the previous one has finished.
pub fn hero() -> RevealConfig {
    let lifted = Presentation::transparent().offset(50.0).scaled(0.9);
    RevealConfig {
        section: "hero",
        spec: AnimationSpec::builder()
            .stage(
                Stage::new(1)
                    .from(Presentation::transparent().scaled(1.1))
                    .duration(2000.0)
                    .ease("power3.out"),
            )
            .stage(Stage::new(1).duration(1500.0).ease("power2.out").overlap(1500.0))
            .stage(Stage::new(1).from(lifted).duration(1500.0).ease("power3.out").overlap(1000.0))
            .stage(Stage::new(1).from(lifted).duration(1000.0).ease("power3.out").overlap(500.0))
            .build(),
        // Visible as soon as the page loads.
        trigger: Trigger::new(1.0, Some(0.0)),
    }
}

/// Text column, then the video.
pub fn about() -> RevealConfig {
    let lifted = Presentation::transparent().offset(60.0);
    RevealConfig {
        section: "about",
        spec: AnimationSpec::builder()
            .stage(Stage::new(1).from(lifted).duration(1000.0).ease("power3.out"))
            .stage(Stage::new(1).from(lifted).duration(1000.0).ease("power3.out").overlap(700.0))
            .build(),
        trigger: SCROLL_TRIGGER,
    }
}

/// Title, then the package cards one after another.
pub fn pricing(cards: usize) -> RevealConfig {
    RevealConfig {
        section: "pricing",
        spec: AnimationSpec::builder()
            .stage(
                Stage::new(1)
                    .from(Presentation::transparent().offset(40.0))
                    .duration(800.0)
                    .ease("power3.out"),
            )
            .stage(
                Stage::new(cards)
                    .from(Presentation::transparent().offset(60.0).scaled(0.9))
                    .duration(800.0)
                    .ease("power3.out")
                    .stagger(200.0)
                    .overlap(400.0),
            )
            .build(),
        trigger: SCROLL_TRIGGER,
    }
}

/// Every block of the contact column in turn. Only scrolling back above
/// the section hides it again.
pub fn contact(blocks: usize) -> RevealConfig {
    RevealConfig {
        section: "contact",
        spec: AnimationSpec::builder()
            .stage(
                Stage::new(blocks)
                    .from(Presentation::transparent().offset(40.0))
                    .duration(800.0)
                    .ease("power3.out")
                    .stagger(200.0),
            )
            .build(),
        trigger: Trigger::new(0.8, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::easing::Easing;

    fn starts(config: &RevealConfig) -> Vec<f64> {
        config
            .spec
            .timeline()
            .tweens()
            .iter()
            .map(|tween| tween.start_ms)
            .collect()
    }

    #[test]
    fn test_hero_chain_overlaps() {
        let hero = hero();
        assert_eq!(starts(&hero), vec![0.0, 500.0, 1000.0, 2000.0]);
        let tweens = hero.spec.timeline().tweens().to_vec();
        assert_eq!(tweens[1].easing, Easing::Power2Out);
        assert_eq!(tweens[0].from.scale, 1.1);
        assert_eq!(tweens[3].from.offset_y, 50.0);
    }

    #[test]
    fn test_about_video_overlaps_text() {
        assert_eq!(starts(&about()), vec![0.0, 300.0]);
    }

    #[test]
    fn test_pricing_cards_stagger() {
        let pricing = pricing(3);
        assert_eq!(pricing.spec.target_count(), 4);
        assert_eq!(starts(&pricing), vec![0.0, 400.0, 600.0, 800.0]);
    }

    #[test]
    fn test_contact_has_no_exit_line() {
        let contact = contact(4);
        assert_eq!(contact.trigger.enter_end, None);
        assert_eq!(starts(&contact), vec![0.0, 200.0, 400.0, 600.0]);
    }
}

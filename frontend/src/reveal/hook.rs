use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::clock::FrameClock;
use super::controller::RevealController;
use super::dom::{ElementTarget, ScrollObserver};
use super::engine::engine;
use super::timeline::AnimationSpec;
use super::visibility::{Trigger, VisibilityEvent};

/// Everything a section needs to set up its reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub section: &'static str,
    pub spec: AnimationSpec,
    pub trigger: Trigger,
}

struct RevealBinding {
    controller: RefCell<RevealController<ElementTarget>>,
    clock: Rc<FrameClock>,
}

impl RevealBinding {
    /// None when the section or any target is not rendered; nothing is
    /// observed in that case.
    fn mount(section_ref: &NodeRef, targets: &[NodeRef], config: &RevealConfig) -> Option<Rc<Self>> {
        let section = section_ref.cast::<Element>()?;
        let resolved: Vec<Option<ElementTarget>> = targets
            .iter()
            .map(|target| target.cast::<HtmlElement>().map(ElementTarget::new))
            .collect();
        let controller =
            RevealController::mount(config.section, resolved, &config.spec, config.trigger).ok()?;

        let binding = Rc::new(RevealBinding {
            controller: RefCell::new(controller),
            clock: FrameClock::new(engine()),
        });

        let weak = Rc::downgrade(&binding);
        let observer = ScrollObserver::new(section, move |event| {
            if let Some(binding) = weak.upgrade() {
                binding.handle(event);
            }
        });
        binding.controller.borrow_mut().attach(Box::new(observer));
        debug!("reveal: section `{}` mounted", config.section);
        Some(binding)
    }

    fn handle(self: &Rc<Self>, event: VisibilityEvent) {
        let started = self.controller.borrow_mut().on_visibility(event);
        if !started {
            return;
        }
        let weak = Rc::downgrade(self);
        self.clock.start(move |elapsed| {
            weak.upgrade()
                .map_or(false, |binding| binding.controller.borrow_mut().tick(elapsed))
        });
    }

    fn teardown(&self) {
        self.clock.stop();
        let mut controller = self.controller.borrow_mut();
        controller.teardown();
        debug!("reveal: section `{}` torn down", controller.section());
    }
}

/// Hide `targets`, then reveal them as `section_ref` scrolls into view.
/// Set up once on mount and torn down on unmount.
#[hook]
pub fn use_reveal(section_ref: NodeRef, targets: Vec<NodeRef>, config: RevealConfig) {
    use_effect_with_deps(
        move |_| {
            let binding = RevealBinding::mount(&section_ref, &targets, &config);
            move || {
                if let Some(binding) = binding {
                    binding.teardown();
                }
            }
        },
        (),
    );
}

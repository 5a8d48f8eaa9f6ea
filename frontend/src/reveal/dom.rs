use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::controller::{AnimationTarget, VisibilityObserver};
use super::timeline::Presentation;
use super::visibility::{Bounds, Trigger, VisibilityEvent, VisibilityTracker};

/// Writes presentations to an element's inline style. Only `opacity` and
/// `transform` are touched so other inline styles survive.
pub struct ElementTarget(HtmlElement);

impl ElementTarget {
    pub fn new(element: HtmlElement) -> Self {
        ElementTarget(element)
    }
}

impl AnimationTarget for ElementTarget {
    fn apply(&self, presentation: &Presentation) {
        let style = self.0.style();
        let _ = style.set_property("opacity", &format!("{:.4}", presentation.opacity));
        let _ = style.set_property("transform", &presentation.transform());
    }
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Samples the section's bounding box on window scroll and resize.
///
/// The first sample runs from a zero-delay timeout so the sink is never
/// called while the controller is still attaching.
pub struct ScrollObserver {
    element: Element,
    sink: Rc<dyn Fn(VisibilityEvent)>,
    listener: Option<Closure<dyn FnMut()>>,
    initial: Option<Timeout>,
}

impl ScrollObserver {
    pub fn new<F>(element: Element, sink: F) -> Self
    where
        F: Fn(VisibilityEvent) + 'static,
    {
        ScrollObserver {
            element,
            sink: Rc::new(sink),
            listener: None,
            initial: None,
        }
    }
}

impl VisibilityObserver for ScrollObserver {
    fn observe(&mut self, section: &str, trigger: &Trigger) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let tracker = Rc::new(RefCell::new(VisibilityTracker::new(*trigger)));

        let check: Rc<dyn Fn()> = {
            let element = self.element.clone();
            let sink = self.sink.clone();
            let window = window.clone();
            let section = section.to_string();
            Rc::new(move || {
                let rect = element.get_bounding_client_rect();
                let viewport_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let event = tracker
                    .borrow_mut()
                    .sample(Bounds::new(rect.top(), rect.bottom()), viewport_height);
                if let Some(event) = event {
                    debug!("reveal: section `{}` {:?}", section, event);
                    sink(event);
                }
            })
        };

        let listener = {
            let check = check.clone();
            Closure::wrap(Box::new(move || check()) as Box<dyn FnMut()>)
        };
        for event in EVENTS {
            let _ = window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }

        self.initial = Some(Timeout::new(0, move || check()));
        self.listener = Some(listener);
    }

    fn release(&mut self) {
        self.initial.take();
        let Some(listener) = self.listener.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            for event in EVENTS {
                let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    }
}

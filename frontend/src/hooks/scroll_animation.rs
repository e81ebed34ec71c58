use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{Pose, ViewOptions, ViewportTracker};
use crate::error::{js_message, LandingError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ViewState {
    in_view: bool,
    pose: Pose,
}

/// Handle returned by [`use_scroll_animation`].
#[derive(Clone, PartialEq)]
pub struct ScrollAnimation {
    /// Attach to the element whose visibility drives the animation.
    pub node: NodeRef,
    pub in_view: bool,
    pub pose: Pose,
}

/// Keeps the observer callback alive for as long as the observer is connected.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    node: &NodeRef,
    options: ViewOptions,
    tracker: Rc<RefCell<ViewportTracker>>,
    state: UseStateHandle<ViewState>,
) -> Result<Observation> {
    let element = node.cast::<Element>().ok_or(LandingError::NotMounted)?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let mut tracker = tracker.borrow_mut();
                let pose = tracker.observe(entry.is_intersecting(), entry.intersection_ratio());
                state.set(ViewState {
                    in_view: tracker.in_view(),
                    pose,
                });
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.clamped_amount()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| LandingError::Observer(js_message(&e)))?;
    observer.observe(&element);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Pairs an intersection observer with the pose of the block it watches.
///
/// The block starts hidden, becomes visible once enough of it is inside the
/// viewport, and hides again on leaving unless `options.once` is set. If the
/// observer cannot be set up the block is shown right away.
#[hook]
pub fn use_scroll_animation(options: ViewOptions) -> ScrollAnimation {
    let node = use_node_ref();
    let tracker = use_mut_ref(|| ViewportTracker::new(options));
    let state = use_state_eq(ViewState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let observation = match observe(&node, options, tracker, state.clone()) {
                    Ok(observation) => Some(observation),
                    Err(e) => {
                        log::warn!("Scroll animation disabled for block: {}", e);
                        state.set(ViewState {
                            in_view: true,
                            pose: Pose::Visible,
                        });
                        None
                    }
                };
                move || drop(observation)
            },
            (),
        );
    }

    ScrollAnimation {
        node,
        in_view: state.in_view,
        pose: state.pose,
    }
}

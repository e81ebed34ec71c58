use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::error::{js_message, LandingError, Result};

/// Whether a vertical offset counts as scrolled for the header style.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove scroll listener: {}", js_message(&e));
        }
    }
}

fn listen(scrolled: UseStateHandle<bool>) -> Result<ScrollListener> {
    let window = window().ok_or(LandingError::NoWindow)?;
    let callback = Closure::<dyn Fn()>::new({
        let scrolled = scrolled.clone();
        move || {
            if let Some(Ok(scroll_y)) = web_sys::window().map(|w| w.scroll_y()) {
                scrolled.set(is_scrolled(scroll_y));
            }
        }
    });
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(|e| LandingError::Listener {
            event: "scroll",
            message: js_message(&e),
        })?;
    // Initial call
    if let Ok(scroll_y) = window.scroll_y() {
        scrolled.set(is_scrolled(scroll_y));
    }
    Ok(ScrollListener { window, callback })
}

/// Tracks whether the window is scrolled past the header threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = listen(scrolled)
                    .map_err(|e| log::warn!("Header scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }
    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(800.0));
    }

    #[test]
    fn scrolling_back_up_reverts() {
        let offsets = [0.0, 42.0, 11.0, 9.0, 0.0];
        let flags: Vec<bool> = offsets.iter().map(|y| is_scrolled(*y)).collect();
        assert_eq!(flags, vec![false, true, true, false, false]);
    }
}

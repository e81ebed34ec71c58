use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Flips to `true` `delay_ms` after the first render, so mount transitions
/// have a painted starting state to animate from.
#[hook]
pub fn use_mounted_after(delay_ms: u32) -> bool {
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *mounted
}

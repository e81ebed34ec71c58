use yew::prelude::*;

use crate::animation::{Pose, ViewOptions, Variant};
use crate::hooks::use_scroll_animation;

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    pub pose: Pose,
    #[prop_or(Variant::fade_in_out())]
    pub variant: Variant,
    /// Seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children in the pose chosen by a parent section.
#[function_component]
pub fn Animated(props: &AnimatedProps) -> Html {
    html! {
        <div
            class={props.class.clone()}
            data-pose={pose_attr(props.pose)}
            style={props.variant.style_with_delay(props.pose, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InViewProps {
    #[prop_or(ViewOptions::once())]
    pub options: ViewOptions,
    #[prop_or(Variant::fade_in_out())]
    pub variant: Variant,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Self-observing block: animates on its own visibility rather than the
/// enclosing section's.
#[function_component]
pub fn InView(props: &InViewProps) -> Html {
    let anim = use_scroll_animation(props.options);
    html! {
        <div
            ref={anim.node}
            class={props.class.clone()}
            data-pose={pose_attr(anim.pose)}
            style={props.variant.style_with_delay(anim.pose, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

fn pose_attr(pose: Pose) -> &'static str {
    match pose {
        Pose::Hidden => "hidden",
        Pose::Visible => "visible",
    }
}

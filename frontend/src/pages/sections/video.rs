use yew::prelude::*;

use super::Section;
use crate::animation::{ViewOptions, Variant};
use crate::components::{Animated, SectionIntro, VideoEmbed};
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn VideoSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    html! {
        <section id={Section::Video.id()} class="page-section muted" ref={anim.node.clone()}>
            <div class="container">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        badge="Vídeo de Pitch"
                        title="Veja o Quiosque em ação"
                        body="Assista ao nosso vídeo para entender como o Quiosque pode transformar seu negócio."
                    />
                </Animated>
                <Animated pose={anim.pose} variant={Variant::mockup()} class={classes!("video-wrapper")}>
                    <VideoEmbed />
                </Animated>
            </div>
        </section>
    }
}

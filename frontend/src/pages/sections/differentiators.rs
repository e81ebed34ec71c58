use yew::prelude::*;

use super::Section;
use crate::animation::{Stagger, ViewOptions, Variant};
use crate::components::{Animated, FeatureCard, SectionIntro};
use crate::content::DIFFERENTIATORS;
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn DifferentiatorsSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    let stagger = Stagger::default();
    let count = DIFFERENTIATORS.len();
    html! {
        <section id={Section::Differentiators.id()} class="page-section muted" ref={anim.node.clone()}>
            <div class="container">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        badge="Diferencial"
                        title="Por que escolher o Quiosque?"
                        body="Nossa solução foi desenvolvida especificamente para as necessidades dos proprietários de quiosques, com foco em simplicidade, eficiência e economia."
                    />
                </Animated>
                <Animated pose={anim.pose} variant={Variant::fade()} class={classes!("card-grid")}>
                    { for DIFFERENTIATORS.iter().enumerate().map(|(i, feature)| html! {
                        <Animated
                            key={feature.title}
                            pose={anim.pose}
                            variant={Variant::fade_in_out()}
                            delay={stagger.delay(anim.pose, i, count)}
                        >
                            <FeatureCard feature={*feature} centered=true />
                        </Animated>
                    }) }
                </Animated>
            </div>
        </section>
    }
}

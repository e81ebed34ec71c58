use yew::prelude::*;

use super::Section;
use crate::animation::{Stagger, ViewOptions, Variant};
use crate::components::mockups::TabletPhoneMockup;
use crate::components::{Animated, FeatureCard, SectionIntro};
use crate::content::FEATURES;
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn FeaturesSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    let stagger = Stagger::default();
    let count = FEATURES.len();
    html! {
        <section id={Section::Features.id()} class="page-section" ref={anim.node.clone()}>
            <div class="container">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        badge="Funcionalidades"
                        title="Principais recursos"
                        body="Conheça as ferramentas que vão transformar a gestão do seu quiosque."
                    />
                </Animated>
                <div class="features-grid">
                    <Animated pose={anim.pose} variant={Variant::fade()} class={classes!("feature-list")}>
                        { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                            <Animated
                                key={feature.title}
                                pose={anim.pose}
                                variant={Variant::fade_in_out()}
                                delay={stagger.delay(anim.pose, i, count)}
                            >
                                <FeatureCard feature={*feature} />
                            </Animated>
                        }) }
                    </Animated>
                    <Animated pose={anim.pose} variant={Variant::mockup()} class={classes!("feature-devices")}>
                        <TabletPhoneMockup />
                    </Animated>
                </div>
            </div>
        </section>
    }
}

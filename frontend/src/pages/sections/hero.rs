use yew::prelude::*;

use super::Section;
use crate::animation::{ViewOptions, Variant};
use crate::components::mockups::MacbookMockup;
use crate::components::Animated;
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn HeroSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    html! {
        <section id={Section::Hero.id()} class="hero" ref={anim.node.clone()}>
            <div class="container hero-grid">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()} class={classes!("hero-copy")}>
                    <div class="hero-text">
                        <h1>{"Quiosque"}</h1>
                        <p>{"Seu quiosque, nossa solução: simples, rápida e econômica. Quiosque!"}</p>
                    </div>
                    <div class="hero-cta-group">
                        <a href={format!("#{}", Section::Objective.id())} class="hero-cta">
                            {"Saiba Mais"}
                            <i class="fas fa-chevron-right"></i>
                        </a>
                    </div>
                </Animated>
                <Animated pose={anim.pose} variant={Variant::mockup()} class={classes!("hero-mockup")}>
                    <MacbookMockup />
                </Animated>
            </div>
        </section>
    }
}

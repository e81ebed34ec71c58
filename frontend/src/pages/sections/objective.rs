use yew::prelude::*;

use super::Section;
use crate::animation::{ViewOptions, Variant};
use crate::components::mockups::LaptopMockup;
use crate::components::{Animated, SectionIntro};
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn ObjectiveSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    html! {
        <section id={Section::Objective.id()} class="page-section" ref={anim.node.clone()}>
            <div class="container">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        badge="Objetivo"
                        title="Nossa Missão"
                        body="O Quiosque é uma solução definitiva para o proprietário do quiosque que procura uma maneira eficiente e intuitiva de gerenciar seu quiosque sem comprometer o orçamento. Projetamos o aplicativo pensando na simplicidade e acessibilidade, oferecendo a você total controle do seu negócio com alguns cliques."
                    />
                </Animated>
                <Animated pose={anim.pose} variant={Variant::mockup()} class={classes!("objective-mockup")}>
                    <LaptopMockup />
                </Animated>
            </div>
        </section>
    }
}

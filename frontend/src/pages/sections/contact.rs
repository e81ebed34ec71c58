use yew::prelude::*;

use super::Section;
use crate::animation::{ViewOptions, Variant};
use crate::components::{Animated, SectionIntro};
use crate::config::{contact_href, CONTACT_EMAIL};
use crate::hooks::use_scroll_animation;

#[function_component]
pub fn ContactSection() -> Html {
    let anim = use_scroll_animation(ViewOptions::default());
    html! {
        <section id={Section::Contact.id()} class="page-section brand" ref={anim.node.clone()}>
            <div class="container">
                <Animated pose={anim.pose} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        title="Entre em contato"
                        body="Quer saber mais sobre o Quiosque? Entre em contato conosco."
                        inverted=true
                    />
                    <p class="contact-email">
                        <a href={contact_href()}>{CONTACT_EMAIL}</a>
                    </p>
                </Animated>
            </div>
        </section>
    }
}

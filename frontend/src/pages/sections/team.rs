use yew::prelude::*;

use super::Section;
use crate::animation::{ViewOptions, Variant};
use crate::components::{InView, SectionIntro, TeamCard};
use crate::content::{Roster, ROSTERS};

fn render_roster(roster: &Roster) -> Html {
    html! {
        <div class="roster" key={roster.title}>
            <InView options={ViewOptions::once()} variant={Variant::fade()}>
                <h3>{roster.title}</h3>
            </InView>
            <InView options={ViewOptions::once()} variant={Variant::fade()} class={classes!("team-grid")}>
                { for roster.members.iter().enumerate().map(|(index, member)| html! {
                    <TeamCard key={member.name} member={*member} index={index} />
                }) }
            </InView>
        </div>
    }
}

/// Roster blocks play once and stay put, unlike the other sections.
#[function_component]
pub fn TeamSection() -> Html {
    html! {
        <section id={Section::Team.id()} class="page-section">
            <div class="container">
                <InView options={ViewOptions::once()} variant={Variant::fade_in_out()}>
                    <SectionIntro
                        badge="Equipe"
                        title="Conheça nosso time"
                        body="As pessoas por trás do Quiosque que tornaram tudo isso possível."
                    />
                </InView>
                <div class="rosters">
                    { for ROSTERS.iter().map(render_roster) }
                </div>
            </div>
        </section>
    }
}

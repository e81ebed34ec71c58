use yew::prelude::*;

use crate::animation::{ViewOptions, Variant};
use crate::components::InView;
use crate::content::{Feature, TeamMember};

#[derive(Properties, PartialEq)]
pub struct SectionIntroProps {
    /// Small pill above the heading; omitted when `None`.
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    pub title: AttrValue,
    pub body: AttrValue,
    #[prop_or_default]
    pub inverted: bool,
}

#[function_component]
pub fn SectionIntro(props: &SectionIntroProps) -> Html {
    html! {
        <div class={classes!("section-intro", props.inverted.then_some("inverted"))}>
            if let Some(badge) = props.badge.clone() {
                <div class="section-badge">{badge}</div>
            }
            <h2>{props.title.clone()}</h2>
            <p>{props.body.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component]
pub fn FeatureCard(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div class={classes!("card", props.centered.then_some("centered"))}>
            <div class="card-icon">
                <i class={feature.icon}></i>
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: TeamMember,
    /// Position in its roster; each card enters 0.1s after the previous one.
    pub index: usize,
}

#[function_component]
pub fn TeamCard(props: &TeamCardProps) -> Html {
    let member = props.member;
    let delay = (props.index + 1) as f64 * 0.1;
    html! {
        <InView options={ViewOptions::once()} variant={Variant::fade_in_out()} delay={delay} class={classes!("team-card")}>
            <div class="team-photo">
                <img src={member.photo} alt={member.name} width="150" height="150" loading="lazy" />
            </div>
            <div class="team-info">
                <h4>{member.name}</h4>
                <p>{member.role}</p>
            </div>
        </InView>
    }
}

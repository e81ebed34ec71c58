pub mod contact;
pub mod differentiators;
pub mod features;
pub mod hero;
pub mod objective;
pub mod team;
pub mod video;

pub use contact::ContactSection;
pub use differentiators::DifferentiatorsSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use objective::ObjectiveSection;
pub use team::TeamSection;
pub use video::VideoSection;

/// Top-level blocks of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Objective,
    Differentiators,
    Features,
    Video,
    Team,
    Contact,
    Footer,
}

impl Section {
    pub const ORDER: [Section; 8] = [
        Section::Hero,
        Section::Objective,
        Section::Differentiators,
        Section::Features,
        Section::Video,
        Section::Team,
        Section::Contact,
        Section::Footer,
    ];

    /// DOM id, also the anchor nav links jump to.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "inicio",
            Section::Objective => "objetivo",
            Section::Differentiators => "diferencial",
            Section::Features => "funcionalidades",
            Section::Video => "video",
            Section::Team => "equipe",
            Section::Contact => "contato",
            Section::Footer => "rodape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_matches_page_layout() {
        let ids: Vec<&str> = Section::ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec!["inicio", "objetivo", "diferencial", "funcionalidades", "video", "equipe", "contato", "rodape"]
        );
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = Section::ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ORDER.len());
    }
}

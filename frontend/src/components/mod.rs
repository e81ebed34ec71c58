pub mod animated;
pub mod cards;
pub mod footer;
pub mod header;
pub mod mockups;
pub mod video;

pub use animated::{Animated, InView};
pub use cards::{FeatureCard, SectionIntro, TeamCard};
pub use footer::Footer;
pub use header::{Header, MenuState};
pub use video::VideoEmbed;

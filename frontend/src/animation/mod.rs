pub mod controls;
pub mod variants;

pub use controls::{Pose, ViewOptions, ViewportTracker};
pub use variants::{Stagger, Variant};

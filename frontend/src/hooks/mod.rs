pub mod mounted;
pub mod scroll_animation;
pub mod scroll_position;

pub use mounted::use_mounted_after;
pub use scroll_animation::{use_scroll_animation, ScrollAnimation};
pub use scroll_position::{is_scrolled, use_scrolled};

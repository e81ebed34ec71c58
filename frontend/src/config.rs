//! Site-wide constants.

/// Vertical scroll offset (px) past which the header switches to its opaque style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Viewport width (px) below which the desktop nav collapses into the menu panel.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Fraction of a block that must be inside the viewport before it animates in.
pub const DEFAULT_VIEW_AMOUNT: f64 = 0.3;

/// Delay before the header slides in, long enough for the browser to paint
/// the starting position first.
pub const HEADER_SLIDE_IN_DELAY_MS: u32 = 16;

pub const CONTACT_EMAIL: &str = "quiosque@dcomp.ufs.br";

pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

pub const BRAND_COLOR: &str = "hsl(237, 99%, 69%)";

pub const SITE_TITLE: &str = "Quiosque";

pub fn contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

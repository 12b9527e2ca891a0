use log::Level;

use crate::controllers::reveal::RevealProfile;

pub const CONTACT_ADDRESS: &str = "follederire@yahoo.com";

pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// How early a section becomes current, on top of the header height.
pub const SECTION_LEAD: f64 = 100.0;
/// Gap left between the header and a section after smooth navigation.
pub const SCROLL_EXTRA_SPACE: f64 = 20.0;

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const FRAME_INTERVAL_MS: f64 = 16.0;
pub const COUNTER_THRESHOLD: f64 = 0.5;

pub const COPY_CONFIRMATION_MS: u32 = 2000;
pub const COPIED_LABEL: &str = "Lien copié !";
pub const NOTICE_DISMISS_MS: u32 = 6000;

pub const LAZYSIZES_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

const PRIMARY_SELECTORS: &[&str] = &[
    ".benefit-card",
    ".yoga-list li",
    ".reference-box",
    ".contact-info",
    ".contact-cta",
];

const ENHANCED_SELECTORS: &[&str] = &[
    ".benefit-card",
    ".yoga-list li",
    ".reference-box",
    ".contact-info",
    ".faq-item",
    ".stat-card",
    ".contact-form-container",
];

/// Registration order matters: the first profile to match an element owns it,
/// so elements listed in both move like the enhanced profile.
pub fn reveal_profiles() -> Vec<RevealProfile> {
    vec![
        RevealProfile {
            name: "enhanced",
            selectors: ENHANCED_SELECTORS,
            threshold: 0.1,
            bottom_margin_px: 50,
            offset_px: 40,
            duration_s: 0.8,
            transform_easing: "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
        },
        RevealProfile {
            name: "primary",
            selectors: PRIMARY_SELECTORS,
            threshold: 0.1,
            bottom_margin_px: 100,
            offset_px: 30,
            duration_s: 0.6,
            transform_easing: "ease",
        },
    ]
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

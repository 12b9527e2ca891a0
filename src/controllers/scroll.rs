use crate::config;

/// Snapshot of the viewport offset and the fixed header's height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub header_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, header_height: f64) -> Self {
        Self { offset, header_height }
    }

    /// Scroll position that lands `section_top` just under the header.
    pub fn anchor_position(&self, section_top: f64) -> f64 {
        section_top - self.header_height - config::SCROLL_EXTRA_SPACE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShadow {
    Resting,
    Scrolled,
}

impl HeaderShadow {
    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderShadow::Resting => "0 4px 12px rgba(0, 0, 0, 0.1)",
            HeaderShadow::Scrolled => "0 4px 20px rgba(0, 0, 0, 0.2)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub shadow: HeaderShadow,
    pub back_to_top_visible: bool,
}

/// Header weight and back-to-top visibility, recomputed from scratch on
/// every scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeController {
    shadow_threshold: f64,
    back_to_top_threshold: f64,
}

impl Default for ChromeController {
    fn default() -> Self {
        Self {
            shadow_threshold: config::HEADER_SHADOW_THRESHOLD,
            back_to_top_threshold: config::BACK_TO_TOP_THRESHOLD,
        }
    }
}

impl ChromeController {
    pub fn chrome(&self, offset: f64) -> Chrome {
        let shadow = if offset > self.shadow_threshold {
            HeaderShadow::Scrolled
        } else {
            HeaderShadow::Resting
        };
        Chrome {
            shadow,
            back_to_top_visible: offset > self.back_to_top_threshold,
        }
    }
}

/// Inline styles for the three hamburger bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconBars {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

impl IconBars {
    pub fn styles(&self) -> [String; 3] {
        [
            format!("transform: {};", self.top_transform),
            format!("opacity: {};", self.middle_opacity),
            format!("transform: {};", self.bottom_transform),
        ]
    }
}

const OPEN_BARS: IconBars = IconBars {
    top_transform: "rotate(45deg) translateY(8px)",
    middle_opacity: "0",
    bottom_transform: "rotate(-45deg) translateY(-8px)",
};

const CLOSED_BARS: IconBars = IconBars {
    top_transform: "rotate(0) translateY(0)",
    middle_opacity: "1",
    bottom_transform: "rotate(0) translateY(0)",
};

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn open(self) -> Self {
        Self { open: true }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Outcome of a document click while the drawer may be open.
    pub fn after_click(self, inside_nav: bool, on_toggle: bool) -> Self {
        if self.open && !inside_nav && !on_toggle {
            self.close()
        } else {
            self
        }
    }

    /// Outcome of a navigation link click. Unresolved targets leave the
    /// drawer as it was.
    pub fn after_navigation(self, target_resolved: bool) -> Self {
        if target_resolved {
            self.close()
        } else {
            self
        }
    }

    pub fn icon_bars(&self) -> IconBars {
        if self.open {
            OPEN_BARS
        } else {
            CLOSED_BARS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_syncs_icon() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon_bars(), CLOSED_BARS);

        let menu = menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon_bars().middle_opacity, "0");
        assert_eq!(menu.icon_bars().top_transform, "rotate(45deg) translateY(8px)");

        let menu = menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(
            menu.icon_bars().styles(),
            [
                "transform: rotate(0) translateY(0);".to_string(),
                "opacity: 1;".to_string(),
                "transform: rotate(0) translateY(0);".to_string(),
            ]
        );
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let menu = MenuState::default().open();
        assert!(!menu.after_click(false, false).is_open());
    }

    #[test]
    fn clicks_on_nav_or_toggle_keep_menu_open() {
        let menu = MenuState::default().open();
        assert!(menu.after_click(true, false).is_open());
        assert!(menu.after_click(false, true).is_open());
    }

    #[test]
    fn outside_click_on_closed_menu_is_noop() {
        let menu = MenuState::default();
        assert_eq!(menu.after_click(false, false), menu);
    }

    #[test]
    fn navigation_closes_only_when_resolved() {
        let menu = MenuState::default().open();
        assert!(menu.after_navigation(false).is_open());
        assert!(!menu.after_navigation(true).is_open());
    }
}

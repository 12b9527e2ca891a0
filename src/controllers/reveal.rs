/// One way of revealing elements: which ones, how far they travel and
/// when the watcher should fire.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealProfile {
    pub name: &'static str,
    pub selectors: &'static [&'static str],
    /// Visible fraction that counts as an intersection.
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport before intersecting.
    pub bottom_margin_px: u32,
    /// Initial downward offset of hidden elements.
    pub offset_px: u32,
    pub duration_s: f64,
    pub transform_easing: &'static str,
}

impl RevealProfile {
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    pub fn hidden_style(&self) -> Vec<(&'static str, String)> {
        vec![
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.offset_px)),
            (
                "transition",
                format!(
                    "opacity {d}s ease, transform {d}s {}",
                    self.transform_easing,
                    d = self.duration_s
                ),
            ),
        ]
    }

    pub fn visible_style() -> [(&'static str, &'static str); 2] {
        [("opacity", "1"), ("transform", "none")]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealableElement<N> {
    pub node: N,
    pub profile: usize,
    pub revealed: bool,
}

/// Single registry for every reveal profile on the page.
///
/// A node belongs to exactly one profile: whichever registered it first.
#[derive(Debug)]
pub struct RevealAnimator<N> {
    profiles: Vec<RevealProfile>,
    elements: Vec<RevealableElement<N>>,
}

impl<N: PartialEq> RevealAnimator<N> {
    pub fn new(profiles: Vec<RevealProfile>) -> Self {
        Self {
            profiles,
            elements: Vec::new(),
        }
    }

    pub fn profiles(&self) -> &[RevealProfile] {
        &self.profiles
    }

    /// Returns false when the node is already registered or the profile
    /// index is unknown.
    pub fn register(&mut self, node: N, profile: usize) -> bool {
        if profile >= self.profiles.len() || self.contains(&node) {
            return false;
        }
        self.elements.push(RevealableElement {
            node,
            profile,
            revealed: false,
        });
        true
    }

    pub fn contains(&self, node: &N) -> bool {
        self.elements.iter().any(|element| element.node == *node)
    }

    /// Feeds one watcher notification. Returns true only for the first
    /// qualifying intersection of a registered node.
    pub fn on_intersection(&mut self, node: &N, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.elements.iter_mut().find(|element| element.node == *node) {
            Some(element) if !element.revealed => {
                element.revealed = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, node: &N) -> bool {
        self.elements
            .iter()
            .any(|element| element.node == *node && element.revealed)
    }

    pub fn nodes_for(&self, profile: usize) -> impl Iterator<Item = &N> {
        self.elements
            .iter()
            .filter(move |element| element.profile == profile)
            .map(|element| &element.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn animator() -> RevealAnimator<&'static str> {
        RevealAnimator::new(config::reveal_profiles())
    }

    #[test]
    fn reveal_is_one_way() {
        let mut animator = animator();
        assert!(animator.register("card", 0));
        assert!(!animator.is_revealed(&"card"));

        assert!(!animator.on_intersection(&"card", false));
        assert!(animator.on_intersection(&"card", true));
        assert!(animator.is_revealed(&"card"));

        // scrolled away and back again
        assert!(!animator.on_intersection(&"card", false));
        assert!(animator.is_revealed(&"card"));
        assert!(!animator.on_intersection(&"card", true));
        assert!(animator.is_revealed(&"card"));
    }

    fn owner_of(selector: &str) -> RevealProfile {
        config::reveal_profiles()
            .into_iter()
            .find(|profile| profile.selectors.iter().any(|s| *s == selector))
            .unwrap()
    }

    #[test]
    fn node_claimed_by_two_profiles_registers_once() {
        let profiles = config::reveal_profiles();
        let claimants: Vec<usize> = profiles
            .iter()
            .enumerate()
            .filter(|(_, profile)| profile.selectors.iter().any(|s| *s == ".benefit-card"))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(claimants.len(), 2);

        let mut animator = animator();
        assert!(animator.register("benefit", claimants[0]));
        assert!(!animator.register("benefit", claimants[1]));
        assert_eq!(animator.nodes_for(claimants[0]).count(), 1);
        assert_eq!(animator.nodes_for(claimants[1]).count(), 0);
    }

    #[test]
    fn shared_selectors_use_the_enhanced_motion() {
        for selector in [".benefit-card", ".yoga-list li", ".reference-box", ".contact-info"] {
            let owner = owner_of(selector);
            assert_eq!(owner.name, "enhanced", "{selector}");
            assert_eq!(owner.root_margin(), "0px 0px -50px 0px");
            assert_eq!(owner.hidden_style()[1].1, "translateY(40px)");
        }
        assert_eq!(owner_of(".contact-cta").name, "primary");
    }

    #[test]
    fn unknown_profile_or_node_is_ignored() {
        let mut animator = animator();
        assert!(!animator.register("x", 7));
        assert!(!animator.on_intersection(&"x", true));
        assert!(!animator.is_revealed(&"x"));
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut animator = animator();
        animator.register("footer", 1);
        animator.register("faq", 1);
        animator.on_intersection(&"faq", true);
        assert!(!animator.is_revealed(&"footer"));
    }

    #[test]
    fn profile_styles() {
        let primary = owner_of(".contact-cta");
        assert_eq!(primary.root_margin(), "0px 0px -100px 0px");
        assert_eq!(
            primary.hidden_style(),
            vec![
                ("opacity", "0".to_string()),
                ("transform", "translateY(30px)".to_string()),
                ("transition", "opacity 0.6s ease, transform 0.6s ease".to_string()),
            ]
        );

        let enhanced = owner_of(".benefit-card");
        assert!(enhanced.selector().contains(".yoga-list li"));
        assert_eq!(enhanced.root_margin(), "0px 0px -50px 0px");
        assert_eq!(
            enhanced.hidden_style(),
            vec![
                ("opacity", "0".to_string()),
                ("transform", "translateY(40px)".to_string()),
                (
                    "transition",
                    "opacity 0.8s ease, transform 0.8s cubic-bezier(0.175, 0.885, 0.32, 1.275)"
                        .to_string()
                ),
            ]
        );
    }

    #[test]
    fn revealed_elements_drop_their_transform() {
        // fixed-position descendants must stay relative to the viewport
        let visible = RevealProfile::visible_style();
        assert!(visible.contains(&("opacity", "1")));
        assert!(visible.contains(&("transform", "none")));
    }
}

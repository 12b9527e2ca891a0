use crate::config;
use crate::controllers::scroll::ScrollMetrics;

/// Layout of one `section[id]`, as last measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationLink {
    pub target: String,
    pub active: bool,
}

/// Tracks which navigation link matches the section under the header.
///
/// The layout snapshot goes stale whenever the page reflows, so callers
/// replace it through [`SectionHighlighter::set_layout`] on resize and load.
#[derive(Debug, Clone, Default)]
pub struct SectionHighlighter {
    sections: Vec<Section>,
    links: Vec<NavigationLink>,
}

impl SectionHighlighter {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: Vec::new(),
            links: targets
                .into_iter()
                .map(|target| NavigationLink {
                    target: target.into(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn set_layout(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    /// Last section in document order whose range contains the offset.
    pub fn current_section(&self, metrics: &ScrollMetrics) -> Option<&str> {
        let mut current = None;
        for section in &self.sections {
            let start = section.top - metrics.header_height - config::SECTION_LEAD;
            if metrics.offset >= start && metrics.offset < start + section.height {
                current = Some(section.id.as_str());
            }
        }
        current
    }

    /// Recomputes the active marker and returns the active section id.
    pub fn update(&mut self, metrics: &ScrollMetrics) -> Option<String> {
        let current = self.current_section(metrics).map(str::to_owned);
        for link in &mut self.links {
            link.active = false;
            if current.as_deref() == Some(link.target.as_str()) {
                link.active = true;
            }
        }
        current
    }

    pub fn links(&self) -> &[NavigationLink] {
        &self.links
    }
}

/// Section id behind an in-page `href="#id"` anchor.
pub fn target_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> Section {
        Section {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> SectionHighlighter {
        let mut highlighter = SectionHighlighter::new(["accueil", "bienfaits", "contact"]);
        highlighter.set_layout(vec![
            section("accueil", 0.0, 600.0),
            section("bienfaits", 600.0, 800.0),
            section("contact", 1400.0, 500.0),
        ]);
        highlighter
    }

    fn active_targets(highlighter: &SectionHighlighter) -> Vec<&str> {
        highlighter
            .links()
            .iter()
            .filter(|link| link.active)
            .map(|link| link.target.as_str())
            .collect()
    }

    #[test]
    fn picks_section_under_header() {
        let mut highlighter = page();
        // bienfaits starts at 600 - 80 - 100 = 420
        let active = highlighter.update(&ScrollMetrics::new(450.0, 80.0));
        assert_eq!(active.as_deref(), Some("bienfaits"));
        assert_eq!(active_targets(&highlighter), vec!["bienfaits"]);
    }

    #[test]
    fn no_link_active_above_first_section() {
        let mut highlighter = SectionHighlighter::new(["intro"]);
        highlighter.set_layout(vec![section("intro", 800.0, 400.0)]);
        assert_eq!(highlighter.update(&ScrollMetrics::new(0.0, 80.0)), None);
        assert!(active_targets(&highlighter).is_empty());
    }

    #[test]
    fn previous_marker_is_cleared() {
        let mut highlighter = page();
        highlighter.update(&ScrollMetrics::new(450.0, 80.0));
        highlighter.update(&ScrollMetrics::new(1300.0, 80.0));
        assert_eq!(active_targets(&highlighter), vec!["contact"]);
    }

    #[test]
    fn at_most_one_link_active_for_every_offset() {
        let mut highlighter = page();
        let mut offset = -200.0;
        while offset < 2500.0 {
            let metrics = ScrollMetrics::new(offset, 80.0);
            let active = highlighter.update(&metrics);
            let targets = active_targets(&highlighter);
            assert!(targets.len() <= 1, "offset {offset}: {targets:?}");
            assert_eq!(targets.first().copied(), active.as_deref());
            offset += 7.0;
        }
    }

    #[test]
    fn overlapping_ranges_prefer_later_section() {
        let mut highlighter = SectionHighlighter::new(["a", "b"]);
        highlighter.set_layout(vec![section("a", 0.0, 1000.0), section("b", 500.0, 1000.0)]);
        let metrics = ScrollMetrics::new(600.0, 0.0);
        assert_eq!(highlighter.current_section(&metrics), Some("b"));
    }

    #[test]
    fn relayout_moves_the_ranges() {
        let mut highlighter = page();
        let metrics = ScrollMetrics::new(450.0, 80.0);
        assert_eq!(highlighter.current_section(&metrics), Some("bienfaits"));
        highlighter.set_layout(vec![
            section("accueil", 0.0, 900.0),
            section("bienfaits", 900.0, 800.0),
        ]);
        assert_eq!(highlighter.current_section(&metrics), Some("accueil"));
    }

    #[test]
    fn section_without_link_marks_nothing() {
        let mut highlighter = SectionHighlighter::new(["contact"]);
        highlighter.set_layout(vec![section("temoignages", 0.0, 1000.0)]);
        assert_eq!(
            highlighter.update(&ScrollMetrics::new(10.0, 0.0)).as_deref(),
            Some("temoignages")
        );
        assert!(active_targets(&highlighter).is_empty());
    }

    #[test]
    fn href_targets() {
        assert_eq!(target_from_href("#contact"), Some("contact"));
        assert_eq!(target_from_href("#"), None);
        assert_eq!(target_from_href("https://example.com"), None);
    }
}

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub id: String,
    pub open: bool,
}

/// FAQ items, at most one open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    items: Vec<PanelItem>,
}

impl Accordion {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: ids
                .into_iter()
                .map(|id| PanelItem {
                    id: id.into(),
                    open: false,
                })
                .collect(),
        }
    }

    /// Closes every item, then reopens `id` unless it was the open one.
    pub fn toggle(&mut self, id: &str) {
        let was_open = self.is_open(id);
        for item in &mut self.items {
            item.open = false;
        }
        if !was_open {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                item.open = true;
            }
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id && item.open)
    }

    #[cfg(test)]
    pub fn open_item(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.open)
            .map(|item| item.id.as_str())
    }
}

/// Share overlay. The body scroll lock follows the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SharePanel {
    open: bool,
}

impl SharePanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Only clicks landing on the backdrop itself dismiss the panel.
    pub fn backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

/// Copy-link label that shows a confirmation for a while after success.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyLabel {
    original: String,
    revert_at: Option<f64>,
}

impl CopyLabel {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            revert_at: None,
        }
    }

    pub fn confirm(&mut self, now_ms: f64) {
        self.revert_at = Some(now_ms + f64::from(config::COPY_CONFIRMATION_MS));
    }

    pub fn advance(&mut self, now_ms: f64) {
        if matches!(self.revert_at, Some(at) if now_ms >= at) {
            self.revert_at = None;
        }
    }

    pub fn text(&self) -> &str {
        match self.revert_at {
            Some(_) => config::COPIED_LABEL,
            None => &self.original,
        }
    }
}

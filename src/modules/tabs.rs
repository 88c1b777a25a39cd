//! Tab panels and the controller that decides which one is shown

/// A titled panel bound to a tab id and the id of the tab that labels it.
///
/// Panels carry no visibility of their own; `TabController` decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPanel {
    pub id: &'static str,
    pub labelled_by: &'static str,
    pub title: &'static str,
}

impl TabPanel {
    pub const fn new(id: &'static str, labelled_by: &'static str, title: &'static str) -> Self {
        Self {
            id,
            labelled_by,
            title,
        }
    }

    pub fn heading(&self) -> String {
        format!("{} Menu", self.title)
    }
}

pub const WALLET_PANEL: TabPanel = TabPanel::new("wallet", "wallet-tab", "Wallet");
pub const SESSION_PANEL: TabPanel = TabPanel::new("session", "session-tab", "Session");

#[derive(Debug, Clone)]
pub struct TabController {
    panels: Vec<TabPanel>,
    active: usize,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(vec![WALLET_PANEL, SESSION_PANEL])
    }
}

impl TabController {
    pub fn new(panels: Vec<TabPanel>) -> Self {
        Self { panels, active: 0 }
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&TabPanel> {
        self.panels.get(self.active)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.active().is_some_and(|panel| panel.id == id)
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.panels.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Select by panel id, label id, or title (case-insensitive).
    pub fn select_named(&mut self, name: &str) -> bool {
        let name = name.trim();
        if let Ok(position) = name.parse::<usize>() {
            return position > 0 && self.select(position - 1);
        }
        let found = self.panels.iter().position(|panel| {
            panel.id.eq_ignore_ascii_case(name)
                || panel.labelled_by.eq_ignore_ascii_case(name)
                || panel.title.eq_ignore_ascii_case(name)
        });
        match found {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.panels.len();
        if len == 0 {
            return;
        }
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_suffix() {
        assert_eq!(WALLET_PANEL.heading(), "Wallet Menu");
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        let mut tabs = TabController::default();
        assert!(tabs.is_visible("wallet"));
        assert!(!tabs.is_visible("session"));

        tabs.cycle(true);
        assert!(tabs.is_visible("session"));
        assert!(!tabs.is_visible("wallet"));

        tabs.cycle(true);
        assert!(tabs.is_visible("wallet"));
        tabs.cycle(false);
        assert!(tabs.is_visible("session"));
    }

    #[test]
    fn test_select_named() {
        let mut tabs = TabController::default();
        assert!(tabs.select_named("Session"));
        assert_eq!(tabs.active_index(), 1);
        assert!(tabs.select_named("wallet-tab"));
        assert_eq!(tabs.active_index(), 0);
        assert!(tabs.select_named("2"));
        assert_eq!(tabs.active_index(), 1);
        assert!(!tabs.select_named("0"));
        assert!(!tabs.select_named("nope"));
        assert_eq!(tabs.active_index(), 1);
    }
}

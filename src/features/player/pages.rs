//! Two-page navigation with delayed activation
//!
//! Showing a page hides the other one and makes the target visible but not
//! yet active; activation arrives after `ACTIVATION_DELAY` so the view can
//! run its entry transition. Each navigation gets a new transition id and
//! only the latest one can be activated.

use std::time::Duration;

/// Delay between revealing a page and marking it active
pub const ACTIVATION_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Selection,
    Player,
}

/// Handle for a pending activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    pub page: Page,
    id: u64,
}

#[derive(Debug, Clone)]
pub struct PageView {
    current: Page,
    active: bool,
    transition_id: u64,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            current: Page::Selection,
            active: true,
            transition_id: 0,
        }
    }
}

impl PageView {
    /// Hide everything, reveal `target` inactive, and return its activation
    pub fn show(&mut self, target: Page) -> PageTransition {
        self.active = false;
        self.current = target;
        self.transition_id += 1;
        PageTransition {
            page: target,
            id: self.transition_id,
        }
    }

    /// Mark the page active if `transition` is still the latest navigation
    pub fn activate(&mut self, transition: PageTransition) -> bool {
        if transition.id != self.transition_id || transition.page != self.current {
            return false;
        }
        self.active = true;
        true
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page && self.active
    }
}

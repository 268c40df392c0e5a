//! Local navigation chrome state (sidebar drawer and account menu).
//!
//! DESIGN
//! ======
//! Kept apart from `auth` so that menu toggling never re-reads storage.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visibility flags for the navigation bar overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub sidebar_open: bool,
    pub user_menu_open: bool,
}

impl NavState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    /// Handle focus leaving the account menu container.
    ///
    /// `focus_stays_inside` is true when the element receiving focus is a
    /// descendant of the container (e.g. one of the menu buttons).
    pub fn on_menu_focus_out(&mut self, focus_stays_inside: bool) {
        if !focus_stays_inside {
            self.close_user_menu();
        }
    }
}

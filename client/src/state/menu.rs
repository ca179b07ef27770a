//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::content::Section;
use crate::util::scroll::Viewport;

/// Open/closed flag of the hamburger menu. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu and return whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Scroll to `target` and close the menu, as one user action.
    pub fn select_and_close(&mut self, viewport: &impl Viewport, target: Section) {
        viewport.scroll_to(target.id());
        self.close();
    }
}

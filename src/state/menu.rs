#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Mobile navigation menu state. Starts closed; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip open/closed (the hamburger control).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu if it is open. Called on every nav-link activation;
    /// a no-op when already closed.
    pub fn close_if_open(&mut self) {
        if self.open {
            self.open = false;
        }
    }
}

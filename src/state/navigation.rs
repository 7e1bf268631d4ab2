//! Navigation-related state types.
//!
//! This module contains the page sections and the navigation panel toggle.

/// Specifying the different page sections.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Section {
    #[default]
    Calculator,
    Contact,
}

impl Section {
    /// All sections in navigation panel order.
    pub const ALL: [Section; 2] = [Section::Calculator, Section::Contact];

    /// Return the navigation link text.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Section::Calculator => "BMI Calculator",
            Section::Contact => "Contact",
        }
    }
}

/// Open/closed state of the navigation panel together with the flags that
/// follow it: the expanded flag on the toggle control and the scroll lock on
/// the page.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct NavToggle {
    open: bool,
    aria_expanded: bool,
    scroll_locked: bool,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> bool {
        self.aria_expanded
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Flip the panel. Returns whether it is now open.
    ///
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.aria_expanded = self.open;
        self.scroll_locked = self.open;
        self.open
    }

    /// Close the panel after a link was followed. Does nothing while closed.
    /// Returns whether the panel was closed by this call.
    ///
    pub fn follow_link(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.aria_expanded = false;
        self.scroll_locked = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_defaults_closed() {
        let nav = NavToggle::default();
        assert!(!nav.is_open());
        assert!(!nav.aria_expanded());
        assert!(!nav.is_scroll_locked());
    }

    #[test]
    fn test_nav_toggle() {
        let mut nav = NavToggle::default();
        assert!(nav.toggle());
        assert!(nav.is_open());
        assert!(nav.aria_expanded());
        assert!(nav.is_scroll_locked());

        assert!(!nav.toggle());
        assert_eq!(nav, NavToggle::default());
    }

    #[test]
    fn test_nav_follow_link_closes() {
        let mut nav = NavToggle::default();
        nav.toggle();
        assert!(nav.follow_link());
        assert!(!nav.is_open());
        assert!(!nav.aria_expanded());
        assert!(!nav.is_scroll_locked());
    }

    #[test]
    fn test_nav_follow_link_while_closed() {
        let mut nav = NavToggle::default();
        assert!(!nav.follow_link());
        assert_eq!(nav, NavToggle::default());
    }

    #[test]
    fn test_section() {
        assert_eq!(Section::default(), Section::Calculator);
        assert_eq!(Section::ALL.len(), 2);
        assert_eq!(Section::Contact.title(), "Contact");
    }
}

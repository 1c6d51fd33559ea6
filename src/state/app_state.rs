//! Application state definitions

use std::sync::Arc;

use super::forms::{ContactForm, FieldSchema};
use super::reveal::RevealState;
use super::toast::ToastQueue;
use crate::content::{ACHIEVEMENTS, CONTACT_METHODS, PROJECTS, SERVICES, SOCIAL_LINKS};

/// Sections of the page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Services,
    About,
    Portfolio,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Portfolio,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections listed in the navigation bar
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    /// In-page anchor name
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    /// Accepts an anchor with or without the leading `#`
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|s| s.anchor().eq_ignore_ascii_case(anchor))
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section down the page (stays on the last one)
    pub fn next(&self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Section::Footer)
    }

    /// Previous section up the page (stays on the first one)
    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Section::Home)
    }

    /// Number of highlightable cards in this section
    pub fn card_count(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Services => SERVICES.len(),
            Self::About => ACHIEVEMENTS.len(),
            Self::Portfolio => PROJECTS.len(),
            Self::Contact => CONTACT_METHODS.len(),
            Self::Footer => SOCIAL_LINKS.len(),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_section: Section,
    /// Collapsed navigation menu (narrow terminals)
    pub menu_open: bool,
    /// Highlighted entry while the menu is open
    pub menu_index: usize,
    /// Highlighted card of the current section
    pub hovered_card: Option<usize>,
    pub contact: ContactForm,
    /// Keystrokes go to the contact form instead of page navigation
    pub form_focused: bool,
    pub toasts: ToastQueue,
    pub reveal: RevealState,
}

impl AppState {
    pub fn new(schema: Arc<FieldSchema>, toasts: ToastQueue, reveal: RevealState) -> Self {
        Self {
            current_section: Section::default(),
            menu_open: false,
            menu_index: 0,
            hovered_card: None,
            contact: ContactForm::new(schema),
            form_focused: false,
            toasts,
            reveal,
        }
    }

    /// Jump to a section: clears the highlight and replays the reveal
    pub fn go_to(&mut self, section: Section) {
        if section != self.current_section {
            self.current_section = section;
            self.hovered_card = None;
            self.reveal.restart();
        }
        self.form_focused = false;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_index = Section::NAV
                .iter()
                .position(|s| *s == self.current_section)
                .unwrap_or(0);
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % Section::NAV.len();
    }

    pub fn menu_prev(&mut self) {
        if self.menu_index == 0 {
            self.menu_index = Section::NAV.len() - 1;
        } else {
            self.menu_index -= 1;
        }
    }

    /// Navigate to the highlighted menu entry and close the menu
    pub fn menu_select(&mut self) {
        let section = Section::NAV[self.menu_index % Section::NAV.len()];
        self.go_to(section);
    }

    pub fn hover_next(&mut self) {
        let count = self.current_section.card_count();
        if count == 0 {
            return;
        }
        self.hovered_card = Some(match self.hovered_card {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn hover_prev(&mut self) {
        let count = self.current_section.card_count();
        if count == 0 {
            return;
        }
        self.hovered_card = Some(match self.hovered_card {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Focus the contact form ("Get Quotation")
    pub fn focus_contact_form(&mut self) {
        self.go_to(Section::Contact);
        self.form_focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::contact_schema;

    fn state() -> AppState {
        AppState::new(
            Arc::new(contact_schema().unwrap()),
            ToastQueue::default(),
            RevealState::new(false),
        )
    }

    mod section {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(Section::default(), Section::Home);
        }

        #[test]
        fn test_next_and_prev_clamp_at_ends() {
            assert_eq!(Section::Home.prev(), Section::Home);
            assert_eq!(Section::Footer.next(), Section::Footer);
            assert_eq!(Section::Contact.next(), Section::Footer);
            assert_eq!(Section::Services.prev(), Section::Home);
        }

        #[test]
        fn test_from_anchor() {
            assert_eq!(Section::from_anchor("#contact"), Some(Section::Contact));
            assert_eq!(Section::from_anchor("About"), Some(Section::About));
            assert_eq!(Section::from_anchor("#pricing"), None);
        }

        #[test]
        fn test_nav_excludes_footer() {
            assert!(!Section::NAV.contains(&Section::Footer));
            assert_eq!(Section::NAV.len(), 5);
        }

        #[test]
        fn test_card_counts_follow_content() {
            assert_eq!(Section::Home.card_count(), 0);
            assert_eq!(Section::Services.card_count(), 6);
            assert_eq!(Section::Portfolio.card_count(), 4);
            assert_eq!(Section::Footer.card_count(), 5);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_go_to_clears_hover() {
            let mut state = state();
            state.go_to(Section::Services);
            state.hover_next();
            state.go_to(Section::Portfolio);
            assert_eq!(state.current_section, Section::Portfolio);
            assert!(state.hovered_card.is_none());
        }

        #[test]
        fn test_go_to_closes_menu() {
            let mut state = state();
            state.toggle_menu();
            assert!(state.menu_open);
            state.go_to(Section::About);
            assert!(!state.menu_open);
        }

        #[test]
        fn test_menu_select_navigates_and_closes() {
            let mut state = state();
            state.toggle_menu();
            state.menu_next();
            state.menu_next();
            state.menu_select();
            assert_eq!(state.current_section, Section::About);
            assert!(!state.menu_open);
        }

        #[test]
        fn test_menu_opens_on_current_section() {
            let mut state = state();
            state.go_to(Section::Portfolio);
            state.toggle_menu();
            assert_eq!(state.menu_index, 3);
        }

        #[test]
        fn test_menu_prev_wraps() {
            let mut state = state();
            state.toggle_menu();
            state.menu_prev();
            assert_eq!(state.menu_index, 4);
        }

        #[test]
        fn test_focus_contact_form() {
            let mut state = state();
            state.focus_contact_form();
            assert_eq!(state.current_section, Section::Contact);
            assert!(state.form_focused);
        }
    }

    mod hover {
        use super::*;

        #[test]
        fn test_hover_is_noop_without_cards() {
            let mut state = state();
            state.hover_next();
            assert!(state.hovered_card.is_none());
        }

        #[test]
        fn test_hover_next_wraps() {
            let mut state = state();
            state.go_to(Section::Portfolio);
            for _ in 0..5 {
                state.hover_next();
            }
            assert_eq!(state.hovered_card, Some(0));
        }

        #[test]
        fn test_hover_prev_from_none_picks_last() {
            let mut state = state();
            state.go_to(Section::Contact);
            state.hover_prev();
            assert_eq!(state.hovered_card, Some(3));
        }
    }
}

//! Application state and core logic

use crate::config::SiteConfig;
use crate::content::{CONTACT_METHODS, HERO_BENEFITS, SOCIAL_LINKS};
use crate::platform::FORM_MODIFIER;
use crate::state::{
    contact_schema, AppState, FieldEdit, FieldSchema, Form, RevealState, Section,
    SubmissionResult, ToastNotifier, ToastQueue, SCHEDULE_BUTTON, SEND_BUTTON,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Terminals narrower than this get the collapsed navigation menu
pub const NARROW_WIDTH: u16 = 80;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: SiteConfig,
    /// Where settings changes are written (resolved once at startup)
    config_path: Option<PathBuf>,
    /// Schema shared by every contact form instance
    schema: Arc<FieldSchema>,
    /// Whether the app should quit
    quit: bool,
    /// Copy / settings feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for layout decisions (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: SiteConfig) -> Result<Self> {
        let schema = Arc::new(contact_schema()?);
        let toasts = ToastQueue::new(config.toast_duration());
        let reveal = RevealState::new(config.animations_enabled());

        let mut state = AppState::new(Arc::clone(&schema), toasts, reveal);
        state.go_to(config.start_section());

        Ok(Self {
            state,
            config,
            config_path: SiteConfig::config_path(),
            schema,
            quit: false,
            status_message: None,
            terminal_size: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Narrow terminals collapse the navigation bar into a menu
    pub fn is_narrow(&self) -> bool {
        self.terminal_size
            .map(|(_, w)| w < NARROW_WIDTH)
            .unwrap_or(false)
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.toasts.prune(Instant::now());
    }

    /// Whether the next frame should come quickly (animation or toast on screen)
    pub fn needs_fast_tick(&self) -> bool {
        !self.state.toasts.is_empty()
            || self.state.reveal.is_animating(self.reveal_item_count())
    }

    /// Items that slide in when the current section is shown
    pub fn reveal_item_count(&self) -> usize {
        match self.state.current_section {
            Section::Home => HERO_BENEFITS.len(),
            section => section.card_count(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.menu_open {
            self.handle_menu_key(key);
            return Ok(());
        }

        if self.state.form_focused {
            return self.handle_form_key(key);
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.state.go_to(Section::NAV[index]);
            }
            KeyCode::PageDown => self.state.go_to(self.state.current_section.next()),
            KeyCode::PageUp => self.state.go_to(self.state.current_section.prev()),
            KeyCode::Char('g') | KeyCode::Home => self.state.go_to(Section::Home),
            KeyCode::Char('c') => self.state.focus_contact_form(),
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Left | KeyCode::Char('h') => self.state.hover_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.state.hover_next(),
            KeyCode::Enter if self.state.current_section == Section::Contact => {
                self.state.form_focused = true;
            }
            KeyCode::Char('y') => {
                if let Some(text) = self.copy_target() {
                    self.copy_text(&text);
                }
            }
            KeyCode::Char('a') => self.toggle_animations(),
            KeyCode::Esc => {
                if self.state.toasts.dismiss().is_none() {
                    self.state.hovered_card = None;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.menu_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.menu_prev(),
            KeyCode::Enter => self.state.menu_select(),
            KeyCode::Esc | KeyCode::Char('m') => self.state.menu_open = false,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Feedback from the previous action goes stale once the user acts again
        self.status_message = None;

        if key.modifiers.contains(FORM_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit_contact();
                }
                KeyCode::Char('r') => self.state.contact.reset(),
                KeyCode::Char('u') => self.state.contact.edit_active(FieldEdit::Clear)?,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                if self.state.toasts.dismiss().is_none() {
                    self.state.form_focused = false;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact.prev_field(),
            _ if self.state.contact.is_buttons_row_active() => self.handle_buttons_key(key),
            _ => self.handle_field_key(key)?,
        }
        Ok(())
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.contact.prev_button(),
            KeyCode::Right => self.state.contact.next_button(),
            KeyCode::Enter => match self.state.contact.selected_button {
                SEND_BUTTON => {
                    self.submit_contact();
                }
                SCHEDULE_BUTTON => {
                    let url = self.config.scheduling_url().to_string();
                    self.copy_text(&url);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(spec) = self.state.contact.active_spec() else {
            return Ok(());
        };
        let is_select = spec.kind.is_select();
        let is_multiline = spec.is_multiline;

        let edit = match key.code {
            KeyCode::Left if is_select => FieldEdit::PrevOption,
            KeyCode::Right if is_select => FieldEdit::NextOption,
            KeyCode::Enter if is_multiline => FieldEdit::Insert('\n'),
            KeyCode::Enter => {
                self.submit_contact();
                return Ok(());
            }
            KeyCode::Backspace => FieldEdit::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => FieldEdit::Insert(c),
            _ => return Ok(()),
        };
        self.state.contact.edit_active(edit)?;
        Ok(())
    }

    /// Submit the contact form; feedback arrives as a toast
    pub fn submit_contact(&mut self) -> SubmissionResult {
        let mut notifier = ToastNotifier::new(&mut self.state.toasts, Arc::clone(&self.schema));
        let result = self.state.contact.submit(&mut notifier);

        self.status_message = result
            .missing_keys()
            .map(|missing| format!("{} required field(s) left blank", missing.len()));
        result
    }

    /// Text `y` copies: the resume link on About, otherwise the highlighted
    /// contact method or social link
    pub fn copy_target(&self) -> Option<String> {
        let section = self.state.current_section;
        if section == Section::About {
            return Some(self.config.resume_url().to_string());
        }
        let index = self.state.hovered_card?;
        let text = match section {
            Section::Contact => CONTACT_METHODS.get(index).map(|m| m.value),
            Section::Footer => SOCIAL_LINKS.get(index).map(|(_, url)| *url),
            _ => None,
        };
        text.map(str::to_string)
    }

    fn copy_text(&mut self, text: &str) {
        match copy_to_clipboard(text) {
            Ok(()) => self.status_message = Some(format!("Copied {text}")),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.status_message = Some(format!("Clipboard unavailable: {e}"));
            }
        }
    }

    /// Flip the reveal animation and remember the choice
    fn toggle_animations(&mut self) {
        let enabled = !self.state.reveal.enabled;
        self.state.reveal.enabled = enabled;
        self.config.animations = Some(enabled);

        let label = if enabled { "on" } else { "off" };
        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        };
        self.status_message = Some(match saved {
            Ok(()) => format!("Animations {label}"),
            Err(e) => {
                tracing::warn!("Failed to save config: {e:#}");
                format!("Animations {label} (not saved)")
            }
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastKind;

    fn app() -> App {
        let config = SiteConfig {
            animations: Some(false),
            ..Default::default()
        };
        let mut app = App::new(config).unwrap();
        app.terminal_size = Some((40, 120));
        app.config_path = None;
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_home() {
            let app = app();
            assert_eq!(app.state.current_section, Section::Home);
            assert!(!app.should_quit());
            assert!(app.state.contact.state.is_blank());
        }

        #[test]
        fn test_start_section_from_config() {
            let config = SiteConfig {
                start_section: Some("portfolio".to_string()),
                ..Default::default()
            };
            let app = App::new(config).unwrap();
            assert_eq!(app.state.current_section, Section::Portfolio);
        }

        #[test]
        fn test_is_narrow() {
            let mut app = app();
            assert!(!app.is_narrow());
            app.terminal_size = Some((40, 60));
            assert!(app.is_narrow());
        }

        #[test]
        fn test_reveal_items_on_home_are_benefits() {
            let app = app();
            assert_eq!(app.reveal_item_count(), HERO_BENEFITS.len());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_number_keys_jump_to_sections() {
            let mut app = app();
            press(&mut app, KeyCode::Char('4'));
            assert_eq!(app.state.current_section, Section::Portfolio);
            press(&mut app, KeyCode::Char('1'));
            assert_eq!(app.state.current_section, Section::Home);
        }

        #[test]
        fn test_page_down_reaches_footer() {
            let mut app = app();
            for _ in 0..10 {
                press(&mut app, KeyCode::PageDown);
            }
            assert_eq!(app.state.current_section, Section::Footer);
            press(&mut app, KeyCode::Char('g'));
            assert_eq!(app.state.current_section, Section::Home);
        }

        #[test]
        fn test_menu_selection_closes_menu() {
            let mut app = app();
            press(&mut app, KeyCode::Char('m'));
            assert!(app.state.menu_open);
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_section, Section::Services);
            assert!(!app.state.menu_open);
        }

        #[test]
        fn test_menu_keys_do_not_navigate_page() {
            let mut app = app();
            press(&mut app, KeyCode::Char('m'));
            press(&mut app, KeyCode::Char('4'));
            assert_eq!(app.state.current_section, Section::Home);
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.menu_open);
        }

        #[test]
        fn test_arrows_highlight_cards() {
            let mut app = app();
            press(&mut app, KeyCode::Char('2'));
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.hovered_card, Some(1));
            press(&mut app, KeyCode::Esc);
            assert!(app.state.hovered_card.is_none());
        }

        #[test]
        fn test_quit() {
            let mut app = app();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_get_quotation_focuses_form() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            assert_eq!(app.state.current_section, Section::Contact);
            assert!(app.state.form_focused);
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_fields_in_order() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "Jane");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "jane@x.com");

            let form = &app.state.contact.state;
            assert_eq!(form.value("name"), Some("Jane"));
            assert_eq!(form.value("email"), Some("jane@x.com"));
        }

        #[test]
        fn test_letters_do_not_trigger_shortcuts_while_focused() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "q1m");
            assert!(!app.should_quit());
            assert!(!app.state.menu_open);
            assert_eq!(app.state.contact.state.value("name"), Some("q1m"));
        }

        #[test]
        fn test_select_cycles_with_arrows() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            app.state.contact.set_active_field(3);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.contact.state.value("service"), Some("Network Setup"));
            press(&mut app, KeyCode::Left);
            assert_eq!(
                app.state.contact.state.value("service"),
                Some("Web Development")
            );
        }

        #[test]
        fn test_enter_in_message_inserts_newline() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            app.state.contact.set_active_field(4);
            type_text(&mut app, "a");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "b");
            assert_eq!(app.state.contact.state.value("message"), Some("a\nb"));
        }

        #[test]
        fn test_incomplete_submit_raises_error_toast() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "Jane");
            press(&mut app, KeyCode::Enter);

            let toast = app.state.toasts.newest().unwrap();
            assert_eq!(toast.kind, ToastKind::Error);
            assert_eq!(toast.description, "Please fill in: Email Address, Message");
            assert_eq!(app.state.contact.state.value("name"), Some("Jane"));
            assert!(app.state.contact.is_flagged("email"));
        }

        #[test]
        fn test_complete_submit_resets_and_toasts() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "Jane");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "jane@x.com");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Need help");
            ctrl(&mut app, 's');

            let toast = app.state.toasts.newest().unwrap();
            assert_eq!(toast.kind, ToastKind::Success);
            assert_eq!(toast.title, "Message Sent!");
            assert!(app.state.contact.state.is_blank());
            assert!(app.state.form_focused);
        }

        #[test]
        fn test_send_button_submits() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            press(&mut app, KeyCode::BackTab);
            assert!(app.state.contact.is_buttons_row_active());
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.toasts.len(), 1);
        }

        #[test]
        fn test_ctrl_shortcuts() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "Jane");
            ctrl(&mut app, 'u');
            assert_eq!(app.state.contact.state.value("name"), Some(""));

            type_text(&mut app, "Sam");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "sam@x.com");
            ctrl(&mut app, 'r');
            assert!(app.state.contact.state.is_blank());
            assert_eq!(app.state.contact.active_field_index, 0);
        }

        #[test]
        fn test_escape_leaves_form_but_keeps_values() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            type_text(&mut app, "Jane");
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.form_focused);
            assert_eq!(app.state.contact.state.value("name"), Some("Jane"));

            press(&mut app, KeyCode::Enter);
            assert!(app.state.form_focused);
        }

        #[test]
        fn test_escape_dismisses_toast_before_leaving_form() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.toasts.len(), 1);

            press(&mut app, KeyCode::Esc);
            assert!(app.state.toasts.is_empty());
            assert!(app.state.form_focused);

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.form_focused);
        }

        #[test]
        fn test_editing_clears_stale_status() {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            press(&mut app, KeyCode::Enter);
            assert_eq!(
                app.status_message.as_deref(),
                Some("3 required field(s) left blank")
            );

            type_text(&mut app, "J");
            assert!(app.status_message.is_none());
        }

        #[test]
        fn test_fast_tick_while_toast_visible() {
            let mut app = app();
            assert!(!app.needs_fast_tick());
            app.submit_contact();
            assert!(app.needs_fast_tick());
            press(&mut app, KeyCode::Esc);
            assert!(!app.needs_fast_tick());
        }
    }

    mod settings {
        use super::*;
        use pretty_assertions::assert_eq;
        use tempfile::TempDir;

        #[test]
        fn test_toggle_animations_persists_choice() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("folio").join("config.json");
            let mut app = app();
            app.config_path = Some(path.clone());

            press(&mut app, KeyCode::Char('a'));
            assert!(app.state.reveal.enabled);
            assert_eq!(app.status_message.as_deref(), Some("Animations on"));
            assert_eq!(SiteConfig::load_from(&path).unwrap().animations, Some(true));

            press(&mut app, KeyCode::Char('a'));
            assert!(!app.state.reveal.enabled);
            assert_eq!(app.status_message.as_deref(), Some("Animations off"));
            assert_eq!(SiteConfig::load_from(&path).unwrap().animations, Some(false));
        }

        #[test]
        fn test_toggle_animations_reports_failed_save() {
            let dir = TempDir::new().unwrap();
            let blocker = dir.path().join("blocker");
            std::fs::write(&blocker, "").unwrap();
            let mut app = app();
            app.config_path = Some(blocker.join("config.json"));

            press(&mut app, KeyCode::Char('a'));
            assert!(app.state.reveal.enabled);
            assert_eq!(app.config.animations, Some(true));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Animations on (not saved)")
            );
        }
    }

    mod copying {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_about_copies_resume_link() {
            let mut app = app();
            press(&mut app, KeyCode::Char('3'));
            assert_eq!(app.copy_target().as_deref(), Some("/Resume.pdf"));

            app.config.resume_url = Some("https://kivevox.example/cv.pdf".to_string());
            assert_eq!(
                app.copy_target().as_deref(),
                Some("https://kivevox.example/cv.pdf")
            );
        }

        #[test]
        fn test_contact_copies_highlighted_method() {
            let mut app = app();
            press(&mut app, KeyCode::Char('5'));
            assert!(app.copy_target().is_none());
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            assert_eq!(
                app.copy_target().as_deref(),
                Some("peterkivevo001@gmail.com")
            );
        }

        #[test]
        fn test_footer_copies_social_link() {
            let mut app = app();
            for _ in 0..5 {
                press(&mut app, KeyCode::PageDown);
            }
            press(&mut app, KeyCode::Left);
            assert_eq!(
                app.copy_target().as_deref(),
                Some("https://portfolio.com")
            );
        }

        #[test]
        fn test_nothing_to_copy_on_services() {
            let mut app = app();
            press(&mut app, KeyCode::Char('2'));
            press(&mut app, KeyCode::Right);
            assert!(app.copy_target().is_none());
        }
    }
}

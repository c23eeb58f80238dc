use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;
use tracing::debug;

use user_service::{FormError, User, UserField, UserForm, UsersPage};

/// Cards per row in the grid
pub const CARD_COLUMNS: usize = 3;

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browse the card grid
    UserList,
    /// Add user modal is open over the grid
    UserModal,
}

// =============================================================================
// Status Line
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

// =============================================================================
// Application
// =============================================================================

#[derive(Debug)]
pub struct App {
    pub page: UsersPage,
    pub selected_index: usize,
    /// Position in [`UserField::FORM_INPUTS`] of the input being typed into
    pub focused_input: usize,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            page: UsersPage::new(users),
            selected_index: 0,
            focused_input: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn state(&self) -> AppState {
        if self.page.is_modal_open() {
            AppState::UserModal
        } else {
            AppState::UserList
        }
    }

    pub fn users(&self) -> &[User] {
        self.page.users()
    }

    pub fn modal(&self) -> Option<&UserForm> {
        self.page.modal()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Card Grid Navigation
    // =========================================================================

    pub fn move_left(&mut self) {
        if self.selected_index % CARD_COLUMNS > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        let next = self.selected_index + 1;
        if next % CARD_COLUMNS != 0 && next < self.users().len() {
            self.selected_index = next;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index >= CARD_COLUMNS {
            self.selected_index -= CARD_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        let next = self.selected_index + CARD_COLUMNS;
        if next < self.users().len() {
            self.selected_index = next;
        } else if self.selected_index / CARD_COLUMNS < self.last_row() {
            // Short last row: land on its final card
            self.selected_index = self.users().len().saturating_sub(1);
        }
    }

    fn last_row(&self) -> usize {
        self.users().len().saturating_sub(1) / CARD_COLUMNS
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users().get(self.selected_index)
    }

    // =========================================================================
    // Add User Modal
    // =========================================================================

    pub fn open_add_modal(&mut self) {
        self.page.open_add_modal();
        self.focused_input = 0;
        self.status = None;
    }

    pub fn close_modal(&mut self) {
        self.page.close_modal();
        self.status = None;
    }

    pub fn focused_field(&self) -> UserField {
        UserField::FORM_INPUTS[self.focused_input % UserField::FORM_INPUTS.len()]
    }

    pub fn focus_next(&mut self) {
        self.focused_input = (self.focused_input + 1) % UserField::FORM_INPUTS.len();
    }

    pub fn focus_prev(&mut self) {
        let len = UserField::FORM_INPUTS.len();
        self.focused_input = (self.focused_input + len - 1) % len;
    }

    /// Append a typed character to the focused input.
    pub fn input_char(&mut self, c: char) -> Result<()> {
        let field = self.focused_field();
        let Some(form) = self.modal() else {
            return Ok(());
        };
        let mut value = form.value(field).to_string();
        value.push(c);
        self.page.change_field(field, value)?;
        Ok(())
    }

    /// Remove the last character of the focused input.
    pub fn input_backspace(&mut self) -> Result<()> {
        let field = self.focused_field();
        let Some(form) = self.modal() else {
            return Ok(());
        };
        let mut value = form.value(field).to_string();
        if value.pop().is_some() {
            self.page.change_field(field, value)?;
        }
        Ok(())
    }

    /// Save the modal. Missing required inputs keep it open and move focus to the first one.
    pub fn submit_modal(&mut self) -> Result<()> {
        match self.page.submit_modal() {
            Ok(user) => {
                self.selected_index = self.users().len().saturating_sub(1);
                self.status = Some(StatusMessage {
                    text: format!("Added {} (#{})", user.data.name, user.id),
                    kind: StatusKind::Info,
                });
                Ok(())
            }
            Err(FormError::MissingRequired(missing)) => {
                debug!(?missing, "Required inputs empty");
                if let Some(first) = missing.first() {
                    if let Some(pos) = UserField::FORM_INPUTS.iter().position(|f| f == first) {
                        self.focused_input = pos;
                    }
                }
                self.status = Some(StatusMessage {
                    text: FormError::MissingRequired(missing).to_string(),
                    kind: StatusKind::Warning,
                });
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::UserData;

    fn users(count: u64) -> Vec<User> {
        (1..=count)
            .map(|id| {
                UserData {
                    name: format!("User {}", id),
                    ..UserData::default()
                }
                .into_user(id)
            })
            .collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.input_char(c).unwrap();
        }
    }

    #[test]
    fn test_grid_navigation() {
        let mut app = App::new(users(5));
        app.move_right();
        app.move_right();
        assert_eq!(app.selected_index, 2);
        app.move_right();
        assert_eq!(app.selected_index, 2, "row end is a wall");
        app.move_down();
        assert_eq!(app.selected_index, 4, "short last row clamps to its last card");
        app.move_up();
        assert_eq!(app.selected_index, 1);
        app.move_left();
        app.move_left();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut app = App::new(Vec::new());
        app.move_down();
        app.move_right();
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_user().is_none());
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = App::new(Vec::new());
        app.open_add_modal();
        assert_eq!(app.state(), AppState::UserModal);

        type_text(&mut app, "Adx");
        app.input_backspace().unwrap();
        type_text(&mut app, "a");
        for _ in 0..5 {
            app.focus_next();
        }
        assert_eq!(app.focused_field(), UserField::Company);
        type_text(&mut app, "Acme");

        let draft = app.modal().unwrap().draft();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.company.name, "Acme");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::new(Vec::new());
        app.focus_prev();
        assert_eq!(app.focused_field(), UserField::City);
        app.focus_next();
        assert_eq!(app.focused_field(), UserField::Name);
    }

    #[test]
    fn test_submit_appends_and_selects() {
        let mut app = App::new(users(2));
        app.open_add_modal();
        type_text(&mut app, "Ada");
        app.focus_next();
        type_text(&mut app, "ada@x.com");
        app.focus_next();
        type_text(&mut app, "ada");
        app.submit_modal().unwrap();

        assert_eq!(app.state(), AppState::UserList);
        assert_eq!(app.users().len(), 3);
        assert_eq!(app.selected_user().map(|u| u.id), Some(3));
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Added Ada (#3)")
        );
    }

    #[test]
    fn test_blocked_submit_focuses_first_missing() {
        let mut app = App::new(Vec::new());
        app.open_add_modal();
        type_text(&mut app, "Ada");
        app.submit_modal().unwrap();

        assert_eq!(app.state(), AppState::UserModal);
        assert_eq!(app.focused_field(), UserField::Email);
        assert_eq!(
            app.status.as_ref().map(|s| s.kind),
            Some(StatusKind::Warning)
        );
        assert!(app.users().is_empty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut app = App::new(users(1));
        app.open_add_modal();
        type_text(&mut app, "Ada");
        app.close_modal();

        assert_eq!(app.state(), AppState::UserList);
        assert_eq!(app.users().len(), 1);
        app.open_add_modal();
        assert!(app.modal().is_some_and(|m| m.draft().is_empty()));
    }
}

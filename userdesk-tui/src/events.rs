use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppState};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.state() {
            AppState::UserList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit()
                }
                KeyCode::Char('a') => self.open_add_modal(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Left | KeyCode::Char('h') => self.move_left(),
                KeyCode::Right | KeyCode::Char('l') => self.move_right(),
                _ => {}
            },
            AppState::UserModal => match key_event.code {
                KeyCode::Esc => self.close_modal(),
                KeyCode::Enter => self.submit_modal()?,
                KeyCode::Tab | KeyCode::Down => self.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
                KeyCode::Backspace => self.input_backspace()?,
                KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_char(c)?
                }
                _ => {}
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::UserField;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_user_with_keys() {
        let mut app = App::new(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state(), AppState::UserModal);

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@x.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state(), AppState::UserList);
        let user = &app.users()[0];
        assert_eq!(user.id, 1);
        assert_eq!(user.data.name, "Ada");
        assert_eq!(user.data.email, "ada@x.com");
        assert_eq!(user.data.username, "ada");
        assert_eq!(user.data.phone, "");
    }

    #[test]
    fn test_q_types_inside_modal() {
        let mut app = App::new(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "q");

        assert!(!app.should_quit);
        assert_eq!(
            app.modal().map(|m| m.value(UserField::Name)),
            Some("q")
        );
    }

    #[test]
    fn test_escape_closes_modal_then_quits() {
        let mut app = App::new(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::UserList);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_back_tab_reaches_address() {
        let mut app = App::new(Vec::new());
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "Springfield");
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "Main St");

        let address = &app.modal().unwrap().draft().address;
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.street, "Main St");
        assert_eq!(address.suite, "");
    }
}

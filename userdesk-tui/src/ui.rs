pub mod components;
pub mod layout;
pub mod user_cards;
pub mod user_modal;

use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame) {
    user_cards::render(app, frame);
    if app.state() == AppState::UserModal {
        user_modal::render(app, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use user_service::{Address, Company, User, UserData};

    fn leanne() -> User {
        UserData {
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            username: "Bret".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
            address: Address {
                city: "Gwenborough".to_string(),
                ..Address::default()
            },
            ..UserData::default()
        }
        .into_user(1)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_cards() {
        let app = App::new(vec![leanne()]);
        let screen = draw(&app);
        assert!(screen.contains("Users"));
        assert!(screen.contains("Add User"));
        assert!(screen.contains("Leanne Graham"));
        assert!(screen.contains("@Bret"));
        assert!(screen.contains("Romaguera-Crona"));
    }

    #[test]
    fn test_status_shows_selected_user() {
        let app = App::new(vec![leanne()]);
        let screen = draw(&app);
        assert!(screen.contains("#1 Leanne Graham"));
    }

    #[test]
    fn test_card_without_username_has_no_handle() {
        let mut user = leanne();
        user.data.username = String::new();
        user.data.email = String::new();
        let screen = draw(&App::new(vec![user]));
        assert!(!screen.contains("@"));
    }

    #[test]
    fn test_renders_empty_list() {
        let app = App::new(Vec::new());
        let screen = draw(&app);
        assert!(screen.contains("No users loaded"));
    }

    #[test]
    fn test_renders_modal_over_grid() {
        let mut app = App::new(vec![leanne()]);
        app.open_add_modal();
        app.input_char('Z').unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Add User"));
        assert!(screen.contains("Username"));
        assert!(screen.contains("Street"));
        assert!(screen.contains("Save"));
    }
}

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use user_service::User;

use crate::app::{App, CARD_COLUMNS};
use crate::ui::{components, layout};

/// Rows a single card takes, borders included
const CARD_HEIGHT: u16 = 8;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header("Userdesk", frame, chunks[0]);
    components::render_title_bar("Users", frame, chunks[1]);
    render_grid(app, frame, chunks[2]);
    let selection = app
        .selected_user()
        .map(|user| format!("#{} {}", user.id, user.data.name));
    components::render_status(app.status.as_ref(), selection.as_deref(), frame, chunks[3]);
    components::render_footer(
        "h/j/k/l: Navigate | a: Add User | q: Quit",
        frame,
        chunks[4],
    );
}

fn render_grid(app: &App, frame: &mut Frame, area: Rect) {
    let users = app.users();
    if users.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from("No users loaded."),
            Line::from(""),
            Line::from("Press 'a' to add one."),
        ])
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Users"))
        .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, area);
        return;
    }

    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected_index / CARD_COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let row_areas =
        Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * CARD_COLUMNS;
        if start >= users.len() {
            break;
        }
        let end = (start + CARD_COLUMNS).min(users.len());
        let cells = Layout::horizontal([Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .spacing(1)
            .split(*row_area);

        for (i, user) in users[start..end].iter().enumerate() {
            let index = start + i;
            render_card(user, index == app.selected_index, frame, cells[i]);
        }
    }
}

/// Read-only projection of one user
fn render_card(user: &User, selected: bool, frame: &mut Frame, area: Rect) {
    let data = &user.data;
    let border_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(Span::styled(
            data.handle().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![Span::styled("email   ", label), Span::raw(&data.email)]),
        Line::from(vec![Span::styled("phone   ", label), Span::raw(&data.phone)]),
        Line::from(vec![Span::styled("web     ", label), Span::raw(&data.website)]),
        Line::from(vec![
            Span::styled("company ", label),
            Span::raw(&data.company.name),
        ]),
        Line::from(vec![
            Span::styled("city    ", label),
            Span::raw(&data.address.city),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", data.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(card, area);
}

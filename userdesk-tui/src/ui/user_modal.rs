use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use user_service::UserField;

use crate::app::{App, StatusKind};
use crate::ui::layout;

const MODAL_WIDTH: u16 = 52;
/// Title border, one line per input, a blank line, hint, button row, bottom border
const MODAL_HEIGHT: u16 = UserField::FORM_INPUTS.len() as u16 + 5;
const LABEL_WIDTH: usize = 10;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(form) = app.modal() else {
        return;
    };

    let area = layout::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let focused = app.focused_field();
    let mut lines: Vec<Line> = UserField::FORM_INPUTS
        .iter()
        .map(|field| {
            let is_focused = *field == focused;
            let value = form.value(*field);
            let marker = if field.is_required() { "*" } else { " " };

            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let value_span = if is_focused {
                Span::styled(
                    format!("{}_", value),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                )
            } else if value.is_empty() {
                Span::styled(field.label(), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(value, Style::default().fg(Color::White))
            };

            Line::from(vec![
                Span::styled(if is_focused { "> " } else { "  " }, label_style),
                Span::styled(
                    format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                    label_style,
                ),
                Span::styled(marker, Style::default().fg(Color::Red)),
                Span::raw(" "),
                value_span,
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(hint_line(app));
    lines.push(Line::from(vec![
        Span::styled(
            " Enter: Save ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(" Esc: \u{2715} ", Style::default().fg(Color::Gray)),
    ]));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", form.title()))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(modal, area);
}

fn hint_line(app: &App) -> Line<'static> {
    match &app.status {
        Some(status) if status.kind == StatusKind::Warning => Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            "Tab/Shift-Tab: Move between inputs",
            Style::default().fg(Color::DarkGray),
        )),
    }
}

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{StatusKind, StatusMessage};

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Page title on the left, the "Add User" control on the right
pub fn render_title_bar(title: &str, frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Span::styled(
        format!(" {}", title),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, area);

    let button = Paragraph::new(Line::from(vec![
        Span::styled(
            " a ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Add User ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(button, area);
}

/// Last status message, or the selected card when there is none
pub fn render_status(
    status: Option<&StatusMessage>,
    selection: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(status) = status else {
        if let Some(selection) = selection {
            let line = Paragraph::new(format!(" {}", selection))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(line, area);
        }
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Green,
        StatusKind::Warning => Color::Yellow,
    };
    let line = Paragraph::new(format!(" {}", status.text)).style(Style::default().fg(color));
    frame.render_widget(line, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}

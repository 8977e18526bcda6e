//! Category selection screen.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the category menu. `status` carries a "no word available"-style
/// message when the last selection could not start a round.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    categories: &[String],
    selected: usize,
    status: Option<&str>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Varnamala — Choose a Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            " Catch the letters in order to spell the word.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, category) in categories.iter().enumerate() {
        if i == selected {
            lines.push(Line::from(vec![
                Span::styled(" ▶ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    category.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(format!("   {}", category)));
        }
    }

    lines.push(Line::from(""));
    if let Some(message) = status {
        lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[Up/Down]", Style::default().fg(Color::Cyan)),
        Span::raw(" Select  "),
        Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
        Span::raw(" Play  "),
        Span::styled("[q]", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

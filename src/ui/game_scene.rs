//! UI rendering for the letter-catching game scene.

use crate::core::types::{FailureKind, Phase, RectF, RoundResult, Snapshot, TILE_PALETTE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full game screen: play area, status bar, word panel, and the
/// round-over overlay when the round has ended.
pub fn render_game(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Varnamala ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play area (left) | word panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(inner);

    // Left side: play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], snap);
    render_status_bar(frame, v_chunks[1], snap);
    render_word_panel(frame, h_chunks[1], snap);

    if let Phase::Ended(result) = snap.phase {
        render_round_over(frame, area, snap, result);
    }
}

#[derive(Clone)]
struct Cell {
    ch: char,
    style: Style,
}

/// Render the scrolling play area: letter tiles as colored blocks with their
/// glyph at the center, the player sprite on top.
fn render_play_area(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 || snap.board_width <= 0.0 || snap.board_height <= 0.0 {
        return;
    }

    let x_scale = width as f64 / snap.board_width;
    let y_scale = height as f64 / snap.board_height;

    let blank = Cell {
        ch: ' ',
        style: Style::default(),
    };
    let mut grid = vec![vec![blank; width]; height];

    for tile in &snap.tiles {
        let (r, g, b) = TILE_PALETTE[tile.color % TILE_PALETTE.len()];
        let body = Style::default().bg(Color::Rgb(r, g, b));
        paint_rect(&mut grid, &tile.rect, x_scale, y_scale, ' ', body);

        // Letter glyph at the tile center
        let center_col = ((tile.rect.x + tile.rect.w / 2.0) * x_scale).round() as i64;
        let center_row = ((tile.rect.y + tile.rect.h / 2.0) * y_scale).round() as i64;
        paint_cell(
            &mut grid,
            center_col,
            center_row,
            tile.ch,
            body.fg(Color::White).add_modifier(Modifier::BOLD),
        );
    }

    // Player sprite drawn last so it is never hidden behind a tile.
    let sprite = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    paint_rect(&mut grid, &snap.player, x_scale, y_scale, '█', sprite);
    let beak_col = ((snap.player.x + snap.player.w) * x_scale).round() as i64 - 1;
    let beak_row = ((snap.player.y + snap.player.h / 2.0) * y_scale).round() as i64;
    paint_cell(&mut grid, beak_col, beak_row, '►', sprite);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| Span::styled(cell.ch.to_string(), cell.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Fill a board-coordinate rect into the cell grid.
fn paint_rect(grid: &mut [Vec<Cell>], rect: &RectF, x_scale: f64, y_scale: f64, ch: char, style: Style) {
    let col0 = (rect.x * x_scale).round() as i64;
    let row0 = (rect.y * y_scale).round() as i64;
    let cols = ((rect.w * x_scale).round() as i64).max(1);
    let rows = ((rect.h * y_scale).round() as i64).max(1);
    for row in row0..row0 + rows {
        for col in col0..col0 + cols {
            paint_cell(grid, col, row, ch, style);
        }
    }
}

fn paint_cell(grid: &mut [Vec<Cell>], col: i64, row: i64, ch: char, style: Style) {
    if row < 0 || col < 0 {
        return;
    }
    let (row, col) = (row as usize, col as usize);
    if row < grid.len() && col < grid[row].len() {
        grid[row][col] = Cell { ch, style };
    }
}

/// Status bar under the play area.
fn render_status_bar(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let (message, color) = match snap.phase {
        Phase::Idle => ("Press Space to start!".to_string(), Color::Yellow),
        Phase::Playing => (
            format!("Collect the letters of {} in order", snap.script_word),
            Color::Green,
        ),
        Phase::Ended(_) => ("Round over".to_string(), Color::DarkGray),
    };

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(vec![
            Span::styled("[Space/Up]", Style::default().fg(Color::Cyan)),
            Span::raw(" Flap  "),
            Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
            Span::raw(" Menu"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// The word panel on the right: category, target word, and collection
/// progress.
fn render_word_panel(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let block = Block::default()
        .title(" Word ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let total = snap.script_word.chars().count();
    let done = snap.collected.chars().count();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Category: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snap.category.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Word: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snap.script_word.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Say: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.transliteration.clone(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Collected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.collected.clone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(""),
    ];

    // Progress bar
    let progress = if total > 0 {
        (done as f64 / total as f64).min(1.0)
    } else {
        0.0
    };
    let bar_width = (inner.width as usize).saturating_sub(4);
    let filled = (progress * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    lines.push(Line::from(Span::styled(
        format!(" Progress: {} / {}", done, total),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered overlay shown once the round has ended.
fn render_round_over(frame: &mut Frame, area: Rect, snap: &Snapshot, result: RoundResult) {
    let (title, title_color, message) = match result {
        RoundResult::Success => (
            " WORD COMPLETED! ",
            Color::Green,
            format!("{} ({})", snap.script_word, snap.transliteration),
        ),
        RoundResult::Failure(FailureKind::WrongLetter) => (
            " WRONG LETTER ",
            Color::Red,
            format!("Collected so far: {}", snap.collected),
        ),
        RoundResult::Failure(FailureKind::OutOfBounds) => (
            " GAME OVER ",
            Color::Red,
            format!("Collected so far: {}", snap.collected),
        ),
    };
    let prompt = match result {
        RoundResult::Success => "Press Space for the next word",
        RoundResult::Failure(_) => "Press Space to try a new word",
    };

    let overlay = centered_rect(area, 40, 7);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(ratatui::layout::Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(Color::DarkGray)))
            .alignment(ratatui::layout::Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// A `width`×`height` rect centered inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

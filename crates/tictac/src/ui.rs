//! Stateless rendering.

use crate::app::App;
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictac_engine::{Player, Position, Square, rules::winning_line};

const CELL_WIDTH: usize = 7;
const BOARD_WIDTH: u16 = (CELL_WIDTH * 3 + 2) as u16;
const BOARD_HEIGHT: u16 = 5;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme, title: &str) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, theme);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter select  1-9 pick  r reset  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if app.announcement().is_some() {
        draw_announcement(frame, area, app, theme);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let board = app.engine().board();
    let highlight = winning_line(board);
    let show_cursor = !app.engine().outcome().is_terminal();

    let separator = Line::from(Span::styled(
        vec!["─".repeat(CELL_WIDTH); 3].join("┼"),
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in 0..3 {
        if row > 0 {
            lines.push(separator.clone());
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let in_line = highlight.is_some_and(|line| line.contains(&pos));
            let cursor = show_cursor && pos == app.cursor();
            spans.push(cell(board.get(pos), pos, theme, in_line, cursor));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, BOARD_WIDTH, BOARD_HEIGHT));
}

fn cell(
    square: Square,
    pos: Position,
    theme: &Theme,
    in_line: bool,
    cursor: bool,
) -> Span<'static> {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(player, theme))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if in_line {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    if cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH), style)
}

fn mark_color(player: Player, theme: &Theme) -> Color {
    match player {
        Player::X => theme.x,
        Player::O => theme.o,
    }
}

fn draw_announcement(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let Some(outcome) = app.announcement() else {
        return;
    };
    let popup = center_rect(area, 30, 5);

    // Winner in their mark's color; a draw stays in the default color.
    let headline = match outcome.winner() {
        Some(player) => Style::default().fg(mark_color(player, theme)),
        None => Style::default(),
    };

    let text = vec![
        Line::from(Span::styled(
            outcome.to_string(),
            headline.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "enter: play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Game over "));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

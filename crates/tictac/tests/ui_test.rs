//! Rendering checks against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictac::{App, Theme, ui};
use tictac_engine::Position;

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal
        .draw(|frame| ui::draw(frame, app, &Theme::default(), "Tic Tac Toe"))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
    symbols.chunks(width).map(|row| row.concat()).collect()
}

fn render(app: &App) -> Vec<String> {
    rows(&render_buffer(app))
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_fresh_screen() {
    let rows = render(&App::new());
    assert!(contains(&rows, "Tic Tac Toe"));
    assert!(contains(&rows, "Player X's turn"));
    assert!(!contains(&rows, "Game over"));
}

#[test]
fn test_marks_rendered() {
    let mut app = App::new();
    app.select(Position::TopLeft);
    app.select(Position::TopRight);

    let rows = render(&app);
    let board_row = rows
        .iter()
        .find(|row| row.contains('X') && row.contains('O'))
        .expect("row with both marks");
    assert!(board_row.find('X') < board_row.find('O'));
    assert!(contains(&rows, "Player X's turn"));
}

#[test]
fn test_announcement_rendered() {
    let mut app = App::new();
    for index in [0, 4, 1, 5, 2] {
        app.select(Position::from_index(index).unwrap());
    }

    let rows = render(&app);
    assert!(contains(&rows, "Game over"));
    assert!(contains(&rows, "Player X wins!"));
}

#[test]
fn test_winner_announced_in_mark_color() {
    let mut app = App::new();
    for index in [0, 2, 1, 4, 8, 6] {
        app.select(Position::from_index(index).unwrap());
    }

    let buffer = render_buffer(&app);
    let width = buffer.area.width as usize;
    let headline_colors: Vec<Color> = rows(&buffer)
        .iter()
        .enumerate()
        .filter_map(|(y, row)| {
            // Borders are multi-byte, so convert the byte offset to a column.
            row.find("Player O wins!")
                .map(|x| row[..x].chars().count())
                .map(|col| buffer.content()[y * width + col].fg)
        })
        .collect();

    // Status line (yellow) and announcement (O's color).
    assert_eq!(headline_colors.len(), 2);
    assert!(headline_colors.contains(&Theme::default().o));
}

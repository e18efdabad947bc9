//! Stateless rendering of the app.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Mark, Position};
use tracing::trace;

use crate::app::App;
use crate::input::HitAreas;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESET_WIDTH: u16 = 16;

/// Renders the whole screen and records where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title
            Constraint::Length(3),         // Status
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Play Again
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let cells = draw_board(frame, chunks[2], app);
    let reset = draw_reset(frame, chunks[3], app.reset_enabled());

    let help = Paragraph::new("arrows move · enter play · 1-9 pick · r play again · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    trace!(?cells, ?reset, "Frame drawn");
    app.set_hit_areas(HitAreas { cells, reset });
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_coords(row, col) else {
                continue;
            };
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, app, pos);
            cells[pos.to_index()] = cell_area;

            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }

        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.engine().cell(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line centers the symbol vertically in a 3-row cell.
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol)])
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_reset(frame: &mut Frame, area: Rect, enabled: bool) -> Rect {
    let button_area = center_rect(area, RESET_WIDTH, 3);

    let style = if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let button = Paragraph::new("Play Again")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, button_area);

    button_area
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::grid::{GameMode, Pos, GRID_SIZE};
use crate::session::Snapshot;

/// Terminal columns per board cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;
const BOARD_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = GRID_SIZE as u16 + 2;
const HEADER_HEIGHT: u16 = 4;

const HELP_TEXT: [&str; 16] = [
    "How to Play",
    "",
    "Game Modes:",
    "• Classic: traditional snek",
    "• Ghost: pass through yourself",
    "• Portal: travel through walls",
    "",
    "Controls:",
    "arrows/wasd steer, 1-3 mode",
    "space play again, h help, q quit",
    "",
    "Rules:",
    "• Eat food to grow longer",
    "• Don't hit walls (except Portal)",
    "• Don't hit yourself (except Ghost)",
    "• Get the highest score!",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hud {
    pub best: u32,
    pub new_best: bool,
    pub help: bool,
}

pub fn draw(frame: &mut Frame, snapshot: &Snapshot, hud: Hud) {
    let area = frame.area();
    if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT + HEADER_HEIGHT + 1 {
        frame.render_widget(
            Paragraph::new(format!(
                "Terminal too small\nNeed {}x{}",
                BOARD_WIDTH,
                BOARD_HEIGHT + HEADER_HEIGHT + 1
            ))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let column = Rect {
        x: area.x + (area.width - BOARD_WIDTH) / 2,
        width: BOARD_WIDTH,
        ..area
    };
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Length(1), // key help
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(header(snapshot, hud), layout[0]);

    let block = Block::default()
        .title(format!(" {} ", snapshot.mode.label()))
        .borders(Borders::ALL);
    let board = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);
    frame.render_widget(snapshot, board);

    frame.render_widget(
        Paragraph::new("wasd steer  1-3 mode  h help  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        layout[2],
    );

    if snapshot.over {
        draw_game_over(frame, snapshot, hud, board);
    }
    if hud.help {
        draw_help(frame, board);
    }
}

fn header(snapshot: &Snapshot, hud: Hud) -> Paragraph<'static> {
    let scores = Line::from(vec![
        Span::styled(
            format!("Score: {}", snapshot.score),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Best: {}", hud.best),
            Style::new().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        ),
    ]);

    let mut modes = Vec::new();
    for (i, mode) in GameMode::ALL.iter().enumerate() {
        let style = if *mode == snapshot.mode {
            Style::new().bg(Color::Green).fg(Color::Black)
        } else {
            Style::new().fg(Color::Gray)
        };
        modes.push(Span::styled(format!(" {} {} ", i + 1, mode.label()), style));
        modes.push(Span::raw(" "));
    }

    Paragraph::new(vec![scores, Line::from(modes)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn draw_game_over(frame: &mut Frame, snapshot: &Snapshot, hud: Hud, board: Rect) {
    let mut lines = vec![
        Line::from("Game Over!").bold(),
        Line::from(format!("Final Score: {}", snapshot.score)),
    ];
    if hud.new_best {
        lines.push(Line::from("New High Score!").fg(Color::Yellow).bold());
    }
    lines.push(Line::from("Press SPACE to play again"));

    let height = lines.len() as u16 + 2;
    let width = 30u16.min(board.width);
    let popup = Rect {
        x: board.x + (board.width - width) / 2,
        y: board.y + board.height.saturating_sub(height) / 2,
        width,
        height: height.min(board.height),
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

fn draw_help(frame: &mut Frame, board: Rect) {
    let mut lines: Vec<Line> = HELP_TEXT.iter().map(|text| Line::from(*text)).collect();
    lines[0] = Line::from(HELP_TEXT[0]).bold().centered();

    let height = (HELP_TEXT.len() as u16 + 2).min(board.height);
    let width = 38u16.min(board.width);
    let popup = Rect {
        x: board.x + (board.width - width) / 2,
        y: board.y + (board.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

fn cell_origin(pos: Pos, area: Rect) -> Option<(u16, u16)> {
    if !pos.in_bounds() {
        return None;
    }
    let x = area.x + pos.x as u16 * CELL_WIDTH;
    let y = area.y + pos.y as u16;
    (x + CELL_WIDTH <= area.right() && y < area.bottom()).then_some((x, y))
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ghost = self.mode == GameMode::Ghost;

        if let Some((x, y)) = cell_origin(self.food, area) {
            buf[(x, y)].set_symbol("(").set_fg(Color::LightRed);
            buf[(x + 1, y)].set_symbol(")").set_fg(Color::LightRed);
        }

        // Tail first so the head ends up on top when segments overlap
        for (i, pos) in self.snake.iter().enumerate().rev() {
            let Some((x, y)) = cell_origin(*pos, area) else {
                continue;
            };
            let color = if i == 0 { Color::LightGreen } else { Color::Green };
            for dx in 0..CELL_WIDTH {
                let cell = &mut buf[(x + dx, y)];
                cell.set_symbol("█").set_fg(color);
                if ghost {
                    cell.set_fg(Color::DarkGray);
                }
            }
            if i == 0 {
                buf[(x, y)].set_symbol("▐");
                buf[(x + 1, y)].set_symbol("▌");
            }
        }
    }
}

//! Crossterm front end: box-drawing board, arrow-key input, score line.
//!
//! Holds no game state of its own; everything it shows comes from the
//! engine's `data()`, `score()` and `state()` accessors.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::{self, Color},
    terminal::{self, Clear, ClearType},
};

use crate::engine::{Grid, Move, State};

const CELL_W: u16 = 9;
const CELL_H: u16 = 3;

/// Run the interactive game until the player quits.
///
/// Takes over the terminal (raw mode + alternate screen) and restores it on
/// the way out, including when the event loop fails.
pub fn run(grid: &mut Grid) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let res = event_loop(&mut out, grid);

    execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;
    res
}

fn event_loop(out: &mut io::Stdout, grid: &mut Grid) -> io::Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    loop {
        draw(out, grid, cols, rows)?;
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => grid.make_move(Move::Up),
                KeyCode::Down => grid.make_move(Move::Down),
                KeyCode::Left => grid.make_move(Move::Left),
                KeyCode::Right => grid.make_move(Move::Right),
                KeyCode::Char('r') => grid.reset(),
                _ => {}
            },
            Event::Resize(c, r) => {
                cols = c;
                rows = r;
            }
            _ => {}
        }
    }
}

fn draw(out: &mut io::Stdout, grid: &Grid, cols: u16, rows: u16) -> io::Result<()> {
    let n = grid.size() as u16;
    let board_w = (CELL_W + 1) * n + 1;
    let board_h = (CELL_H + 1) * n + 1;
    let ox = cols.saturating_sub(board_w) / 2;
    let oy = rows.saturating_sub(board_h + 2) / 2;
    let data = grid.data();

    queue!(out, Clear(ClearType::All))?;
    queue!(
        out,
        cursor::MoveTo(ox, oy),
        style::Print(border_row(n, '┌', '┬', '┐'))
    )?;
    for r in 0..n {
        let base = oy + r * (CELL_H + 1) + 1;
        for line in 0..CELL_H {
            queue!(out, cursor::MoveTo(ox, base + line))?;
            for c in 0..n {
                let v = data[(r * n + c) as usize];
                queue!(out, style::Print('│'))?;
                let text = if v > 0 && line == CELL_H / 2 {
                    format!("{:^width$}", 1u64 << v, width = CELL_W as usize)
                } else {
                    " ".repeat(CELL_W as usize)
                };
                if v > 0 {
                    queue!(
                        out,
                        style::SetForegroundColor(Color::White),
                        style::SetBackgroundColor(Color::DarkRed),
                        style::Print(text),
                        style::ResetColor
                    )?;
                } else {
                    queue!(out, style::Print(text))?;
                }
            }
            queue!(out, style::Print('│'))?;
        }
        let sep = if r + 1 == n {
            border_row(n, '└', '┴', '┘')
        } else {
            border_row(n, '├', '┼', '┤')
        };
        queue!(out, cursor::MoveTo(ox, base + CELL_H), style::Print(sep))?;
    }

    queue!(
        out,
        cursor::MoveTo(ox, oy + board_h),
        style::Print(format!("Score: {}", grid.score()))
    )?;
    let hint = if grid.state() == State::Ended {
        "Game over! Press r to start again"
    } else {
        "arrows: move   r: reset   q: quit"
    };
    queue!(out, cursor::MoveTo(ox, oy + board_h + 1), style::Print(hint))?;
    out.flush()
}

fn border_row(n: u16, left: char, mid: char, right: char) -> String {
    let mut row = String::new();
    row.push(left);
    for c in 0..n {
        for _ in 0..CELL_W {
            row.push('─');
        }
        row.push(if c + 1 == n { right } else { mid });
    }
    row
}

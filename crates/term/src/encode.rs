//! Frame encoding: `GameState` to ANSI bytes.
//!
//! The board is 5 rows by 11 columns:
//!
//! ```text
//!  X | O | X
//! -----------
//!    | O |
//! -----------
//!  X |   |
//! ```
//!
//! This builds a sequence of crossterm commands without writing to stdout.

use std::io;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::types::{BOARD_SIDE, RENDER_HEIGHT};
use crate::viewport::Viewport;

/// Second line shown once the game is over.
pub const EXIT_PROMPT: &str = "Press any key to exit";

const DIVIDER: &str = "-----------";
const SEPARATOR: &str = " | ";

/// Encode a full redraw of `state` into `out`.
pub fn encode_frame(state: &GameState, viewport: Viewport, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let top = viewport.board_top();
    let left = viewport.board_left();

    for line in 0..RENDER_HEIGHT {
        move_to(out, top + line, left)?;
        if line % 2 == 1 {
            out.queue(Print(DIVIDER))?;
            continue;
        }

        let row = (line / 2) as usize;
        out.queue(Print(' '))?;
        for col in 0..BOARD_SIDE {
            if col > 0 {
                out.queue(Print(SEPARATOR))?;
            }
            encode_cell(out, state, row * BOARD_SIDE + col)?;
        }
        out.queue(Print(' '))?;
    }

    if let Some(banner) = state.winner().banner() {
        move_to(out, viewport.status_row(), viewport.centered_col(banner))?;
        out.queue(Print(banner))?;
        move_to(out, viewport.prompt_row(), viewport.centered_col(EXIT_PROMPT))?;
        out.queue(Print(EXIT_PROMPT))?;
        // Raw mode has no output post-processing, so spell out the carriage returns.
        out.queue(Print("\r\n\r\n"))?;
    }

    Ok(())
}

fn encode_cell(out: &mut Vec<u8>, state: &GameState, index: usize) -> io::Result<()> {
    let ch = state.board().get(index).unwrap_or_default().as_char();
    if index == state.cursor() {
        out.queue(SetAttribute(Attribute::Reverse))?;
        out.queue(Print(ch))?;
        out.queue(SetAttribute(Attribute::NoReverse))?;
    } else {
        out.queue(Print(ch))?;
    }
    Ok(())
}

/// Absolute cursor move using 1-based row/column.
fn move_to(out: &mut Vec<u8>, row: u16, col: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
    Ok(())
}

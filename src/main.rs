//! Terminal tic-tac-toe runner.
//!
//! Render, read one key, apply it, repeat until the game asks to quit. The
//! terminal is restored on every way out of the loop.

use anyhow::Result;
use tracing::info;

use tui_tictactoe::cli::{parse_args, Command, USAGE};
use tui_tictactoe::config::Config;
use tui_tictactoe::core::GameState;
use tui_tictactoe::logging;
use tui_tictactoe::term::TerminalSession;
use tui_tictactoe::types::PlayerMode;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match parse_args(&args) {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Play { mode } => mode,
    };

    let config = Config::new(mode).with_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalSession::open()?;
    let result = run(&mut term, config.mode);

    // Always try to restore terminal state, then report whichever failed first.
    let closed = term.close();
    result?;
    closed?;
    Ok(())
}

fn run(term: &mut TerminalSession, mode: PlayerMode) -> Result<()> {
    let mut game = GameState::new(mode);
    info!(players = mode.player_count(), "game started");

    while !game.should_quit() {
        term.render(&game)?;
        let token = term.read_token()?;
        game.apply_input(token);
    }

    info!(outcome = game.winner().as_str(), "game over");
    Ok(())
}

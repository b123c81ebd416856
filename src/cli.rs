//! Command-line flags.
//!
//! getopt-style short options: `-h` and `-1`, clusterable as `-h1`. Anything
//! else is ignored, and `--` stops option parsing.

use crate::types::PlayerMode;

pub const USAGE: &str = "tictactoe: Simple terminal tictactoe game

USAGE:
  $ tictactoe [OPTIONS]

OPTIONS:
 -h\tprint this help screen
 -1\tenable single player mode
";

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Play { mode: PlayerMode },
}

/// Parse arguments (without the program name).
///
/// `-h` wins as soon as it is seen, exactly like exiting from inside the
/// option loop.
pub fn parse_args(args: &[String]) -> Command {
    let mut players = 2;

    for arg in args {
        if arg == "--" {
            break;
        }
        let Some(flags) = arg.strip_prefix('-') else {
            continue;
        };
        if flags.is_empty() || flags.starts_with('-') {
            continue;
        }
        for flag in flags.chars() {
            match flag {
                'h' => return Command::Help,
                '1' => players = 1,
                _ => {}
            }
        }
    }

    Command::Play {
        mode: PlayerMode::from_count(players).unwrap_or_default(),
    }
}

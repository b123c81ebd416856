//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of cells on the board (3x3, row-major)
pub const BOARD_SIZE: usize = 9;

/// Cells per board row/column
pub const BOARD_SIDE: usize = 3;

/// Rendered board size in terminal characters
pub const RENDER_HEIGHT: u16 = 5;
pub const RENDER_WIDTH: u16 = 11;

/// Maximum bytes consumed by a single keypress read.
///
/// Arrow keys arrive as `ESC [ A`..`ESC [ D`, so this covers them with room to spare.
pub const READ_CHUNK: usize = 5;

/// Every index-triple that counts as three in a row: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerX,
    PlayerO,
}

impl Cell {
    /// Character drawn for this cell
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerX => 'X',
            Cell::PlayerO => 'O',
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The side whose move is next. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// The mark this player writes on the board
    pub fn mark(&self) -> Cell {
        match self {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }

    /// The opponent
    pub fn other(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Win tag for this player
    pub fn win(&self) -> Winner {
        match self {
            Player::X => Winner::PlayerXWin,
            Player::O => Winner::PlayerOWin,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "x",
            Player::O => "o",
        }
    }
}

/// Game outcome. Everything except `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    InProgress,
    Draw,
    PlayerXWin,
    PlayerOWin,
}

impl Winner {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Winner::InProgress)
    }

    /// End-of-game banner, `None` while the game is still running
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Winner::InProgress => None,
            Winner::Draw => Some("DRAW"),
            Winner::PlayerXWin => Some("PLAYER 1 WINS"),
            Winner::PlayerOWin => Some("PLAYER 2 WINS"),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::InProgress => "inProgress",
            Winner::Draw => "draw",
            Winner::PlayerXWin => "playerXWin",
            Winner::PlayerOWin => "playerOWin",
        }
    }
}

/// Classified keyboard input consumed by the game engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    MoveLeft,
    MoveUp,
    MoveRight,
    MoveDown,
    Confirm,
    /// Ctrl-C. Raw mode swallows SIGINT, so the interrupt arrives as a byte.
    Abort,
    Other,
}

impl Token {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::MoveLeft => "moveLeft",
            Token::MoveUp => "moveUp",
            Token::MoveRight => "moveRight",
            Token::MoveDown => "moveDown",
            Token::Confirm => "confirm",
            Token::Abort => "abort",
            Token::Other => "other",
        }
    }
}

/// Number of human players, fixed when the game is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerMode {
    /// One human (X) against the placeholder opponent
    Single,
    #[default]
    Two,
}

impl PlayerMode {
    /// Build from a player count. Only 1 and 2 are meaningful.
    pub fn from_count(players: u8) -> Option<Self> {
        match players {
            1 => Some(PlayerMode::Single),
            2 => Some(PlayerMode::Two),
            _ => None,
        }
    }

    pub fn player_count(&self) -> u8 {
        match self {
            PlayerMode::Single => 1,
            PlayerMode::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_every_cell() {
        let mut seen = [0u8; BOARD_SIZE];
        for line in LINES.iter() {
            for &i in line {
                seen[i] += 1;
            }
        }
        // Centre sits on 4 lines, corners on 3, edges on 2.
        assert_eq!(seen, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_player_alternation() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other().mark(), Cell::PlayerX);
        assert_eq!(Player::O.win(), Winner::PlayerOWin);
    }

    #[test]
    fn test_banners() {
        assert_eq!(Winner::InProgress.banner(), None);
        assert_eq!(Winner::PlayerXWin.banner(), Some("PLAYER 1 WINS"));
        assert_eq!(Winner::PlayerOWin.banner(), Some("PLAYER 2 WINS"));
        assert_eq!(Winner::Draw.banner(), Some("DRAW"));
        assert!(!Winner::InProgress.is_terminal());
        assert!(Winner::Draw.is_terminal());
    }

    #[test]
    fn test_player_mode_from_count() {
        assert_eq!(PlayerMode::from_count(1), Some(PlayerMode::Single));
        assert_eq!(PlayerMode::from_count(2), Some(PlayerMode::Two));
        assert_eq!(PlayerMode::from_count(3), None);
        assert_eq!(PlayerMode::default().player_count(), 2);
    }
}

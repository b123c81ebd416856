//! Key mapping from raw keypress bytes to game tokens.

use crate::types::Token;

const ETX: u8 = 0x03;

/// Map a single byte to a token.
///
/// Arrow keys arrive as `ESC [ A`..`ESC [ D`; only their final letter reaches
/// this function, which is why bare uppercase `A`..`D` also steer.
pub fn classify_byte(byte: u8) -> Token {
    match byte {
        b'a' | b'D' => Token::MoveLeft,
        b'w' | b'A' => Token::MoveUp,
        b'd' | b'C' => Token::MoveRight,
        b's' | b'B' => Token::MoveDown,
        b' ' | b'\r' | b'\n' => Token::Confirm,
        ETX => Token::Abort,
        _ => Token::Other,
    }
}

/// Classify the bytes delivered by one keypress read, keyed on the last byte.
pub fn classify_bytes(bytes: &[u8]) -> Token {
    bytes.last().map_or(Token::Other, |&b| classify_byte(b))
}

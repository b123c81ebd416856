//! Blocking single-keypress reads.

use std::io::{self, Read};

use crate::map::classify_bytes;
use crate::types::{Token, READ_CHUNK};

/// Block until at least one byte arrives, then classify the keypress.
///
/// Reads up to [`READ_CHUNK`] bytes so an arrow-key escape sequence is consumed
/// in one go. A zero-byte read means the input is gone and is reported as
/// `UnexpectedEof`.
pub fn read_token_from<R: Read>(reader: &mut R) -> io::Result<Token> {
    let mut buf = [0u8; READ_CHUNK];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "standard input closed",
                ))
            }
            Ok(n) => return Ok(classify_bytes(&buf[..n])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

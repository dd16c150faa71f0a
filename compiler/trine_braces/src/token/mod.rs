//! Character tokens with source locations.

use std::fmt;

use trine_parse::{Position, TokenStream};

#[cfg(test)]
mod tests;

/// One source character and where it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Located {
    pub ch: char,
    pub position: Position,
}

impl Located {
    pub fn new(ch: char, position: Position) -> Self {
        Located { ch, position }
    }

    /// Compare characters only, ignoring location.
    pub fn same_char(&self, other: &Located) -> bool {
        self.ch == other.ch
    }
}

impl fmt::Display for Located {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {}", self.ch, self.position)
    }
}

/// Split `source` into located characters, starting at line 1, column 1.
pub fn tokenize(source: &str) -> TokenStream<Located> {
    source
        .chars()
        .scan(Position::START, |position, ch| {
            let token = Located::new(ch, *position);
            *position = position.bump(ch);
            Some(token)
        })
        .collect()
}

//! Character cursor over one parse's input.
//!
//! The cursor has no grammar knowledge. It hands out bounded lookahead,
//! single-character consumption, and a [`Mark`] that the grammar uses to
//! rewind after a failed speculative read.

/// Whitespace skipped between tokens. Other Unicode whitespace is content.
pub const SPACES: [char; 4] = [' ', '\n', '\t', '\r'];

/// A saved cursor position, restored with [`Cursor::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

impl Mark {
    pub fn position(self) -> usize {
        self.0
    }
}

/// Owns a copy of the input text and a read position into it.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Current position, in characters from the start of the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Look at the character `offset` places ahead without moving.
    /// `None` marks the end of input.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos.checked_add(offset)?).copied()
    }

    /// Return the current character (or `None` at the end) and advance by one.
    ///
    /// The position moves even past the end; callers check [`peek`](Self::peek)
    /// first.
    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek(0);
        self.pos += 1;
        ch
    }

    /// Advance past a run of [`SPACES`].
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(0), Some(c) if SPACES.contains(&c)) {
            self.pos += 1;
        }
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }
}

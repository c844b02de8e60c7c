//! Recursive-descent grammar for `toString()`-style dumps.
//!
//! ```text
//! Value          := List | QuotedString | IdentOrLiteral | BareLiteral
//! List           := '[' (Value (','? Value)*)? ']'
//! QuotedString   := '"' <any char except '"'>* '"'?
//! IdentOrLiteral := Identifier ( '(' Field (','? Field)* ')' )?
//! Field          := KeyChars ('=' Value)?
//! Identifier     := [A-Za-z_][A-Za-z0-9_@.]*
//! KeyChars       := [A-Za-z0-9_]*
//! BareLiteral    := <any chars except ',', ')', ']'>, rtrim, then cast
//! ```
//!
//! # Key design decisions
//!
//! - **Mark/reset backtracking**: an identifier not followed by `(` is not an
//!   object. The cursor is rewound to the identifier's start and the whole
//!   token is reread as a bare literal, so `Tue Jan 06` survives intact.
//! - **No error path**: malformed input yields a best-effort tree. Every loop
//!   stops at end of input, and any character no rule consumes is skipped, so
//!   each iteration makes progress.
//! - **Bounded nesting**: past [`ParseOptions::max_depth`] open levels, `[` and
//!   `Name(` are read as bare literals instead of recursing.

use crate::caster::cast;
use crate::cursor::Cursor;
use crate::options::ParseOptions;
use crate::types::Value;

/// Characters that end a bare literal.
const DELIMITERS: [char; 3] = [',', ')', ']'];

/// Parse one dump with default options.
///
/// Returns `Value::Null` for empty or all-whitespace input.
///
/// ```
/// use dumptree_core::{parse, Value};
///
/// let value = parse("User(id=1, name=Bob)");
/// assert_eq!(value.object_name(), Some("User"));
/// assert_eq!(value.get("id"), Some(&Value::Int(1)));
/// assert_eq!(value.get("name"), Some(&Value::Str("Bob".into())));
/// ```
pub fn parse(text: &str) -> Value {
    Parser::new(text).parse()
}

/// Parse one dump with explicit options.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Value {
    Parser::with_options(text, options).parse()
}

/// Grammar engine over a private [`Cursor`]. One parser serves one input.
#[derive(Debug)]
pub struct Parser {
    cursor: Cursor,
    options: ParseOptions,
    depth: usize,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    pub fn with_options(text: &str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            depth: 0,
        }
    }

    /// Parse the first value in the input. Trailing text is ignored.
    pub fn parse(&mut self) -> Value {
        self.cursor.skip_spaces();
        self.parse_value()
    }

    fn parse_value(&mut self) -> Value {
        self.cursor.skip_spaces();
        match self.cursor.peek(0) {
            None => Value::Null,
            Some('[') if self.can_descend() => self.parse_list(),
            Some('"') => self.parse_quoted(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.parse_ident_or_literal(),
            Some(_) => self.parse_literal(),
        }
    }

    fn can_descend(&self) -> bool {
        if self.depth < self.options.max_depth {
            return true;
        }
        log::debug!(
            "nesting limit {} reached at position {}, reading as literal",
            self.options.max_depth,
            self.cursor.position()
        );
        false
    }

    fn parse_list(&mut self) -> Value {
        self.cursor.consume(); // [
        self.depth += 1;
        let mut items = Vec::new();
        loop {
            self.cursor.skip_spaces();
            match self.cursor.peek(0) {
                None => break,
                Some(']') => {
                    self.cursor.consume();
                    break;
                }
                _ => {}
            }

            let start = self.cursor.position();
            let item = self.parse_value();
            self.cursor.skip_spaces();
            let next = self.cursor.peek(0);
            if self.cursor.position() == start && next != Some(',') {
                // A ')' with no owner here.
                self.cursor.consume();
                continue;
            }
            items.push(item);
            if next == Some(',') {
                self.cursor.consume();
            }
        }
        self.depth -= 1;
        Value::List(items)
    }

    /// Everything up to the next `"`. An unterminated string keeps what it read.
    fn parse_quoted(&mut self) -> Value {
        self.cursor.consume(); // "
        let mut text = String::new();
        while let Some(c) = self.cursor.peek(0) {
            self.cursor.consume();
            if c == '"' {
                break;
            }
            text.push(c);
        }
        Value::Str(text)
    }

    fn parse_ident_or_literal(&mut self) -> Value {
        let mark = self.cursor.mark();
        let name = self.read_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '.'));
        self.cursor.skip_spaces();
        if self.cursor.peek(0) == Some('(') && self.can_descend() {
            return self.parse_object(name);
        }
        log::trace!(
            "'{}' at position {} is not an object header, rereading as literal",
            name,
            mark.position()
        );
        self.cursor.reset(mark);
        self.parse_literal()
    }

    /// Fields of `name(...)`; the cursor sits on the `(`.
    fn parse_object(&mut self, name: String) -> Value {
        self.cursor.consume(); // (
        self.depth += 1;
        let mut fields = Vec::new();
        loop {
            self.cursor.skip_spaces();
            match self.cursor.peek(0) {
                None => break,
                Some(')') => {
                    self.cursor.consume();
                    break;
                }
                _ => {}
            }

            let start = self.cursor.position();
            let key = self.read_while(|c| c.is_ascii_alphanumeric() || c == '_');
            self.cursor.skip_spaces();
            if self.cursor.peek(0) == Some('=') {
                self.cursor.consume();
                let value = match self.parse_value() {
                    Value::Null => Value::Str(String::new()),
                    value => value,
                };
                fields.push((key, value));
            }
            self.cursor.skip_spaces();
            if self.cursor.peek(0) == Some(',') {
                self.cursor.consume();
            }
            if self.cursor.position() == start {
                // Neither a key character nor a separator, e.g. ']' or '-'.
                self.cursor.consume();
            }
        }
        self.depth -= 1;
        Value::Object { name, fields }
    }

    /// Text up to the next delimiter, trailing whitespace trimmed, then cast.
    fn parse_literal(&mut self) -> Value {
        let raw = self.read_while(|c| !DELIMITERS.contains(&c));
        let trimmed = raw.trim_end();
        if trimmed.is_empty() {
            return Value::Str(String::new());
        }
        cast(trimmed)
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.cursor.peek(0) {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.cursor.consume();
        }
        text
    }
}

//! Parser configuration.

/// Lists and objects that may be open at once before nested constructs are
/// read as bare literals.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of lists and objects. A `[` or `Name(` that would open
    /// one level more is read with the bare-literal rule instead, so deeply
    /// nested input cannot exhaust the stack.
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

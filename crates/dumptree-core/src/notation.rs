//! Writing trees back out in dump notation.
//!
//! Strings are written bare when the bare-literal rule would read them back
//! unchanged, and quoted otherwise. There is no escape syntax, so a string
//! that needs quoting but contains `"` is written bare.

use std::fmt;

use crate::caster::cast;
use crate::types::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write_str(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object { name, fields } => {
                write!(f, "{}(", name)?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn write_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if needs_quotes(s) && !s.contains('"') {
        write!(f, "\"{}\"", s)
    } else {
        f.write_str(s)
    }
}

/// Would reading `s` as a bare literal give back something other than `Str(s)`?
fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.starts_with(['[', '"']) {
        return true;
    }
    if s.trim() != s {
        return true;
    }
    if s.contains([',', ')', ']', '(']) {
        return true;
    }
    !matches!(cast(s), Value::Str(_))
}

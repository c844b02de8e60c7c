//! Scalar typing for bare literals.

use crate::types::Value;

/// Map a raw literal to a typed scalar.
///
/// Rules, first match wins:
///
/// 1. `""` → `Str("")`
/// 2. `null` → `Null`
/// 3. `true` / `false` → `Bool`
/// 4. no `.` and every character an ASCII digit → `Int`
/// 5. anything else → `Str(raw)` unchanged
///
/// The `.` guard comes before the digit test so `3.14` stays text. A digit run
/// too large for `i64` also stays text.
///
/// ```
/// use dumptree_core::{cast, Value};
///
/// assert_eq!(cast("42"), Value::Int(42));
/// assert_eq!(cast("3.14"), Value::Str("3.14".into()));
/// assert_eq!(cast("12a"), Value::Str("12a".into()));
/// ```
pub fn cast(raw: &str) -> Value {
    match raw {
        "" => Value::Str(String::new()),
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ if !raw.contains('.') && raw.bytes().all(|b| b.is_ascii_digit()) => raw
            .parse::<i64>()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Str(raw.to_string())),
        _ => Value::Str(raw.to_string()),
    }
}

//! # dumptree-core
//!
//! Lenient parser for the `toString()` dumps of nested objects that show up in
//! logs, such as `User(id=1, tags=[a, b], created=Tue Jan 06)`. The text is
//! turned into a [`Value`] tree of objects, lists, strings, booleans, integers
//! and null that a viewer can inspect or render as JSON.
//!
//! The parser never fails. Malformed input (unbalanced brackets, missing
//! separators, unterminated quotes) produces a best-effort partial tree.
//!
//! ## Quick start
//!
//! ```rust
//! use dumptree_core::{parse, to_json_string, Value};
//!
//! let value = parse("User(id=1, tags=[a, b], created=Tue Jan 06)");
//! assert_eq!(value.get("created"), Some(&Value::Str("Tue Jan 06".into())));
//!
//! let json = to_json_string(&value).unwrap();
//! assert_eq!(json, r#"{"User":{"id":1,"tags":["a","b"],"created":"Tue Jan 06"}}"#);
//! ```
//!
//! ## Modules
//!
//! - [`grammar`]: the recursive-descent parser and the `parse` entry points
//! - [`cursor`]: lookahead, consumption and mark/reset over the input
//! - [`caster`]: typing of bare literals
//! - [`types`]: the `Value` tree
//! - [`options`]: `ParseOptions` (nesting limit)
//! - [`render`]: JSON output
//! - [`notation`]: `Display` back into dump notation
//! - [`stats`]: node counts and depth of a tree
//! - [`error`]: error type for rendering

pub mod caster;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod notation;
pub mod options;
pub mod render;
pub mod stats;
pub mod types;

pub use caster::cast;
pub use error::DumpError;
pub use grammar::{parse, parse_with_options, Parser};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use render::{parse_to_json, to_json_pretty, to_json_string, to_json_value};
pub use stats::TreeStats;
pub use types::Value;

//! Shape summary of a parsed tree.

use crate::types::Value;

/// Node counts and nesting depth of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub objects: usize,
    pub lists: usize,
    /// Null, bool, int and string nodes.
    pub scalars: usize,
    /// 0 for a scalar; every list or object adds one level.
    pub max_depth: usize,
}

impl TreeStats {
    pub fn of(value: &Value) -> Self {
        let mut stats = TreeStats::default();
        stats.visit(value, 0);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        match value {
            Value::List(items) => {
                self.lists += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object { fields, .. } => {
                self.objects += 1;
                self.max_depth = self.max_depth.max(depth + 1);
                for (_, field) in fields {
                    self.visit(field, depth + 1);
                }
            }
            _ => self.scalars += 1,
        }
    }
}

//! The value tree produced by the parser.

/// A node of a parsed dump. Mirrors JSON types, except that objects carry the
/// class-like name that prefixed their parentheses and use
/// `Vec<(String, Value)>` for fields so insertion order and repeated keys are
/// both kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Raw, unescaped text.
    Str(String),
    List(Vec<Value>),
    /// `Name(k=v, ...)`. Field pairs in the order they appeared.
    Object {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Build an object from a name and field pairs.
    pub fn object<N, I, K>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The name in front of an object's parentheses.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Value::Object { name, .. } => Some(name),
            _ => None,
        }
    }

    /// An object's field pairs, in order.
    pub fn fields(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// First value stored under `key` in an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Every value stored under `key`, in field order. Empty for non-objects.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.fields()
            .unwrap_or(&[])
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Short lowercase name of the variant, for diagnostics and summaries.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object { .. } => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

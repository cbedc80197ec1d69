use indexmap::IndexMap;

/// A json value as used throughout jsq.
///
/// Both the parser output and the evaluator input/output use this type.
/// Strings and numbers keep the exact text they had in the input:
/// escape sequences are stored undecoded and number lexemes are never
/// converted to machine floats, so serializing a parsed document
/// reproduces every token byte for byte.
///
/// # Examples
///
/// ```
/// use jsq::value::Value;
///
/// // Scalar values
/// let null = Value::Null;
/// let flag = Value::Bool(true);
/// let number = Value::number("-10e22");
/// let text = Value::string("hello");
///
/// // Collections
/// let array = Value::Array(vec![Value::number("1"), Value::number("2")]);
/// let object = Value::object_from([("key".to_string(), Value::number("1"))]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Json null
    Null,

    /// Json boolean (true/false)
    Bool(bool),

    /// Number, stored as the literal text from the input.
    ///
    /// Keeping the lexeme means there is no loss of precision for
    /// floats, no size limit on integers, and no conversion between
    /// exponent and plain notation on output.
    Number(String),

    /// String content between the quotes, escape sequences included
    String(String),

    /// Array of values (may be empty)
    Array(Vec<Value>),

    /// Object with string keys, iterated in insertion order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Build a number value from its lexeme.
    pub fn number(lexeme: impl Into<String>) -> Self {
        Value::Number(lexeme.into())
    }

    /// Build a string value from its raw content.
    pub fn string(content: impl Into<String>) -> Self {
        Value::String(content.into())
    }

    /// Build an empty object.
    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Build an object from a sequence of key-value pairs.
    ///
    /// Insertion order is remembered for serialization. If a key occurs
    /// more than once only the first occurrence is kept; later
    /// duplicates are dropped.
    pub fn object_from(pairs: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut members = IndexMap::new();
        for (key, value) in pairs {
            members.entry(key).or_insert(value);
        }
        Value::Object(members)
    }

    /// A human-readable name for the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

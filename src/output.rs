//! Json output serialization for jsq values.
//!
//! Provides both the canonical compact rendering and a pretty-printed
//! format. Output is deterministic: object members are emitted in
//! insertion order, string contents and number lexemes are written back
//! exactly as they were parsed, and the compact form contains no
//! whitespace between tokens.

use crate::value::Value;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            // The lexeme and the string content are stored verbatim,
            // escapes included, so no re-escaping happens here.
            Value::Number(lexeme) => lexeme.clone(),
            Value::String(content) => format!("\"{}\"", content),
            Value::Array(items) => self.print_array(items, indent),
            Value::Object(members) => self.print_object(members, indent),
        }
    }

    fn print_array(&self, items: &[Value], indent: usize) -> String {
        if items.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let lines: Vec<String> = items
                .iter()
                .map(|item| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(item, indent + 1)
                    )
                })
                .collect();
            format!("[\n{}\n{}]", lines.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = items
                .iter()
                .map(|item| self.print_value(item, indent))
                .collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(
        &self,
        members: &indexmap::IndexMap<String, Value>,
        indent: usize,
    ) -> String {
        if members.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let lines: Vec<String> = members
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        key,
                        self.print_value(value, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", lines.join(",\n"), self.indent(indent))
        } else {
            let members: Vec<String> = members
                .iter()
                .map(|(key, value)| format!("\"{}\":{}", key, self.print_value(value, indent)))
                .collect();
            format!("{{{}}}", members.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Converts a value to its canonical compact json representation.
///
/// No whitespace between tokens, no trailing newline, members in
/// insertion order. Parsing a document and printing it with this
/// function reproduces the input up to whitespace and dropped duplicate
/// object keys.
///
/// # Examples
///
/// ```
/// use jsq::value::Value;
/// use jsq::output::to_json;
///
/// let value = Value::object_from([
///     ("name".to_string(), Value::string("Alice")),
///     ("age".to_string(), Value::number("30")),
/// ]);
///
/// assert_eq!(to_json(&value), r#"{"name":"Alice","age":30}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a value to pretty-printed json with 2-space indentation.
///
/// # Examples
///
/// ```
/// use jsq::value::Value;
/// use jsq::output::to_json_pretty;
///
/// let value = Value::Array(vec![Value::number("1"), Value::number("2")]);
///
/// assert_eq!(to_json_pretty(&value), "[\n  1,\n  2\n]");
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}

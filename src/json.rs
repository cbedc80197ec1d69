//! Json parsing into the [`Value`](crate::value::Value) document model.
//!
//! The grammar is RFC 8259 with two deliberate restrictions: number
//! lexemes are kept verbatim instead of being converted, and escape
//! sequences in strings are preserved undecoded. Both exist so that a
//! parsed document serializes back byte-identical.

use crate::error::SyntaxError;
use crate::value::Value;

/// Nesting depth at which parsing gives up instead of recursing further.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Parses a complete json document.
///
/// The whole input must be consumed; anything but whitespace after the
/// root value is an error.
///
/// # Examples
///
/// ```
/// use jsq::json::parse_json;
/// use jsq::output::to_json;
///
/// let json = parse_json(r#" { "key": [1, 2.5e3] } "#).unwrap();
/// assert_eq!(to_json(&json), r#"{"key":[1,2.5e3]}"#);
/// ```
pub fn parse_json(input: &str) -> Result<Value, SyntaxError> {
    JsonParser::new(input).parse()
}

pub struct JsonParser {
    input: Vec<char>,
    position: usize,
    max_depth: usize,
}

impl JsonParser {
    pub fn new(input: &str) -> Self {
        JsonParser::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// A parser that rejects values nested more than `max_depth` levels
    /// deep. The depth guard keeps pathological inputs from exhausting
    /// the stack.
    pub fn with_max_depth(input: &str, max_depth: usize) -> Self {
        JsonParser {
            input: input.chars().collect(),
            position: 0,
            max_depth,
        }
    }

    pub fn parse(mut self) -> Result<Value, SyntaxError> {
        self.skip_whitespace();
        if self.current_char().is_none() {
            return Err(self.error("a json value"));
        }
        let value = self.parse_value(0)?;
        self.skip_whitespace();
        if self.current_char().is_some() {
            return Err(self.error("end of input"));
        }
        Ok(value)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        // rfc 8259: only space, tab, cr and lf count as whitespace
        while let Some(' ' | '\t' | '\r' | '\n') = self.current_char() {
            self.advance();
        }
    }

    fn error(&self, expected: &str) -> SyntaxError {
        SyntaxError::at(&self.input, self.position, expected)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, SyntaxError> {
        if depth >= self.max_depth {
            return Err(self.error(&format!(
                "json nested at most {} levels deep",
                self.max_depth
            )));
        }

        self.skip_whitespace();
        match self.current_char() {
            Some('{') => self.parse_object(depth),
            Some('[') => self.parse_array(depth),
            Some('"') => self.parse_string().map(Value::String),
            Some('t' | 'f' | 'n') => self.parse_literal(),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            _ => Err(self.error("a json value")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, SyntaxError> {
        self.advance(); // {
        self.skip_whitespace();

        let mut members = Vec::new();
        if self.current_char() == Some('}') {
            self.advance();
            return Ok(Value::object_from(members));
        }

        loop {
            self.skip_whitespace();
            if self.current_char() != Some('"') {
                return Err(self.error("'\"' to start an object key"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.current_char() != Some(':') {
                return Err(self.error("':' after the object key"));
            }
            self.advance();

            let value = self.parse_value(depth + 1)?;
            members.push((key, value));

            self.skip_whitespace();
            match self.current_char() {
                Some(',') => self.advance(),
                Some('}') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.error("',' or '}'")),
            }
        }

        // duplicate keys after the first are dropped here
        Ok(Value::object_from(members))
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, SyntaxError> {
        self.advance(); // [
        self.skip_whitespace();

        let mut items = Vec::new();
        if self.current_char() == Some(']') {
            self.advance();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value(depth + 1)?);

            self.skip_whitespace();
            match self.current_char() {
                Some(',') => self.advance(),
                Some(']') => {
                    self.advance();
                    break;
                }
                _ => return Err(self.error("',' or ']'")),
            }
        }

        Ok(Value::Array(items))
    }

    /// Reads a quoted string and returns its raw content.
    ///
    /// Escape sequences are validated but stored as-is, backslash
    /// included.
    fn parse_string(&mut self) -> Result<String, SyntaxError> {
        self.advance(); // opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                None => return Err(self.error("'\"' to close the string")),
                Some('"') => {
                    self.advance();
                    return Ok(content);
                }
                Some('\\') => {
                    content.push('\\');
                    self.advance();
                    match self.current_char() {
                        Some(ch @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                            content.push(ch);
                            self.advance();
                        }
                        Some('u') => {
                            content.push('u');
                            self.advance();
                            let mut digits = 0;
                            while digits < 4 {
                                match self.current_char() {
                                    Some(hex) if hex.is_ascii_hexdigit() => {
                                        content.push(hex);
                                        self.advance();
                                        digits += 1;
                                    }
                                    _ => break,
                                }
                            }
                            if digits == 0 {
                                return Err(self.error("a hex digit after '\\u'"));
                            }
                        }
                        _ => return Err(self.error("a valid escape character")),
                    }
                }
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(self.error("control characters in strings to be escaped"))
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Reads a number as one contiguous lexeme.
    fn parse_number(&mut self) -> Result<Value, SyntaxError> {
        let mut lexeme = String::new();

        if self.current_char() == Some('-') {
            lexeme.push('-');
            self.advance();
        }

        // integer part: a single 0, or a nonzero digit followed by digits
        match self.current_char() {
            Some('0') => {
                lexeme.push('0');
                self.advance();
            }
            Some(ch) if ch.is_ascii_digit() => {
                while let Some(digit) = self.current_char() {
                    if !digit.is_ascii_digit() {
                        break;
                    }
                    lexeme.push(digit);
                    self.advance();
                }
            }
            _ => return Err(self.error("a digit")),
        }

        if self.current_char() == Some('.') {
            lexeme.push('.');
            self.advance();
            if !self.current_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.error("a digit after '.'"));
            }
            while let Some(digit) = self.current_char() {
                if !digit.is_ascii_digit() {
                    break;
                }
                lexeme.push(digit);
                self.advance();
            }
        }

        if let Some(exp @ ('e' | 'E')) = self.current_char() {
            lexeme.push(exp);
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current_char() {
                lexeme.push(sign);
                self.advance();
            }
            if !self.current_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.error("a digit in the exponent"));
            }
            while let Some(digit) = self.current_char() {
                if !digit.is_ascii_digit() {
                    break;
                }
                lexeme.push(digit);
                self.advance();
            }
        }

        Ok(Value::Number(lexeme))
    }

    fn parse_literal(&mut self) -> Result<Value, SyntaxError> {
        let (keyword, value) = match self.current_char() {
            Some('t') => ("true", Value::Bool(true)),
            Some('f') => ("false", Value::Bool(false)),
            _ => ("null", Value::Null),
        };

        for expected in keyword.chars() {
            if self.current_char() != Some(expected) {
                return Err(self.error(&format!("the literal '{}'", keyword)));
            }
            self.advance();
        }

        Ok(value)
    }
}

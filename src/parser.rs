use crate::ast::{Chain, Program, Selector, Token};
use crate::error::{ParseFailure, SyntaxError};
use crate::lexer::Lexer;
use std::mem;
use thiserror::Error;

/// Errors that can occur while parsing a selector program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input violates the selector grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A prefix of the input parsed but the rest of it did not.
    #[error(transparent)]
    Failure(#[from] ParseFailure),
}

/// Parses a selector program.
///
/// # Examples
///
/// ```
/// use jsq::parser::parse_selectors;
///
/// let program = parse_selectors(r#""key1"."key2", [0:2]"#).unwrap();
/// assert_eq!(program.chains().len(), 2);
/// ```
pub fn parse_selectors(input: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(input))?.parse_program()
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn error(&self, expected: &str) -> ParseError {
        self.lexer.error_at_token(expected).into()
    }

    /// Parses a complete program: one or more comma-separated chains.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut chains = vec![self.parse_chain()?];

        loop {
            match &self.current_token {
                Token::Comma => {
                    self.advance()?;
                    chains.push(self.parse_chain()?);
                }
                Token::Eof => break,
                token => {
                    return Err(ParseFailure {
                        reason: format!("input left over after the selectors: {:?}", token),
                    }
                    .into())
                }
            }
        }

        Ok(Program::new(chains))
    }

    fn parse_chain(&mut self) -> Result<Chain, ParseError> {
        let mut selectors = Vec::new();

        // a dot in chain-initial position is the any selector; `..` was
        // already claimed by the lexer
        if self.check(&Token::Dot) {
            self.advance()?;
            selectors.push(Selector::Any);
        } else {
            selectors.push(self.parse_selector()?);
        }

        loop {
            // truncate closes its chain
            if matches!(selectors.last(), Some(Selector::Truncate))
                && !matches!(self.current_token, Token::Comma | Token::Eof)
            {
                return Err(self.error("',' or end of input after '!'"));
            }

            match self.current_token {
                // the separating dot between steps is optional
                Token::Dot => {
                    self.advance()?;
                    selectors.push(self.parse_selector()?);
                }
                Token::String(_)
                | Token::LBracket
                | Token::LBrace
                | Token::Pipe
                | Token::Exclamation
                | Token::DotDot => {
                    selectors.push(self.parse_selector()?);
                }
                _ => break,
            }
        }

        Ok(Chain::new(selectors))
    }

    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(key) => {
                self.advance()?;
                Ok(Selector::Key(key))
            }
            Token::DotDot => {
                self.advance()?;
                Ok(Selector::Flatten)
            }
            Token::Exclamation => {
                self.advance()?;
                Ok(Selector::Truncate)
            }
            Token::Pipe => {
                self.advance()?;
                match mem::replace(&mut self.current_token, Token::Eof) {
                    Token::String(key) => {
                        self.advance()?;
                        Ok(Selector::Filter(key))
                    }
                    _ => Err(self.error("a key after '|'")),
                }
            }
            Token::LBracket => {
                self.advance()?;
                self.parse_bracket()
            }
            Token::LBrace => {
                self.advance()?;
                self.parse_property()
            }
            _ => Err(self.error("a selector")),
        }
    }

    /// Parses the content between `[` and `]`.
    ///
    /// An integer without a colon is an index; every other combination
    /// of optional integers around an optional colon is a range, with
    /// `[]` selecting everything.
    fn parse_bracket(&mut self) -> Result<Selector, ParseError> {
        let start = self.parse_optional_integer()?;

        let has_colon = self.check(&Token::Colon);
        if has_colon {
            self.advance()?;
        }
        let end = if has_colon {
            self.parse_optional_integer()?
        } else {
            None
        };

        if !self.check(&Token::RBracket) {
            let expected = if has_colon || start.is_none() {
                "']'"
            } else {
                "':' or ']'"
            };
            return Err(self.error(expected));
        }
        self.advance()?;

        match (start, has_colon) {
            (Some(index), false) => Ok(Selector::Index(index)),
            (start, _) => Ok(Selector::Range { start, end }),
        }
    }

    fn parse_optional_integer(&mut self) -> Result<Option<i64>, ParseError> {
        if let Token::Integer(n) = self.current_token {
            self.advance()?;
            Ok(Some(n))
        } else {
            Ok(None)
        }
    }

    fn parse_property(&mut self) -> Result<Selector, ParseError> {
        let mut keys = vec![self.parse_property_key()?];

        loop {
            match self.current_token {
                Token::Comma => {
                    self.advance()?;
                    keys.push(self.parse_property_key()?);
                }
                Token::RBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.error("',' or '}'")),
            }
        }

        Ok(Selector::Property(keys))
    }

    fn parse_property_key(&mut self) -> Result<String, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(key) => {
                self.advance()?;
                Ok(key)
            }
            _ => Err(self.error("a key")),
        }
    }
}

//! Path Expression Parser
//!
//! Left-to-right parser turning a token stream into location steps.

use super::lexer::{Lexer, Token};
use crate::error::PathError;

/// Axes supported by the subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Child,
    DescendantOrSelf,
    Attribute,
    SelfAxis,
}

impl Axis {
    /// Resolve an explicit axis keyword
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "child" => Some(Axis::Child),
            "descendant-or-self" => Some(Axis::DescendantOrSelf),
            "attribute" => Some(Axis::Attribute),
            "self" => Some(Axis::SelfAxis),
            _ => None,
        }
    }
}

/// Name test in a location step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTest {
    /// Matches any principal-kind node (*)
    Wildcard,
    /// Matches nodes with this exact name
    Name(String),
}

/// One parsed unit of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NameTest,
    /// 1-based positional filter, applied per parent context
    pub index: Option<usize>,
}

impl Step {
    fn new(axis: Axis, test: NameTest, index: Option<usize>) -> Self {
        Step { axis, test, index }
    }

    /// The implicit descendant walk emitted in front of steps that name
    /// their own axis after a `//` separator
    fn descend_all() -> Self {
        Step::new(Axis::DescendantOrSelf, NameTest::Wildcard, None)
    }
}

/// Path expression parser
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Advance to next token
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Parse the expression into location steps
    pub fn parse(&mut self) -> Result<Vec<Step>, PathError> {
        if matches!(self.current, Token::Eof) {
            return Err(PathError::Syntax("empty expression".to_string()));
        }

        // A leading separator is optional; absolute and relative paths
        // alike evaluate from the caller's context node
        let mut axis = match self.current {
            Token::Slash => {
                self.advance();
                Axis::Child
            }
            Token::DoubleSlash => {
                self.advance();
                Axis::DescendantOrSelf
            }
            _ => Axis::Child,
        };

        let mut steps = Vec::new();
        loop {
            if matches!(self.current, Token::Eof) {
                return Err(PathError::Syntax("empty step".to_string()));
            }
            self.parse_step(axis, &mut steps)?;

            match self.current {
                Token::Eof => break,
                Token::Slash => {
                    self.advance();
                    axis = Axis::Child;
                }
                Token::DoubleSlash => {
                    self.advance();
                    axis = Axis::DescendantOrSelf;
                }
                ref token => {
                    return Err(PathError::Syntax(format!("unexpected token: {:?}", token)));
                }
            }
        }

        Ok(steps)
    }

    /// Parse one location step; `axis` is the default carried by the
    /// preceding separator
    fn parse_step(&mut self, axis: Axis, steps: &mut Vec<Step>) -> Result<(), PathError> {
        // `//` followed by a form that names its own axis: emit the
        // descendant walk as its own step, so `//@id` still reads the
        // attributes of every descendant element
        let descend = axis == Axis::DescendantOrSelf;
        let mut axis = axis;

        match self.current {
            Token::At => {
                self.advance();
                if descend {
                    steps.push(Step::descend_all());
                }
                axis = Axis::Attribute;
            }
            Token::Axis(ref keyword) => {
                let keyword = keyword.clone();
                let explicit = Axis::from_keyword(&keyword).ok_or_else(|| {
                    PathError::Syntax(format!("unsupported axis: {}", keyword))
                })?;
                self.advance();
                if !matches!(self.current, Token::DoubleColon) {
                    return Err(PathError::Syntax("expected :: after axis".to_string()));
                }
                self.advance();
                if descend && explicit != Axis::DescendantOrSelf {
                    steps.push(Step::descend_all());
                }
                axis = explicit;
            }
            Token::Dot => {
                self.advance();
                if descend {
                    steps.push(Step::descend_all());
                }
                let index = self.parse_predicate()?;
                steps.push(Step::new(Axis::SelfAxis, NameTest::Wildcard, index));
                return Ok(());
            }
            _ => {}
        }

        let test = match self.current {
            Token::Star => {
                self.advance();
                NameTest::Wildcard
            }
            Token::Name(ref name) => {
                let name = name.clone();
                self.advance();
                NameTest::Name(name)
            }
            ref token => {
                return Err(PathError::Syntax(format!(
                    "expected name test, got {:?}",
                    token
                )));
            }
        };

        let index = self.parse_predicate()?;
        steps.push(Step::new(axis, test, index));
        Ok(())
    }

    /// Parse an optional positional predicate `[N]`
    fn parse_predicate(&mut self) -> Result<Option<usize>, PathError> {
        if !matches!(self.current, Token::LeftBracket) {
            return Ok(None);
        }
        self.advance();

        let index = match self.current {
            Token::Digits(ref digits) => {
                let parsed = digits.parse::<usize>().map_err(|_| {
                    PathError::Evaluation(format!(
                        "positional predicate out of range: {}",
                        digits
                    ))
                })?;
                self.advance();
                parsed
            }
            Token::RightBracket => {
                return Err(PathError::Syntax("empty predicate".to_string()));
            }
            ref token => {
                return Err(PathError::Evaluation(format!(
                    "positional predicate must be an integer, got {:?}",
                    token
                )));
            }
        };

        if !matches!(self.current, Token::RightBracket) {
            return Err(PathError::Syntax("expected ]".to_string()));
        }
        self.advance();
        Ok(Some(index))
    }
}

/// Parse a path expression string into location steps
pub fn parse(input: &str) -> Result<Vec<Step>, PathError> {
    Parser::new(input).parse()
}

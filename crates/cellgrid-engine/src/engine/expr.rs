//! Arithmetic expression evaluator.
//!
//! A recursive descent parser over the substituted formula text. It evaluates
//! while parsing, so there is no intermediate AST.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```

use super::error::FormulaError;

/// Parentheses and unary signs nested deeper than this are rejected.
const MAX_DEPTH: usize = 256;

/// Evaluate a plain arithmetic expression such as `3 + 2 * (1 - 4)`.
///
/// Every intermediate result must be finite; `4/0` is an error, not infinity.
pub fn evaluate_expression(input: &str) -> Result<f64, FormulaError> {
    let mut parser = ExprParser::new(input)?;
    let value = parser.parse_expr()?;
    if parser.current != Token::Eof {
        return Err(FormulaError::Malformed(format!(
            "unexpected {} at offset {}",
            parser.current.describe(),
            parser.token_start
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::LeftParen => "'('".to_string(),
            Token::RightParen => "')'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
    token_start: usize,
    current: Token,
    depth: usize,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> Result<Self, FormulaError> {
        let mut parser = Self {
            input,
            pos: 0,
            token_start: 0,
            current: Token::Eof,
            depth: 0,
        };
        parser.advance()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance(&mut self) -> Result<(), FormulaError> {
        self.skip_whitespace();
        self.token_start = self.pos;
        self.current = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> Result<Token, FormulaError> {
        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.pos += 1;
            return Ok(token);
        }

        if c.is_ascii_digit() || c == '.' {
            return self.scan_number();
        }

        Err(FormulaError::Malformed(format!(
            "unexpected character '{}' at offset {}",
            c, self.pos
        )))
    }

    fn scan_number(&mut self) -> Result<Token, FormulaError> {
        let start = self.pos;
        self.skip_digits();
        if self.peek_char() == Some('.') {
            self.pos += 1;
            self.skip_digits();
        }

        let text = &self.input[start..self.pos];
        let n = text
            .parse::<f64>()
            .map_err(|_| FormulaError::Malformed(format!("invalid number '{}'", text)))?;
        finite(n).map(Token::Number)
    }

    fn skip_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    // === Expression parsing with precedence ===

    fn parse_expr(&mut self) -> Result<f64, FormulaError> {
        let mut left = self.parse_term()?;
        loop {
            let op = self.current;
            if !matches!(op, Token::Plus | Token::Minus) {
                break;
            }
            self.advance()?;
            let right = self.parse_term()?;
            left = finite(if op == Token::Plus {
                left + right
            } else {
                left - right
            })?;
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<f64, FormulaError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = self.current;
            if !matches!(op, Token::Star | Token::Slash) {
                break;
            }
            self.advance()?;
            let right = self.parse_unary()?;
            left = finite(if op == Token::Star {
                left * right
            } else {
                left / right
            })?;
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<f64, FormulaError> {
        match self.current {
            Token::Minus => {
                self.advance()?;
                let operand = self.nested(Self::parse_unary)?;
                Ok(-operand)
            }
            Token::Plus => {
                self.advance()?;
                self.nested(Self::parse_unary)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<f64, FormulaError> {
        match self.current {
            Token::Number(n) => {
                self.advance()?;
                Ok(n)
            }
            Token::LeftParen => {
                self.advance()?;
                let value = self.nested(Self::parse_expr)?;
                if self.current != Token::RightParen {
                    return Err(FormulaError::Malformed(format!(
                        "expected ')' but found {}",
                        self.current.describe()
                    )));
                }
                self.advance()?;
                Ok(value)
            }
            other => Err(FormulaError::Malformed(format!(
                "expected a number or '(' but found {}",
                other.describe()
            ))),
        }
    }

    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<f64, FormulaError>,
    ) -> Result<f64, FormulaError> {
        if self.depth >= MAX_DEPTH {
            return Err(FormulaError::Malformed("expression nested too deeply".into()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

fn finite(value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFinite)
    }
}

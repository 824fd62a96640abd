//! Lexer (tokenizer) for the Python-like source language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Spaces and tabs are skipped, but every line break produces a
//! [`Token::Newline`] because line breaks separate statements.

use super::ast::SourceLocation;
use std::fmt;

/// Operator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // `/` or `//`
    EqEq,   // ==
    NotEq,  // !=
    Gt,     // >
    Lt,     // <
    Ge,     // >=
    Le,     // <=
    Assign, // =
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Assign => "=",
        }
    }
}

/// Punctuation tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    Semicolon,
    Colon,
    Comma,
}

impl Punct {
    pub fn symbol(self) -> &'static str {
        match self {
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::Semicolon => ";",
            Punct::Colon => ":",
            Punct::Comma => ",",
        }
    }
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    Else,
    Return,
    Def,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
            Keyword::Def => "def",
        }
    }

    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "return" => Some(Keyword::Return),
            "def" => Some(Keyword::Def),
            _ => None,
        }
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    IntLiteral(u64),
    Ident(String),
    Operator(Operator),
    Punct(Punct),
    Keyword(Keyword),
    Newline,
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        Token::IntLiteral(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl From<Punct> for Token {
    fn from(punct: Punct) -> Self {
        Token::Punct(punct)
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Token::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n) => write!(f, "int literal {}", n),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Operator(op) => write!(f, "'{}'", op.symbol()),
            Token::Punct(p) => write!(f, "'{}'", p.symbol()),
            Token::Keyword(k) => write!(f, "'{}'", k.as_str()),
            Token::Newline => write!(f, "newline"),
        }
    }
}

/// Raised when the source contains text that does not start any token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedTokenError {
    pub lexeme: String,
    pub location: SourceLocation,
}

impl fmt::Display for UnrecognizedTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized token '{}' at line {}, column {}",
            self.lexeme.escape_debug(),
            self.location.line,
            self.location.column
        )
    }
}

impl std::error::Error for UnrecognizedTokenError {}

/// Tokenize a whole source string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, UnrecognizedTokenError> {
    let tokens = Lexer::new(source).tokenize()?;
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Tokenize and keep the line indentation for the parser's layout checks.
pub fn tokenize_with_layout(source: &str) -> Result<(Vec<Token>, Layout), UnrecognizedTokenError> {
    let (tokens, layout) = Lexer::new(source).tokenize_with_layout()?;
    log::debug!("lexed {} tokens over {} lines", tokens.len(), layout.line_indents.len());
    Ok((tokens, layout))
}

/// Leading blanks of each source line
///
/// `line_indents[k]` is the indentation of the line that follows the
/// `k`-th [`Token::Newline`] (index 0 is the first line). Tabs and spaces
/// each count as one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub line_indents: Vec<usize>,
}

impl Layout {
    pub fn indent(&self, line: usize) -> usize {
        self.line_indents.get(line).copied().unwrap_or(0)
    }
}

/// Single-pass lexer over a character buffer
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, UnrecognizedTokenError> {
        let (tokens, _) = self.tokenize_with_layout()?;
        Ok(tokens)
    }

    /// Tokenize the entire input, also recording the indentation of every line
    pub fn tokenize_with_layout(&mut self) -> Result<(Vec<Token>, Layout), UnrecognizedTokenError> {
        let mut tokens = Vec::new();
        let mut layout = Layout::default();
        let mut at_line_start = true;

        loop {
            let skipped = self.skip_whitespace();

            if at_line_start {
                layout.line_indents.push(skipped);
                at_line_start = false;
            }

            if self.is_at_end() {
                break;
            }

            let token = self.next_token()?;
            at_line_start = token == Token::Newline;
            tokens.push(token);
        }

        Ok((tokens, layout))
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, UnrecognizedTokenError> {
        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => {
                return Err(UnrecognizedTokenError {
                    lexeme: String::new(),
                    location: loc,
                })
            }
        };

        let token = match ch {
            '\n' => Token::Newline,

            '0'..='9' => return self.number_literal(ch, loc),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            '+' => Operator::Plus.into(),
            '-' => Operator::Minus.into(),
            '*' => Operator::Star.into(),
            '/' => {
                // `//` and `/` both lex to Slash
                if self.peek() == Some('/') {
                    self.advance();
                }
                Operator::Slash.into()
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Operator::EqEq.into()
                } else {
                    Operator::Assign.into()
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Operator::NotEq.into()
                } else {
                    return Err(UnrecognizedTokenError {
                        lexeme: ch.to_string(),
                        location: loc,
                    });
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Operator::Ge.into()
                } else {
                    Operator::Gt.into()
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Operator::Le.into()
                } else {
                    Operator::Lt.into()
                }
            }

            '(' => Punct::LParen.into(),
            ')' => Punct::RParen.into(),
            ';' => Punct::Semicolon.into(),
            ':' => Punct::Colon.into(),
            ',' => Punct::Comma.into(),

            _ => {
                return Err(UnrecognizedTokenError {
                    lexeme: ch.to_string(),
                    location: loc,
                })
            }
        };

        Ok(token)
    }

    /// Parse numeric literal (decimal, non-negative)
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Token, UnrecognizedTokenError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match num_str.parse::<u64>() {
            Ok(value) => Ok(Token::IntLiteral(value)),
            Err(_) => Err(UnrecognizedTokenError {
                lexeme: num_str,
                location: loc,
            }),
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match Keyword::from_ident(&ident) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Ident(ident),
        }
    }

    /// Skip blanks but stop at line breaks. Returns the number skipped.
    fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(' ') | Some('\t') | Some('\r') = self.peek() {
            self.advance();
            skipped += 1;
        }
        skipped
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_integer() {
        assert_eq!(tokenize("1").unwrap(), vec![Token::IntLiteral(1)]);
        assert_eq!(tokenize("42").unwrap(), vec![Token::IntLiteral(42)]);
    }

    #[test]
    fn test_two_integers() {
        assert_eq!(
            tokenize("42 12").unwrap(),
            vec![Token::IntLiteral(42), Token::IntLiteral(12)]
        );
    }

    #[test]
    fn test_newline_is_a_token() {
        let tokens = tokenize("1\n 2").unwrap();
        assert_eq!(
            tokens,
            vec![Token::IntLiteral(1), Token::Newline, Token::IntLiteral(2)]
        );
    }

    #[test]
    fn test_layout_records_indentation() {
        let (tokens, layout) = tokenize_with_layout("def f(a):\n    return a\n\nx").unwrap();
        assert_eq!(tokens, tokenize("def f(a):\n    return a\n\nx").unwrap());
        assert_eq!(layout.line_indents, vec![0, 4, 0, 0]);
        assert_eq!(layout.indent(1), 4);
        assert_eq!(layout.indent(9), 0);
    }

    #[test]
    fn test_operators() {
        let tokens = tokenize("+ - * / // == != > < >= <= =").unwrap();
        let expected: Vec<Token> = vec![
            Operator::Plus.into(),
            Operator::Minus.into(),
            Operator::Star.into(),
            Operator::Slash.into(),
            Operator::Slash.into(),
            Operator::EqEq.into(),
            Operator::NotEq.into(),
            Operator::Gt.into(),
            Operator::Lt.into(),
            Operator::Ge.into(),
            Operator::Le.into(),
            Operator::Assign.into(),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_greedy_without_spaces() {
        let tokens = tokenize("a>=1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("a".to_string()),
                Operator::Ge.into(),
                Token::IntLiteral(1),
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("def f(a_1, b): return iffy").unwrap();

        assert!(matches!(tokens[0], Token::Keyword(Keyword::Def)));
        assert!(matches!(tokens[1], Token::Ident(ref s) if s == "f"));
        assert!(matches!(tokens[2], Token::Punct(Punct::LParen)));
        assert!(matches!(tokens[3], Token::Ident(ref s) if s == "a_1"));
        assert!(matches!(tokens[4], Token::Punct(Punct::Comma)));
        assert!(matches!(tokens[5], Token::Ident(ref s) if s == "b"));
        assert!(matches!(tokens[6], Token::Punct(Punct::RParen)));
        assert!(matches!(tokens[7], Token::Punct(Punct::Colon)));
        assert!(matches!(tokens[8], Token::Keyword(Keyword::Return)));
        assert!(matches!(tokens[9], Token::Ident(ref s) if s == "iffy"));
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_unrecognized_character() {
        let err = tokenize("1 ? 2").unwrap_err();
        assert_eq!(err.lexeme, "?");
        assert_eq!(err.location, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_error_location_tracks_lines() {
        let err = tokenize("x = 1\ny = $").unwrap_err();
        assert_eq!(err.lexeme, "$");
        assert_eq!(err.location, SourceLocation::new(2, 5));
    }

    #[test]
    fn test_lone_bang_is_rejected() {
        assert!(tokenize("!1").is_err());
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        let err = tokenize("99999999999999999999999").unwrap_err();
        assert_eq!(err.lexeme, "99999999999999999999999");
    }
}

//! The tokens of the clause grammar, and a tokeniser over a clause string.

use crate::types::err::ParseError;

/// A token of the clause grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A name --- letters, digits, and underscores, beginning with a letter.
    Name(String),

    /// `(`
    Open,

    /// `)`
    Close,

    /// `,`
    Comma,

    /// `~`
    Tilde,
}

impl Token {
    /// The character form of a punctuation token, for error reports.
    pub fn as_char(&self) -> char {
        match self {
            Token::Name(name) => name.chars().next().unwrap_or('?'),
            Token::Open => '(',
            Token::Close => ')',
            Token::Comma => ',',
            Token::Tilde => '~',
        }
    }
}

/// The tokens of a clause string, read eagerly so a lexical error precedes any grammar error.
pub struct Tokens {
    tokens: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
}

impl Tokens {
    pub fn new(string: &str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        let mut chars = string.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '(' => {
                    chars.next();
                    tokens.push(Token::Open);
                }
                ')' => {
                    chars.next();
                    tokens.push(Token::Close);
                }
                ',' => {
                    chars.next();
                    tokens.push(Token::Comma);
                }
                '~' => {
                    chars.next();
                    tokens.push(Token::Tilde);
                }

                c if c.is_whitespace() => {
                    chars.next();
                }

                c if c.is_alphabetic() => {
                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_alphanumeric() || c == '_' {
                            name.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    tokens.push(Token::Name(name));
                }

                unexpected => return Err(ParseError::UnexpectedCharacter(unexpected)),
            }
        }

        if tokens.is_empty() {
            return Err(ParseError::UnexpectedEnd);
        }

        Ok(Tokens {
            tokens: tokens.into_iter(),
            peeked: None,
        })
    }

    /// The next token, without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref()
    }

    /// The next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        match self.peeked.take() {
            Some(token) => Some(token),
            None => self.tokens.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_take_digits_and_underscores() {
        let mut tokens = Tokens::new("is_tall2(x)").unwrap();
        assert_eq!(tokens.next(), Some(Token::Name("is_tall2".to_owned())));
        assert_eq!(tokens.next(), Some(Token::Open));
    }

    #[test]
    fn names_cannot_begin_with_a_digit() {
        assert!(matches!(
            Tokens::new("2p(x)"),
            Err(ParseError::UnexpectedCharacter('2'))
        ));
    }

    #[test]
    fn an_empty_string_is_an_error() {
        assert!(matches!(Tokens::new("   "), Err(ParseError::UnexpectedEnd)));
    }
}

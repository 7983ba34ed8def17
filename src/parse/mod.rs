/*!
Parsing of clause strings.

A clause string is a comma-separated list of literals, where commas inside parentheses instead separate the arguments of the enclosing predicate or function:

```text
~p(z,f(B)),q(z)
```

The grammar, informally:
- A literal is an optional `~`, a name with a lower-case initial, and a parenthesised non-empty argument list.
- An argument is a name, made a function by a following parenthesised non-empty argument list; a bare name is a variable or a constant by the case of its initial.
- Names are letters, digits, and underscores, beginning with a letter.

Whitespace between tokens is ignored.
Parsing aborts on the first violation with a [ParseError](crate::types::err::ParseError) identifying the problem.

```rust
# use resolute::parse::parse_clause;
# use resolute::types::err::ParseError;
assert!(parse_clause("~p(z,f(B)),q(z)").is_ok());
assert_eq!(parse_clause("p()"), Err(ParseError::EmptyArgumentList));
```
*/

mod tokens;

use tokens::{Token, Tokens};

use crate::{
    structures::{
        clause::Clause,
        literal::Literal,
        term::{NameKind, Term},
    },
    types::err::ParseError,
};

/// Parses a clause string into a [Clause] in canonical form.
pub fn parse_clause(string: &str) -> Result<Clause, ParseError> {
    let mut tokens = Tokens::new(string)?;

    let mut literals = vec![parse_literal_at(&mut tokens)?];
    while let Some(Token::Comma) = tokens.peek() {
        tokens.next();
        literals.push(parse_literal_at(&mut tokens)?);
    }

    match tokens.peek() {
        None => {
            log::trace!(target: crate::misc::log::targets::PARSER, "Parsed {string:?} as a clause of {} literals", literals.len());
            Ok(Clause::from_literals(literals))
        }
        Some(Token::Close) => Err(ParseError::UnbalancedParentheses),
        Some(_) => Err(ParseError::TrailingInput),
    }
}

/// Parses a single literal, requiring the whole string to be consumed.
pub fn parse_literal(string: &str) -> Result<Literal, ParseError> {
    let mut tokens = Tokens::new(string)?;
    let literal = parse_literal_at(&mut tokens)?;

    match tokens.peek() {
        None => Ok(literal),
        Some(Token::Close) => Err(ParseError::UnbalancedParentheses),
        Some(_) => Err(ParseError::TrailingInput),
    }
}

/// Parses a single term, requiring the whole string to be consumed.
pub fn parse_term(string: &str) -> Result<Term, ParseError> {
    let mut tokens = Tokens::new(string)?;
    let term = parse_term_at(&mut tokens)?;

    match tokens.peek() {
        None => Ok(term),
        Some(Token::Close) => Err(ParseError::UnbalancedParentheses),
        Some(_) => Err(ParseError::TrailingInput),
    }
}

fn parse_literal_at(tokens: &mut Tokens) -> Result<Literal, ParseError> {
    let negated = match tokens.peek() {
        Some(Token::Tilde) => {
            tokens.next();
            true
        }
        _ => false,
    };

    let name = match tokens.next() {
        Some(Token::Name(name)) => name,
        Some(Token::Close) => return Err(ParseError::UnbalancedParentheses),
        Some(token) => return Err(ParseError::UnexpectedCharacter(token.as_char())),
        None => return Err(ParseError::UnexpectedEnd),
    };

    if NameKind::of(&name) == NameKind::Upper {
        return Err(ParseError::WrongLeadingCase(name));
    }

    let terms = parse_argument_list(tokens)?;

    Ok(Literal::new(name, negated, terms))
}

fn parse_term_at(tokens: &mut Tokens) -> Result<Term, ParseError> {
    let name = match tokens.next() {
        Some(Token::Name(name)) => name,
        Some(Token::Tilde) => return Err(ParseError::PredicateAsArgument),
        Some(Token::Close) => return Err(ParseError::UnbalancedParentheses),
        Some(token) => return Err(ParseError::UnexpectedCharacter(token.as_char())),
        None => return Err(ParseError::UnexpectedEnd),
    };

    match tokens.peek() {
        Some(Token::Open) => {
            if NameKind::of(&name) == NameKind::Upper {
                return Err(ParseError::WrongLeadingCase(name));
            }
            let args = parse_argument_list(tokens)?;
            Ok(Term::Function(name, args))
        }

        _ => Ok(Term::from_name(name)),
    }
}

/// Parses `( term , … , term )` with at least one term.
fn parse_argument_list(tokens: &mut Tokens) -> Result<Vec<Term>, ParseError> {
    match tokens.next() {
        Some(Token::Open) => {}
        Some(Token::Close) => return Err(ParseError::UnbalancedParentheses),
        Some(token) => return Err(ParseError::UnexpectedCharacter(token.as_char())),
        None => return Err(ParseError::UnexpectedEnd),
    }

    if let Some(Token::Close) = tokens.peek() {
        return Err(ParseError::EmptyArgumentList);
    }

    let mut terms = vec![parse_term_at(tokens)?];
    loop {
        match tokens.next() {
            Some(Token::Comma) => terms.push(parse_term_at(tokens)?),
            Some(Token::Close) => return Ok(terms),
            Some(Token::Tilde) => return Err(ParseError::PredicateAsArgument),
            Some(token) => return Err(ParseError::UnexpectedCharacter(token.as_char())),
            None => return Err(ParseError::UnbalancedParentheses),
        }
    }
}

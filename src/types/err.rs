/*!
Error types used in the library.

- Some of these are internally expected --- e.g. unification errors are used to control the flow of resolution, and are never an issue.
- Others are external --- e.g. a parse error notes an input clause violates the clause grammar, and any caller should surface the issue.

Names of the error enums --- for the most part --- overlap with corresponding modules.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when building a context from some input.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// An error related to parsing a clause string.
    Parse(ParseError),

    /// The attempted action could not be completed given the state of the context.
    InvalidState,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when building a context from some input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The problem file could not be read.
    Io(String),

    /// The problem file could not be decoded, e.g. a missing key or malformed JSON.
    Decode(String),

    /// Some clause string violates the clause grammar.
    /// The offending string is kept to identify the clause in any report.
    Clause { string: String, error: ParseError },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(detail) => write!(f, "Unable to read the problem file: {detail}"),
            Self::Decode(detail) => write!(f, "Unable to decode the problem file: {detail}"),
            Self::Clause { string, error } => write!(f, "Malformed clause {string:?}: {error}"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A lookup used an identifier the database has never issued.
    Missing,
}

/// Errors during parsing of a clause string.
///
/// Parsing of a clause aborts on the first error found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character with no role in the clause grammar.
    UnexpectedCharacter(char),

    /// The clause ended where some further token was required.
    UnexpectedEnd,

    /// Input remained after a complete clause was read.
    TrailingInput,

    /// A `(` without a matching `)`, or a stray `)`.
    UnbalancedParentheses,

    /// A predicate or function with no arguments.
    EmptyArgumentList,

    /// A negation inside an argument list, i.e. a predicate used as a term.
    PredicateAsArgument,

    /// A predicate or function whose name has an upper-case initial.
    WrongLeadingCase(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
            Self::TrailingInput => write!(f, "trailing input after the clause"),
            Self::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            Self::EmptyArgumentList => write!(f, "empty argument list"),
            Self::PredicateAsArgument => write!(f, "predicate in argument position"),
            Self::WrongLeadingCase(name) => {
                write!(f, "upper-case initial on predicate or function {name:?}")
            }
        }
    }
}

/// The expected failure of an attempt to unify two terms or two literals.
///
/// Resolution is driven by these, and so they are never surfaced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnificationError {
    /// Distinct constants, or a constant against a function.
    Clash,

    /// Distinct names, or distinct argument counts.
    Structure,

    /// A variable against a term containing that variable, when the occurs check is enabled.
    Occurs,
}

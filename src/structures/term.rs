/*!
Terms --- the arguments of predicates and functions.

A term is one of three things:
- A *variable*, written with a lower-case initial (`x`, `thing`).
- A *constant*, written with an upper-case initial (`A`, `Socrates`).
- A *function*, a name with a lower-case initial applied to one or more terms (`f(x,B)`).

The distinction between variables and constants is purely lexical, made by [NameKind].
There are no nullary functions --- a name without arguments is a variable or a constant.

Equality of terms is structural, and the derived ordering is used only to keep collections deterministic.
*/

use crate::structures::substitution::Substitution;

/// The lexical classification of a name, by its initial character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// A lower-case initial.
    Lower,

    /// An upper-case initial.
    Upper,
}

impl NameKind {
    /// Classifies a name by its initial character.
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c.is_uppercase() => NameKind::Upper,
            _ => NameKind::Lower,
        }
    }
}

/// A term of the algebra.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A variable, named with a lower-case initial.
    Variable(String),

    /// A constant, named with an upper-case initial.
    Constant(String),

    /// A function --- a name together with a non-empty list of argument terms.
    Function(String, Vec<Term>),
}

impl Term {
    /// A variable or constant as appropriate for the given name, by its initial character.
    pub fn from_name(name: String) -> Self {
        match NameKind::of(&name) {
            NameKind::Lower => Term::Variable(name),
            NameKind::Upper => Term::Constant(name),
        }
    }

    /// Whether the variable `v` occurs anywhere in the term.
    pub fn mentions_variable(&self, v: &str) -> bool {
        match self {
            Term::Variable(name) => name == v,
            Term::Constant(_) => false,
            Term::Function(_, args) => args.iter().any(|arg| arg.mentions_variable(v)),
        }
    }

    /// Every variable occurring in the term, appended to `out`.
    pub fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Term::Variable(name) => {
                if !out.iter().any(|seen| seen == name) {
                    out.push(name.clone());
                }
            }
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }

    /// The term with the substitution applied, replacing every bound variable in a single pass.
    ///
    /// Replacement terms are not themselves substituted into.
    pub fn apply(&self, sigma: &Substitution) -> Term {
        match self {
            Term::Variable(name) => match sigma.image_of(name) {
                Some(term) => term.clone(),
                None => self.clone(),
            },
            Term::Constant(_) => self.clone(),
            Term::Function(name, args) => Term::Function(
                name.clone(),
                args.iter().map(|arg| arg.apply(sigma)).collect(),
            ),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => write!(f, "{name}"),

            Term::Function(name, args) => {
                write!(f, "{name}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Term {
        Term::Variable(name.to_owned())
    }

    #[test]
    fn names_classify_by_initial() {
        assert_eq!(Term::from_name("x".to_owned()), var("x"));
        assert_eq!(
            Term::from_name("Socrates".to_owned()),
            Term::Constant("Socrates".to_owned())
        );
    }

    #[test]
    fn function_rendering_is_tight() {
        let term = Term::Function(
            "f".to_owned(),
            vec![var("x"), Term::Function("g".to_owned(), vec![var("y")])],
        );
        assert_eq!(term.to_string(), "f(x,g(y))");
    }

    #[test]
    fn mentions_looks_through_functions() {
        let term = Term::Function(
            "f".to_owned(),
            vec![Term::Function("g".to_owned(), vec![var("deep")])],
        );
        assert!(term.mentions_variable("deep"));
        assert!(!term.mentions_variable("g"));
    }
}

/*!
Literals --- possibly negated predicate atoms.

A literal applies a predicate name (lower-case initial) to one or more [terms](crate::structures::term), under some polarity.
Predicates never appear inside other predicates or inside functions, and keeping literals apart from the term algebra enforces this statically.

A negated literal renders with a `~` prefix:

```rust
# use resolute::parse::parse_literal;
let literal = parse_literal("~p(z,f(B))").unwrap();
assert_eq!(literal.to_string(), "~p(z,f(B))");
```
*/

use crate::structures::{substitution::Substitution, term::Term};

/// A predicate atom with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The predicate name.
    pub name: String,

    /// Whether the atom is negated.
    pub negated: bool,

    /// The arguments, always at least one.
    pub terms: Vec<Term>,
}

impl Literal {
    pub fn new(name: String, negated: bool, terms: Vec<Term>) -> Self {
        Literal {
            name,
            negated,
            terms,
        }
    }

    /// The number of arguments.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Whether the other literal has the same name and arity but opposite polarity.
    ///
    /// Complementary literals are the candidates for resolution.
    pub fn complements(&self, other: &Literal) -> bool {
        self.name == other.name && self.negated != other.negated && self.arity() == other.arity()
    }

    /// Whether the other literal matches in name, polarity, and arity.
    ///
    /// The arguments are not compared.
    pub fn same_shape(&self, other: &Literal) -> bool {
        self.name == other.name && self.negated == other.negated && self.arity() == other.arity()
    }

    /// The rendering of the literal without its polarity, used for the canonical ordering of clauses.
    pub fn atom_string(&self) -> String {
        let mut rendered = self.name.clone();
        rendered.push('(');
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                rendered.push(',');
            }
            rendered.push_str(&term.to_string());
        }
        rendered.push(')');
        rendered
    }

    /// The literal with the substitution applied to each argument.
    pub fn apply(&self, sigma: &Substitution) -> Literal {
        Literal {
            name: self.name.clone(),
            negated: self.negated,
            terms: self.terms.iter().map(|term| term.apply(sigma)).collect(),
        }
    }

    /// Every variable occurring in the literal, appended to `out`.
    pub fn collect_variables(&self, out: &mut Vec<String>) {
        for term in &self.terms {
            term.collect_variables(out);
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}", self.atom_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Term;

    fn literal(name: &str, negated: bool, vars: &[&str]) -> Literal {
        Literal::new(
            name.to_owned(),
            negated,
            vars.iter()
                .map(|v| Term::Variable((*v).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn complements_requires_opposite_polarity() {
        let plain = literal("p", false, &["x"]);
        let negated = literal("p", true, &["y"]);
        assert!(plain.complements(&negated));
        assert!(!plain.complements(&plain));
    }

    #[test]
    fn complements_requires_matching_arity() {
        let unary = literal("p", false, &["x"]);
        let binary = literal("p", true, &["x", "y"]);
        assert!(!unary.complements(&binary));
    }
}

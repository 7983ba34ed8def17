/*!
Clauses --- duplicate-free disjunctions of literals.

A clause is a set of [literals](crate::structures::literal) semantically, though it is kept as an ordered list so that equality, rendering, and the search are deterministic.
The canonical order sorts literals by their rendered atom and then by polarity, and construction removes syntactic duplicates.

The empty clause holds no literals and stands for falsum --- deriving it is the point of the search.

A clause renders as its literals between brackets:

```rust
# use resolute::parse::parse_clause;
let clause = parse_clause("q(x), ~p(x), q(x)").unwrap();
assert_eq!(clause.to_string(), "[~p(x), q(x)]");
```
*/

use crate::structures::{literal::Literal, substitution::Substitution};

/// A duplicate-free disjunction of literals in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause over the given literals, sorted into canonical order with duplicates removed.
    pub fn from_literals(mut literals: Vec<Literal>) -> Self {
        literals.sort_by_cached_key(|literal| (literal.atom_string(), literal.negated));
        literals.dedup();
        Clause { literals }
    }

    /// The empty clause, falsum.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// Whether the clause holds no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literals in canonical order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Whether the clause contains some literal and its negation with identical arguments.
    ///
    /// Such a clause is valid on any interpretation, and so contributes nothing to a search for contradiction.
    pub fn is_tautology(&self) -> bool {
        for (index, literal) in self.literals.iter().enumerate() {
            for other in &self.literals[index + 1..] {
                if literal.complements(other) && literal.terms == other.terms {
                    return true;
                }
            }
        }
        false
    }

    /// The clause with the substitution applied to every literal, renormalised.
    ///
    /// Literals identified by the substitution collapse, so the result may be shorter.
    pub fn apply(&self, sigma: &Substitution) -> Clause {
        Clause::from_literals(
            self.literals
                .iter()
                .map(|literal| literal.apply(sigma))
                .collect(),
        )
    }

    /// Every variable occurring in the clause, in order of first occurrence.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        for literal in &self.literals {
            literal.collect_variables(&mut names);
        }
        names
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, literal) in self.literals.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, "]")
    }
}

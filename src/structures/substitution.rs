/*!
Substitutions --- ordered collections of bindings from variables to terms.

A substitution is written `[t1 / v1, …, tn / vn]`, each binding read as "term over variable".
Bindings are distinct in their variable, and the recorded order is the order in which bindings were added --- order matters only for display, as application is simultaneous.

Application replaces every occurrence of each bound variable in a single pass.
There is no re-substitution into replacement terms, so `[y / x, A / y]` applied to `p(x)` gives `p(y)` rather than `p(A)`:

```rust
# use resolute::structures::substitution::Substitution;
# use resolute::structures::term::Term;
let mut sigma = Substitution::default();
sigma.bind("x", Term::Variable("y".to_owned()));
sigma.bind("y", Term::Constant("A".to_owned()));
let applied = Term::Variable("x".to_owned()).apply(&sigma);
assert_eq!(applied.to_string(), "y");
```

Sequencing is instead expressed by [composition](Substitution::compose).
*/

use crate::structures::term::Term;

/// A single binding, mapping a variable to a term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// The replacement term.
    pub term: Term,

    /// The name of the variable replaced.
    pub variable: String,
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.term, self.variable)
    }
}

/// An ordered collection of bindings, distinct in their variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<Binding>,
}

impl Substitution {
    /// A substitution with a single binding of `term` over `variable`, unless the binding is an identity.
    pub fn of(variable: &str, term: Term) -> Self {
        let mut sigma = Substitution::default();
        sigma.bind(variable, term);
        sigma
    }

    /// Whether the substitution holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bindings, in the order they were added.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The term bound over `variable`, if any.
    pub fn image_of(&self, variable: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|binding| binding.variable == variable)
            .map(|binding| &binding.term)
    }

    /// Appends a binding of `term` over `variable`.
    ///
    /// Identity bindings are dropped, and an existing binding of the variable is left in place.
    pub fn bind(&mut self, variable: &str, term: Term) {
        if matches!(&term, Term::Variable(name) if name == variable) {
            return;
        }

        if self.image_of(variable).is_none() {
            self.bindings.push(Binding {
                term,
                variable: variable.to_owned(),
            });
        }
    }

    /// The composition which applies `self` first and `later` second.
    ///
    /// Each binding of `self` has `later` applied to its term, and the bindings of `later` over variables untouched by `self` are appended.
    /// Identity bindings which arise are dropped.
    pub fn compose(&self, later: &Substitution) -> Substitution {
        let mut composed = Substitution::default();

        for binding in &self.bindings {
            composed.bind(&binding.variable, binding.term.apply(later));
        }

        for binding in &later.bindings {
            composed.bind(&binding.variable, binding.term.clone());
        }

        composed
    }
}

impl std::fmt::Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, binding) in self.bindings.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{binding}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Term {
        Term::Variable(name.to_owned())
    }

    fn constant(name: &str) -> Term {
        Term::Constant(name.to_owned())
    }

    #[test]
    fn identity_bindings_are_dropped() {
        let sigma = Substitution::of("x", var("x"));
        assert!(sigma.is_empty());
        assert_eq!(sigma.to_string(), "[]");
    }

    #[test]
    fn application_is_simultaneous() {
        let mut sigma = Substitution::of("x", var("y"));
        sigma.bind("y", var("x"));

        let term = Term::Function("f".to_owned(), vec![var("x"), var("y")]);
        assert_eq!(term.apply(&sigma).to_string(), "f(y,x)");
    }

    #[test]
    fn composition_applies_the_later_substitution_to_earlier_terms() {
        let first = Substitution::of("x", var("y"));
        let second = Substitution::of("y", constant("A"));

        let composed = first.compose(&second);
        assert_eq!(composed.to_string(), "[A / x, A / y]");

        // Applying the composition in one pass agrees with applying the parts in sequence.
        let term = Term::Function("f".to_owned(), vec![var("x")]);
        assert_eq!(
            term.apply(&composed),
            term.apply(&first).apply(&second)
        );
    }

    #[test]
    fn composition_keeps_the_earlier_binding_of_a_shared_variable() {
        let first = Substitution::of("x", constant("A"));
        let second = Substitution::of("x", constant("B"));

        let composed = first.compose(&second);
        assert_eq!(composed.to_string(), "[A / x]");
    }

    #[test]
    fn composition_drops_bindings_made_trivial() {
        // y becomes x and then x becomes y, so the composition has nothing to say about y.
        let first = Substitution::of("y", var("x"));
        let second = Substitution::of("x", var("y"));

        let composed = first.compose(&second);
        assert_eq!(composed.to_string(), "[y / x]");
    }
}

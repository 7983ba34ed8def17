/*!
Unification --- finding a most general unifier (MGU) of two terms or two literals.

A unifier of *a* and *b* is a substitution σ with σ*a* = σ*b*, and a most general unifier is one from which any other unifier can be obtained by composing a further substitution.

The implementation is the classic structural recursion:
- A variable unifies with any term by binding the term over the variable --- or by the identity, against itself.
- Constants unify only with themselves.
- Functions unify when their names and argument counts agree and their arguments unify pairwise, left to right, with the accumulated unifier applied before each pair is examined.

No occurs check is made unless requested, so by default `unify(x, f(x))` binds `f(x)` over `x` rather than failing.

# Example

```rust
# use resolute::parse::parse_term;
# use resolute::procedures::unification::unify_terms;
let a = parse_term("p(f(h(w)),y,g(k(f(h(w))),x))").unwrap();
let b = parse_term("p(u,k(f(h(w))),g(z,h(w)))").unwrap();

let sigma = unify_terms(&a, &b, false).unwrap();
assert_eq!(
    sigma.to_string(),
    "[f(h(w)) / u, k(f(h(w))) / y, k(f(h(w))) / z, h(w) / x]"
);
```
*/

use crate::{
    structures::{literal::Literal, substitution::Substitution, term::Term},
    types::err::UnificationError,
};

/// The most general unifier of two terms, or failure.
///
/// With `occurs_check` a variable fails to unify against a term containing it.
pub fn unify_terms(
    a: &Term,
    b: &Term,
    occurs_check: bool,
) -> Result<Substitution, UnificationError> {
    match (a, b) {
        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            if matches!(t, Term::Variable(other) if other == v) {
                return Ok(Substitution::default());
            }

            if occurs_check && t.mentions_variable(v) {
                return Err(UnificationError::Occurs);
            }

            Ok(Substitution::of(v, t.clone()))
        }

        (Term::Constant(c), Term::Constant(d)) => match c == d {
            true => Ok(Substitution::default()),
            false => Err(UnificationError::Clash),
        },

        (Term::Constant(_), Term::Function(..)) | (Term::Function(..), Term::Constant(_)) => {
            Err(UnificationError::Clash)
        }

        (Term::Function(f, f_args), Term::Function(g, g_args)) => {
            if f != g || f_args.len() != g_args.len() {
                return Err(UnificationError::Structure);
            }

            unify_term_lists(f_args, g_args, occurs_check)
        }
    }
}

/// The most general unifier of two equal-length term lists, accumulated left to right.
///
/// At each step the unifier so far is applied to both terms before they are unified, and the step's unifier is composed in.
pub fn unify_term_lists(
    a: &[Term],
    b: &[Term],
    occurs_check: bool,
) -> Result<Substitution, UnificationError> {
    if a.len() != b.len() {
        return Err(UnificationError::Structure);
    }

    let mut sigma = Substitution::default();

    for (a_term, b_term) in a.iter().zip(b) {
        let step = unify_terms(&a_term.apply(&sigma), &b_term.apply(&sigma), occurs_check)?;
        sigma = sigma.compose(&step);
    }

    Ok(sigma)
}

/// The most general unifier of two literals of the same name, polarity, and arity.
///
/// Used by the subsumption check, which pairs literals of like polarity.
pub fn unify_literals(
    a: &Literal,
    b: &Literal,
    occurs_check: bool,
) -> Result<Substitution, UnificationError> {
    if !a.same_shape(b) {
        return Err(UnificationError::Structure);
    }

    unify_term_lists(&a.terms, &b.terms, occurs_check)
}

/// The most general unifier of two complementary literals --- same name and arity, opposite polarity.
///
/// Resolution cancels exactly such pairs.
pub fn unify_complementary(
    a: &Literal,
    b: &Literal,
    occurs_check: bool,
) -> Result<Substitution, UnificationError> {
    if !a.complements(b) {
        return Err(UnificationError::Structure);
    }

    let sigma = unify_term_lists(&a.terms, &b.terms, occurs_check)?;
    log::trace!(target: crate::misc::log::targets::UNIFICATION, "{a} against {b} under {sigma}");
    Ok(sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_literal, parse_term};

    fn unified(a: &str, b: &str) -> Substitution {
        unify_terms(&parse_term(a).unwrap(), &parse_term(b).unwrap(), false).unwrap()
    }

    #[test]
    fn a_variable_binds_to_a_term() {
        assert_eq!(unified("x", "f(A)").to_string(), "[f(A) / x]");
        assert_eq!(unified("f(A)", "x").to_string(), "[f(A) / x]");
    }

    #[test]
    fn a_variable_against_itself_is_the_identity() {
        assert!(unified("x", "x").is_empty());
    }

    #[test]
    fn constants_unify_only_with_themselves() {
        assert!(unified("A", "A").is_empty());
        assert!(unify_terms(
            &parse_term("A").unwrap(),
            &parse_term("B").unwrap(),
            false
        )
        .is_err());
    }

    #[test]
    fn a_constant_never_unifies_with_a_function() {
        assert!(unify_terms(
            &parse_term("A").unwrap(),
            &parse_term("f(A)").unwrap(),
            false
        )
        .is_err());
    }

    #[test]
    fn functions_require_matching_names_and_arities() {
        assert!(unify_terms(
            &parse_term("f(x)").unwrap(),
            &parse_term("g(x)").unwrap(),
            false
        )
        .is_err());
        assert!(unify_terms(
            &parse_term("f(x)").unwrap(),
            &parse_term("f(x,y)").unwrap(),
            false
        )
        .is_err());
    }

    #[test]
    fn earlier_bindings_constrain_later_arguments() {
        // x takes A from the first argument pair, so the second pair clashes.
        assert!(unify_terms(
            &parse_term("f(x,x)").unwrap(),
            &parse_term("f(A,B)").unwrap(),
            false
        )
        .is_err());

        assert_eq!(unified("f(x,x)", "f(A,A)").to_string(), "[A / x]");
    }

    #[test]
    fn a_unifier_identifies_what_it_unifies() {
        let a = parse_term("p(f(h(w)),y,g(k(f(h(w))),x))").unwrap();
        let b = parse_term("p(u,k(f(h(w))),g(z,h(w)))").unwrap();

        let sigma = unify_terms(&a, &b, false).unwrap();
        assert_eq!(a.apply(&sigma), b.apply(&sigma));
    }

    #[test]
    fn without_the_occurs_check_a_cyclic_binding_forms() {
        let sigma = unified("x", "f(x)");
        assert_eq!(sigma.to_string(), "[f(x) / x]");
    }

    #[test]
    fn the_occurs_check_fails_a_cyclic_binding() {
        assert_eq!(
            unify_terms(&parse_term("x").unwrap(), &parse_term("f(x)").unwrap(), true),
            Err(UnificationError::Occurs)
        );
    }

    #[test]
    fn complementary_literals_unify() {
        let a = parse_literal("p(x)").unwrap();
        let b = parse_literal("~p(A)").unwrap();

        assert_eq!(unify_complementary(&a, &b, false).unwrap().to_string(), "[A / x]");
        assert!(unify_literals(&a, &b, false).is_err());
    }

    #[test]
    fn like_literals_unify_for_subsumption() {
        let a = parse_literal("p(x)").unwrap();
        let b = parse_literal("p(A)").unwrap();

        assert!(unify_literals(&a, &b, false).is_ok());
        assert!(unify_complementary(&a, &b, false).is_err());
    }
}

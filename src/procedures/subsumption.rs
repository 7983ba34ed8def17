/*!
Subsumption --- recognising clauses made redundant by more general clauses.

Clause *A* subsumes clause *B* when some substitution θ carries every literal of *A* to a literal of *B*, polarity included.
Then any interpretation satisfying *A* satisfies *B*, and *B* adds nothing to the search.

The check tries every assignment of the literals of *A* to distinct literals of *B* of matching name, polarity, and arity, extending θ literal by literal and backtracking on failure.
θ binds only variables of *A* --- the subsumed clause is left untouched --- which keeps the check sound.
The check is NP-hard in general, though clauses here are short.

Two refinements:
- *A* and *B* are *variants* when each subsumes the other, i.e. they are equal up to renaming.
- *A* *strictly* subsumes *B* when *A* subsumes *B* and they are not variants.

Only strict subsumption retires a stored clause; a variant of a stored clause is instead refused on arrival.
*/

use std::collections::HashMap;

use crate::structures::{clause::Clause, literal::Literal, term::Term};

/// Whether some substitution carries every literal of `a` to a distinct literal of `b`.
pub fn subsumes(a: &Clause, b: &Clause) -> bool {
    if a.size() > b.size() {
        return false;
    }

    let mut used = vec![false; b.size()];
    let mut theta = HashMap::new();

    assign_from(a.literals(), b.literals(), &mut used, &mut theta)
}

/// Whether `a` and `b` are equal up to a renaming of variables.
pub fn variants(a: &Clause, b: &Clause) -> bool {
    a.size() == b.size() && subsumes(a, b) && subsumes(b, a)
}

/// Whether `a` subsumes `b` and the two are not variants.
pub fn strictly_subsumes(a: &Clause, b: &Clause) -> bool {
    subsumes(a, b) && !subsumes(b, a)
}

/// Assigns each remaining literal of `a` to some unused literal of `b` under the bindings so far, backtracking through the alternatives.
fn assign_from(
    a: &[Literal],
    b: &[Literal],
    used: &mut [bool],
    theta: &mut HashMap<String, Term>,
) -> bool {
    let Some((literal, rest)) = a.split_first() else {
        return true;
    };

    for (index, candidate) in b.iter().enumerate() {
        if used[index] || !literal.same_shape(candidate) {
            continue;
        }

        let checkpoint = theta.clone();

        if match_term_lists(&literal.terms, &candidate.terms, theta) {
            used[index] = true;
            if assign_from(rest, b, used, theta) {
                return true;
            }
            used[index] = false;
        }

        *theta = checkpoint;
    }

    false
}

/// Extends θ so each pattern term becomes the corresponding target term, or reports failure.
///
/// Only pattern variables bind, and a variable already bound must map to the same target again.
fn match_term_lists(
    patterns: &[Term],
    targets: &[Term],
    theta: &mut HashMap<String, Term>,
) -> bool {
    patterns
        .iter()
        .zip(targets)
        .all(|(pattern, target)| match_terms(pattern, target, theta))
}

fn match_terms(pattern: &Term, target: &Term, theta: &mut HashMap<String, Term>) -> bool {
    match pattern {
        Term::Variable(v) => match theta.get(v) {
            Some(bound) => bound == target,
            None => {
                theta.insert(v.clone(), target.clone());
                true
            }
        },

        Term::Constant(_) => pattern == target,

        Term::Function(name, args) => match target {
            Term::Function(target_name, target_args) => {
                name == target_name
                    && args.len() == target_args.len()
                    && match_term_lists(args, target_args, theta)
            }
            _ => false,
        },
    }
}

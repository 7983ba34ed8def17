/*!
Binary resolution --- forming the resolvents of a pair of clauses.

Given clauses *C₁* and *C₂* and a complementary pair of literals *Lᵢ* ∈ *C₁*, *Lⱼ* ∈ *C₂* with unifier σ, the resolvent is

> σ((*C₁* \ {*Lᵢ*}) ∪ (*C₂* \ {*Lⱼ*}))

with syntactic duplicates collapsed.
Every complementary pair which unifies contributes a resolvent, so a pair of clauses may yield several.
Resolving two complementary unit clauses yields the empty clause.

Before any pair is examined the clauses are [standardised apart](standardise_apart): each variable of *C₂* which also occurs in *C₁* is renamed with a fresh suffix, so that a shared variable name cannot entangle the two clauses.
Variables private to *C₂* keep their names.
*/

use crate::{
    misc::log::targets,
    procedures::unification::unify_complementary,
    structures::{clause::Clause, literal::Literal, substitution::Substitution, term::Term},
};

/// The separator between a variable name and the suffix appended when standardising apart.
///
/// The character has no role in the clause grammar, so a renamed variable can never collide with an input variable.
pub const RENAME_SEPARATOR: char = '#';

/// A resolvent, together with the record the database keeps about the step.
#[derive(Debug)]
pub struct Resolvent {
    /// The derived clause.
    pub clause: Clause,

    /// The indices of the cancelled literals in the two parents.
    pub indices: (usize, usize),

    /// The unifier of the cancelled literals.
    pub substitution: Substitution,
}

/// The renaming which standardises `c2` apart from `c1`.
///
/// Each variable of `c2` which also occurs in `c1` is bound to a fresh variable drawn from `counter`; other variables are untouched.
pub fn standardise_apart(c1: &Clause, c2: &Clause, counter: &mut usize) -> Substitution {
    let c1_variables = c1.variables();
    let mut renaming = Substitution::default();

    for variable in c2.variables() {
        if c1_variables.contains(&variable) {
            let fresh = format!("{variable}{RENAME_SEPARATOR}{counter}");
            *counter += 1;
            renaming.bind(&variable, Term::Variable(fresh));
        }
    }

    renaming
}

/// Every resolvent of the pair, in order of the literal indices examined.
pub fn resolvents(
    c1: &Clause,
    c2: &Clause,
    counter: &mut usize,
    occurs_check: bool,
) -> Vec<Resolvent> {
    let renaming = standardise_apart(c1, c2, counter);

    // Renamed literal by literal so indices into c2 survive.
    let c2_literals: Vec<Literal> = c2
        .literals()
        .iter()
        .map(|literal| literal.apply(&renaming))
        .collect();

    let mut found = Vec::new();

    for (i, c1_literal) in c1.literals().iter().enumerate() {
        for (j, c2_literal) in c2_literals.iter().enumerate() {
            if !c1_literal.complements(c2_literal) {
                continue;
            }

            let Ok(sigma) = unify_complementary(c1_literal, c2_literal, occurs_check) else {
                continue;
            };

            let mut literals = Vec::with_capacity(c1.size() + c2_literals.len() - 2);
            for (index, literal) in c1.literals().iter().enumerate() {
                if index != i {
                    literals.push(literal.apply(&sigma));
                }
            }
            for (index, literal) in c2_literals.iter().enumerate() {
                if index != j {
                    literals.push(literal.apply(&sigma));
                }
            }

            let clause = Clause::from_literals(literals);
            log::trace!(target: targets::RESOLUTION, "{c1} with {c2} on ({i}, {j}) gives {clause}");

            found.push(Resolvent {
                clause,
                indices: (i, j),
                substitution: sigma,
            });
        }
    }

    found
}

/*!
Tools for loading clauses into a context.

Clauses arrive as strings, either one at a time through [add_clause](crate::context::Context::add_clause) and [add_goal](crate::context::Context::add_goal) or in bulk from a [Problem] file.

Arrival is filtered:
- A tautologous clause is refused --- it cannot take part in a contradiction.
- A clause subsumed by some live stored clause is refused.
- A kept clause retires any live stored clause it strictly subsumes.

Refused clauses are never assigned an identifier.

# Example

```rust
# use resolute::builder::ClauseOk;
# use resolute::context::Context;
let mut ctx = Context::default();

assert_eq!(ctx.add_clause("q(A)"), Ok(ClauseOk::Added(0)));
assert_eq!(ctx.add_clause("p(x), ~p(x)"), Ok(ClauseOk::Tautology));
assert_eq!(ctx.add_clause("q(B), q(A)"), Ok(ClauseOk::Subsumed));
```
*/

mod problem;
pub use problem::Problem;

use crate::{
    config::Config,
    context::{Context, ContextState},
    db::{clause::ClauseSource, ClauseId},
    misc::log::targets,
    parse::parse_clause,
    procedures::subsumption::{strictly_subsumes, subsumes},
    reports::{Report, RefutationTrace},
    structures::clause::Clause,
    types::err::{BuildError, ErrorKind},
};

/// Ok results when adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored under the given identifier.
    Added(ClauseId),

    /// The clause was a tautology, and was not stored.
    Tautology,

    /// The clause was subsumed by some stored clause, and was not stored.
    Subsumed,
}

impl Context {
    /// Parses and loads a clause of the knowledge base.
    pub fn add_clause(&mut self, string: &str) -> Result<ClauseOk, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(ErrorKind::InvalidState);
        }

        let clause = match parse_clause(string) {
            Ok(clause) => clause,
            Err(error) => {
                return Err(ErrorKind::from(BuildError::Clause {
                    string: string.to_owned(),
                    error,
                }))
            }
        };

        Ok(self.load_clause(clause))
    }

    /// Parses and loads a clause of the negated conjecture.
    ///
    /// The clause is expected to arrive already negated; loading is as for [add_clause](Context::add_clause).
    pub fn add_goal(&mut self, string: &str) -> Result<ClauseOk, ErrorKind> {
        self.add_clause(string)
    }

    /// Builds a context holding the clauses of a problem, knowledge base first.
    pub fn from_problem(problem: &Problem, config: Config) -> Result<Self, ErrorKind> {
        let mut ctx = Context::from_config(config);

        for string in &problem.knowledge_base {
            ctx.add_clause(string)?;
        }
        for string in &problem.negated_theorem_predicates {
            ctx.add_goal(string)?;
        }

        Ok(ctx)
    }

    fn load_clause(&mut self, clause: Clause) -> ClauseOk {
        if clause.is_tautology() {
            log::debug!(target: targets::CLAUSE_DB, "Tautology refused: {clause}");
            return ClauseOk::Tautology;
        }

        if let Some(by) = self
            .clause_db
            .live_clauses()
            .find(|stored| subsumes(stored.clause(), &clause))
        {
            log::debug!(target: targets::CLAUSE_DB, "Refused under clause {}: {clause}", by.id());
            return ClauseOk::Subsumed;
        }

        let retired: Vec<ClauseId> = self
            .clause_db
            .live_clauses()
            .filter(|stored| strictly_subsumes(&clause, stored.clause()))
            .map(|stored| stored.id())
            .collect();

        let id = self.clause_db.store(clause, 0, ClauseSource::Original);

        for victim in retired {
            let _ = self.clause_db.retire(victim);
        }

        ClauseOk::Added(id)
    }
}

/// Searches for a refutation of the conjecture whose negated clauses are given alongside a knowledge base.
///
/// The single entry point for callers with clause strings in hand: the result is the refutation trace, or [None] when the clauses admit no contradiction.
pub fn prove<S: AsRef<str>>(
    knowledge_base: &[S],
    negated_conjecture: &[S],
) -> Result<Option<RefutationTrace>, ErrorKind> {
    let mut ctx = Context::default();

    for string in knowledge_base {
        ctx.add_clause(string.as_ref())?;
    }
    for string in negated_conjecture {
        ctx.add_goal(string.as_ref())?;
    }

    match ctx.saturate()? {
        Report::Contradiction => Ok(ctx.refutation()),
        Report::Consistent | Report::Unknown => Ok(None),
    }
}

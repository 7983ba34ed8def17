/*!
Saturation --- the breadth-first search for the empty clause.

# Overview

The given clauses form level zero.
At each level *k* every pair of live clauses with at least one member at level *k* or later is resolved, and the kept resolvents form level *k* + 1.
Pairs are visited in lexicographic order of identifiers, so a run is a pure function of the clauses given.

A resolvent is kept only if it survives the filters:
- A tautology is discarded.
- A resolvent subsumed by some live clause --- a stored variant included --- is discarded.
- A kept resolvent retires every live clause it strictly subsumes, given clauses included.

Retired clauses take no further part, though their derivations remain for reconstruction.

The search closes when:
- The empty clause is derived --- a contradiction, and no further pair is examined.
- A level contributes nothing --- the clause set is saturated, and consistent.
- A configured limit on levels or clauses is reached --- the question is left open.

Roughly, the loop is as diagrammed:

```none
          +-----------------------+
  +-------| resolve pending pairs |------+-----> contradiction, on the empty clause
  |       +-----------------------+     |
  |                   |                 +-----> consistent, if no resolvent was kept
  |                   |
  |                   | some resolvent kept, and limits allow
  |                   ⌄
  |          +------------------+
  +----------| advance the level |
             +------------------+
```

# Example

```rust
# use resolute::config::Config;
# use resolute::context::Context;
# use resolute::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.add_clause("p(x), q(x)").unwrap();
ctx.add_clause("~p(A)").unwrap();
ctx.add_clause("~q(x)").unwrap();

assert_eq!(ctx.saturate(), Ok(Report::Contradiction));
```
*/

use crate::{
    context::{Context, ContextState},
    db::clause::{ClauseSource, Derivation},
    db::ClauseId,
    misc::log::targets,
    procedures::{
        resolution::{resolvents, Resolvent},
        subsumption::{strictly_subsumes, subsumes},
    },
    reports::Report,
    types::err::ErrorKind,
};

impl Context {
    /// Searches the context for a contradiction, unless limited.
    ///
    /// A second call after a search has closed returns the standing report.
    pub fn saturate(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Input => {}

            ContextState::Contradiction(_)
            | ContextState::Consistent
            | ContextState::LimitReached => {
                return Ok(self.report());
            }

            ContextState::Saturating => return Err(ErrorKind::InvalidState),
        }

        self.state = ContextState::Saturating;

        let timer = std::time::Instant::now();
        let occurs_check = self.config.occurs_check;
        let mut level: usize = 0;

        'level_loop: loop {
            if self
                .config
                .level_limit
                .is_some_and(|limit| level >= limit)
            {
                log::info!(target: targets::SATURATION, "Level limit reached at level {level}");
                self.state = ContextState::LimitReached;
                break 'level_loop;
            }

            log::debug!(target: targets::SATURATION, "Level {level} opens with {} clauses", self.clause_db.count());

            let snapshot = self.clause_db.count();
            let mut kept_some = false;

            for a in 0..snapshot {
                for b in (a + 1)..snapshot {
                    let found = {
                        let clause_a = self.clause_db.get(a)?;
                        let clause_b = self.clause_db.get(b)?;

                        if clause_a.level().max(clause_b.level()) < level {
                            continue;
                        }
                        if !clause_a.is_live() || !clause_b.is_live() {
                            continue;
                        }

                        resolvents(
                            clause_a.clause(),
                            clause_b.clause(),
                            &mut self.rename_counter,
                            occurs_check,
                        )
                    };

                    for resolvent in found {
                        match self.consider_resolvent(resolvent, (a, b), level)? {
                            ResolventOk::Kept => kept_some = true,

                            ResolventOk::Discarded => {}

                            ResolventOk::Empty => {
                                log::info!(target: targets::SATURATION, "Contradiction at level {}", level + 1);
                                break 'level_loop;
                            }

                            ResolventOk::OverLimit => {
                                log::info!(target: targets::SATURATION, "Clause limit reached at level {level}");
                                self.state = ContextState::LimitReached;
                                break 'level_loop;
                            }
                        }
                    }
                }
            }

            if !kept_some {
                log::info!(target: targets::SATURATION, "Saturated at level {level} with nothing to keep");
                self.state = ContextState::Consistent;
                break 'level_loop;
            }

            level += 1;
            self.counters.levels = level;
        }

        self.counters.time = timer.elapsed();
        log::info!(
            target: targets::SATURATION,
            "{} resolvents, {} tautologies, {} subsumed on arrival, {} retired, over {} levels in {:.2?}",
            self.counters.resolvents,
            self.counters.tautologies,
            self.counters.forward_subsumed,
            self.counters.backward_subsumed,
            self.counters.levels,
            self.counters.time,
        );
        Ok(self.report())
    }

    /// Filters a resolvent and stores it when kept, retiring the clauses it strictly subsumes.
    fn consider_resolvent(
        &mut self,
        resolvent: Resolvent,
        parents: (ClauseId, ClauseId),
        level: usize,
    ) -> Result<ResolventOk, ErrorKind> {
        self.counters.resolvents += 1;

        if resolvent.clause.is_tautology() {
            self.counters.tautologies += 1;
            log::trace!(target: targets::SATURATION, "Tautology discarded: {}", resolvent.clause);
            return Ok(ResolventOk::Discarded);
        }

        if self
            .clause_db
            .live_clauses()
            .any(|stored| subsumes(stored.clause(), &resolvent.clause))
        {
            self.counters.forward_subsumed += 1;
            log::trace!(target: targets::SUBSUMPTION, "Subsumed resolvent discarded: {}", resolvent.clause);
            return Ok(ResolventOk::Discarded);
        }

        if self
            .config
            .clause_limit
            .is_some_and(|limit| self.clause_db.count() >= limit)
        {
            return Ok(ResolventOk::OverLimit);
        }

        let retired: Vec<ClauseId> = self
            .clause_db
            .live_clauses()
            .filter(|stored| strictly_subsumes(&resolvent.clause, stored.clause()))
            .map(|stored| stored.id())
            .collect();

        let empty = resolvent.clause.is_empty();

        let id = self.clause_db.store(
            resolvent.clause,
            level + 1,
            ClauseSource::Resolution(Derivation {
                parents,
                indices: resolvent.indices,
                substitution: resolvent.substitution,
            }),
        );

        if empty {
            self.state = ContextState::Contradiction(id);
            return Ok(ResolventOk::Empty);
        }

        for victim in retired {
            self.clause_db.retire(victim)?;
            self.counters.backward_subsumed += 1;
        }

        Ok(ResolventOk::Kept)
    }
}

enum ResolventOk {
    Kept,
    Discarded,
    Empty,
    OverLimit,
}

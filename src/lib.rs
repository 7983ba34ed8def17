/*!
A library for establishing entailment in first-order predicate logic by resolution refutation.

resolute takes a knowledge base of clauses in conjunctive normal form together with the (already negated) clauses of some conjectured theorem, and searches for a derivation of the empty clause.
If the empty clause is derived the knowledge base together with the negated conjecture is contradictory, and so the conjecture itself is entailed by the knowledge base.

The search is breadth-first over *levels*.
Level zero holds the given clauses, and the clauses of level *n* + 1 are the resolvents of pairs of clauses seen up to level *n*.
Tautologous resolvents are discarded, as are resolvents subsumed by some clause already in the database, and clauses strictly subsumed by a fresh resolvent are retired from the search.

# Orientation

The library is designed around the core structure of a [context].

Clauses may be added through their [textual representation](crate::context::Context::add_clause) or decoded from a [problem file](crate::builder::Problem).

Internally, and at a high-level, a search is viewed in terms of a handful of interacting parts:
- A clause database which assigns each kept clause an identifier and records how the clause was obtained ([db](crate::db)).
- The term algebra of variables, constants, functions, literals, and clauses ([structures]).
- Procedures for unification, resolution, subsumption, and saturation ([procedures]).
- Reconstruction of a refutation from the derivation records of the empty clause ([reports]).

Useful starting points, then, may be:
- The high-level [saturation procedure](crate::procedures::saturate) to inspect the dynamics of a search.
- The [clause database](crate::db) to inspect the data kept during a search.
- The [structures] to familiarise yourself with the elements of a search and their representation.
- The [configuration](crate::config) to see which switches are supported.

# Example

```rust
# use resolute::config::Config;
# use resolute::context::Context;
# use resolute::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.add_clause("~mortal(socrates)").unwrap();
ctx.add_clause("~man(x),mortal(x)").unwrap();
ctx.add_clause("man(socrates)").unwrap();

assert_eq!(ctx.saturate(), Ok(Report::Contradiction));

let trace = ctx.refutation().expect("refutation missing");
assert_eq!(trace.derivations.last().unwrap().resolvent.to_string(), "[]");
```

# Logs

To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
As logging is only built on request, and further can be requested by level, logs are verbose.

The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to the [clause database](crate::db) can be filtered with `RUST_LOG=clause_db …` or,
- A note of each discarded resolvent without the per-pair noise can be found with `RUST_LOG=subsumption=debug …`
*/

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod reports;

pub mod db;

pub mod misc;

pub mod parse;

/*!
The context --- to which clauses are added and within which a search takes place.

# Example

```rust
# use resolute::config::Config;
# use resolute::context::Context;
# use resolute::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.add_clause("p(A)").unwrap();
ctx.add_clause("~q(A)").unwrap();

assert_eq!(ctx.saturate(), Ok(Report::Consistent));
```
*/

mod counters;
pub use counters::Counters;

use crate::{config::Config, db::ClauseDB, db::ClauseId};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context accepts clauses.
    Input,

    /// A search is under way.
    Saturating,

    /// The empty clause was derived, with the noted identifier.
    Contradiction(ClauseId),

    /// The search closed with no level contributing a clause, so no contradiction exists.
    Consistent,

    /// A configured limit cut the search short.
    LimitReached,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Saturating => write!(f, "Saturating"),
            Self::Contradiction(_) => write!(f, "Contradiction"),
            Self::Consistent => write!(f, "Consistent"),
            Self::LimitReached => write!(f, "LimitReached"),
        }
    }
}

/// The context in which a search takes place.
pub struct Context {
    /// The clause database.
    pub clause_db: ClauseDB,

    /// Counters over the life of the context.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    pub(crate) config: Config,

    /// The source of fresh suffixes for standardising clauses apart, scoped to the context.
    pub(crate) rename_counter: usize,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            clause_db: ClauseDB::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            config,
            rename_counter: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

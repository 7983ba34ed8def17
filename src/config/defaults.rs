//! Default values for the [configuration](crate::config::Config).

/// No occurs check.
pub const OCCURS_CHECK: bool = false;

/// No bound on the number of levels.
pub const LEVEL_LIMIT: Option<usize> = None;

/// No bound on the number of clauses.
pub const CLAUSE_LIMIT: Option<usize> = None;

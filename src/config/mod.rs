/*!
Configuration of a context.

Every switch is read when the search runs, and none changes the result of a search which completes within the limits.
Defaults are collected in [defaults].
*/

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Fail unification of a variable against a term containing that variable.
    ///
    /// Without the check `unify(x, f(x))` binds `f(x)` over `x`, and any later application of the binding to `x` grows a term mentioning `x` again.
    /// The check is off by default, as well-formed problems do not exercise it.
    pub occurs_check: bool,

    /// An upper bound on the number of saturation levels explored, if any.
    pub level_limit: Option<usize>,

    /// An upper bound on the number of clauses stored, if any.
    pub clause_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            occurs_check: defaults::OCCURS_CHECK,
            level_limit: defaults::LEVEL_LIMIT,
            clause_limit: defaults::CLAUSE_LIMIT,
        }
    }
}

/*!
The clause database.

Clauses are kept in insertion order and identified by [ClauseId], a plain index.
Identifiers are issued in strictly increasing order and a clause is never removed, so any identifier recorded in a [derivation](crate::db::clause::ClauseSource) stays valid for the life of the database.

A clause retired by subsumption is marked not [live](crate::db::clause::DBClause::is_live) rather than removed --- retired clauses take no further part in the search but remain available to reconstruct a refutation.
*/

pub mod clause;

use clause::{ClauseSource, DBClause};

use crate::{
    misc::log::targets,
    structures::clause::Clause,
    types::err::ClauseDBError,
};

/// The identifier of a stored clause --- its index in insertion order.
pub type ClauseId = usize;

/// The clause database.
#[derive(Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<DBClause>,
}

impl ClauseDB {
    /// The number of clauses stored, live or not.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// Stores a clause with the next identifier, returning the identifier.
    ///
    /// Any instance of storing a clause should use this method, as identifiers are indices into the store.
    pub fn store(&mut self, clause: Clause, level: usize, source: ClauseSource) -> ClauseId {
        let id = self.clauses.len();
        log::debug!(target: targets::CLAUSE_DB, "Clause {id} stored at level {level}: {clause}");
        self.clauses.push(DBClause::new(id, clause, level, source));
        id
    }

    /// The stored clause with the given identifier.
    pub fn get(&self, id: ClauseId) -> Result<&DBClause, ClauseDBError> {
        self.clauses.get(id).ok_or(ClauseDBError::Missing)
    }

    /// Marks the clause with the given identifier as retired from the search.
    pub fn retire(&mut self, id: ClauseId) -> Result<(), ClauseDBError> {
        match self.clauses.get_mut(id) {
            Some(db_clause) => {
                log::debug!(target: targets::CLAUSE_DB, "Clause {id} retired: {}", db_clause.clause());
                db_clause.retire();
                Ok(())
            }
            None => Err(ClauseDBError::Missing),
        }
    }

    /// An iterator over every stored clause, in insertion order.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.iter()
    }

    /// An iterator over the live clauses, in insertion order.
    pub fn live_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.iter().filter(|db_clause| db_clause.is_live())
    }

    /// An iterator over the clauses given to the database rather than derived, in insertion order.
    pub fn original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses
            .iter()
            .filter(|db_clause| matches!(db_clause.source(), ClauseSource::Original))
    }
}

/*!
The procedures of the search, factored by concern.

- [unification] finds most general unifiers of terms and of literals.
- [resolution] standardises clauses apart and forms their resolvents.
- [subsumption] decides whether one clause makes another redundant.
- [saturate] drives the breadth-first search over levels.
*/

pub mod resolution;
pub mod saturate;
pub mod subsumption;
pub mod unification;

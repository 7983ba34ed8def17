/*!
Reports for the context --- the outcome of a search, and the reconstruction of a refutation.

# Outcomes

A search closes with a [Report]: a contradiction was derived, the clauses are consistent, or a limit left the question open.

# Refutations

On a contradiction, [refutation](crate::context::Context::refutation) walks back from the empty clause through the derivation records of the [clause database](crate::db) and returns the ancestry as an ordered list of [Derivation]s, parents always ahead of children.

Each derivation renders on a single line:

```text
[~q(z), s(z)] | [~s(A)] -> [~q(A)] with substitution [A / z]
```

The rendered substitution keeps only bindings free of the fresh names introduced when standardising apart, in the order the bindings were added.
*/

use petgraph::graph::{DiGraph, NodeIndex};

use std::collections::{HashMap, VecDeque};

use crate::{
    context::{Context, ContextState},
    db::ClauseId,
    misc::log::targets,
    procedures::resolution::RENAME_SEPARATOR,
    structures::{clause::Clause, substitution::Substitution, term::Term},
};

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The clauses of the context are contradictory, so the conjecture is proven.
    Contradiction,

    /// The clauses of the context admit no contradiction.
    Consistent,

    /// The search was cut short, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Input | ContextState::Saturating => Self::Unknown,
            ContextState::Contradiction(_) => Self::Contradiction,
            ContextState::Consistent => Self::Consistent,
            ContextState::LimitReached => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Consistent => write!(f, "Consistent"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A resolution step of a refutation, rendered as
/// `parent | parent -> resolvent with substitution […]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// The parent clauses, lower identifier first.
    pub parents: (Clause, Clause),

    /// The derived clause.
    pub resolvent: Clause,

    /// The unifier of the step, filtered for display.
    pub substitution: Substitution,
}

impl std::fmt::Display for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} -> {} with substitution {}",
            self.parents.0, self.parents.1, self.resolvent, self.substitution
        )
    }
}

/// The refutation of a contradictory clause set --- the derivations between the given clauses and the empty clause, parents ahead of children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefutationTrace {
    pub derivations: Vec<Derivation>,
}

impl std::fmt::Display for RefutationTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, derivation) in self.derivations.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{derivation}")?;
        }
        Ok(())
    }
}

impl Context {
    /// The report of the context, given its state.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The refutation ending in the empty clause, when one has been found.
    ///
    /// Ancestors of the empty clause are collected by a breadth-first walk back through parent identifiers, and their derivations are emitted parents-first, tied towards the order of discovery.
    pub fn refutation(&self) -> Option<RefutationTrace> {
        let ContextState::Contradiction(empty_id) = self.state else {
            return None;
        };

        // The ancestry of the empty clause, as a graph over derived clauses with edges from parents to children.
        let mut graph = DiGraph::<ClauseId, ()>::new();
        let mut nodes: HashMap<ClauseId, NodeIndex> = HashMap::new();
        let mut discovery: Vec<ClauseId> = Vec::new();

        let mut queue = VecDeque::from([empty_id]);
        while let Some(id) = queue.pop_front() {
            if nodes.contains_key(&id) {
                continue;
            }

            let Ok(stored) = self.clause_db.get(id) else {
                log::error!(target: targets::RECONSTRUCTION, "Clause {id} lost from the database");
                return None;
            };

            // Given clauses are not steps of the refutation, and have no parents to walk.
            let Some(derivation) = stored.derivation() else {
                continue;
            };

            nodes.insert(id, graph.add_node(id));
            discovery.push(id);

            queue.push_back(derivation.parents.0);
            queue.push_back(derivation.parents.1);
        }

        for (&id, &node) in &nodes {
            let Some(derivation) = self.clause_db.get(id).ok()?.derivation() else {
                continue;
            };
            for parent in [derivation.parents.0, derivation.parents.1] {
                if let Some(&parent_node) = nodes.get(&parent) {
                    graph.update_edge(parent_node, node, ());
                }
            }
        }

        // Later discovery is further from the empty clause, so preferring it emits the trace root-up.
        let rank: HashMap<ClauseId, usize> = discovery
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();

        let order = topological_order(&graph, &rank);

        let mut derivations = Vec::new();
        for id in order {
            let stored = self.clause_db.get(id).ok()?;
            let derivation = stored.derivation()?;

            let first = self.clause_db.get(derivation.parents.0).ok()?;
            let second = self.clause_db.get(derivation.parents.1).ok()?;

            derivations.push(Derivation {
                parents: (first.clause().clone(), second.clause().clone()),
                resolvent: stored.clause().clone(),
                substitution: shown_bindings(&derivation.substitution),
            });
        }

        log::info!(target: targets::RECONSTRUCTION, "Refutation of {} steps reconstructed", derivations.len());

        Some(RefutationTrace { derivations })
    }
}

/// A topological order over the graph, choosing among ready nodes by the greatest rank.
fn topological_order(
    graph: &DiGraph<ClauseId, ()>,
    rank: &HashMap<ClauseId, usize>,
) -> Vec<ClauseId> {
    use petgraph::Direction;

    let mut pending: Vec<NodeIndex> = graph.node_indices().collect();
    let mut emitted: Vec<bool> = vec![false; graph.node_count()];
    let mut order = Vec::with_capacity(graph.node_count());

    while !pending.is_empty() {
        let mut choice: Option<(usize, usize)> = None;

        for (position, &node) in pending.iter().enumerate() {
            let ready = graph
                .neighbors_directed(node, Direction::Incoming)
                .all(|parent| emitted[parent.index()]);
            if !ready {
                continue;
            }

            let node_rank = rank.get(&graph[node]).copied().unwrap_or(0);
            if choice.map_or(true, |(_, best)| node_rank > best) {
                choice = Some((position, node_rank));
            }
        }

        // The graph is acyclic, so some node is always ready.
        let Some((position, _)) = choice else {
            break;
        };

        let node = pending.swap_remove(position);
        emitted[node.index()] = true;
        order.push(graph[node]);
    }

    order
}

/// The bindings of a substitution worth showing --- those free of the fresh names introduced by standardising apart.
fn shown_bindings(sigma: &Substitution) -> Substitution {
    let mut shown = Substitution::default();

    for binding in sigma.bindings() {
        if binding.variable.contains(RENAME_SEPARATOR) || mentions_renamed(&binding.term) {
            continue;
        }
        shown.bind(&binding.variable, binding.term.clone());
    }

    shown
}

fn mentions_renamed(term: &Term) -> bool {
    match term {
        Term::Variable(name) => name.contains(RENAME_SEPARATOR),
        Term::Constant(_) => false,
        Term::Function(_, args) => args.iter().any(mentions_renamed),
    }
}

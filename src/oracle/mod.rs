/*!
Oracles, which determine the satisfiability of a (propositional) formula.

An oracle accumulates clauses and, on request, determines whether the conjunction of all clauses added so far is satisfiable.
If so, a model is returned, restricted to some atoms of interest.

The contract of an oracle:
- [add_clause](Oracle::add_clause) accumulates a clause, and there is no implicit reset between solves.
- [solve](Oracle::solve) reports on the conjunction of every clause added since the oracle was made (or [reset](Oracle::reset)).
  On a satisfiable report the returned assignment has a value for every atom of interest, with an atom which occurs in no clause defaulting to false.
  Atoms outside of those of interest may be omitted.
- [Report::Unknown] is reserved for incomplete oracles.

A [context](crate::context) builds a fresh oracle for every abstraction, and never resets an oracle.

Two oracles are provided:
- [Backtracking], an exhaustive backtracking search which extends a partial assignment over the atoms of interest, in order, trying false before true.
  This is the reference oracle, and the model found is the least model (in the lexicographic order over the atoms of interest, with false before true) which is consistent with the clauses.
- [Dpll], a complete search with unit propagation over all atoms of the clauses.

```rust
# use otter_qbf::oracle::{Backtracking, Oracle};
# use otter_qbf::reports::Report;
# use otter_qbf::structures::valuation::Valuation;
let mut oracle = Backtracking::default();
oracle.add_clause(vec![1, 3]);
oracle.add_clause(vec![2, 4]);

let (report, model) = oracle.solve(&[1, 2, 3, 4]);
assert_eq!(report, Report::Satisfiable);
assert_eq!(model.as_dimacs(false), "-1 -2 3 4");

oracle.add_clause(vec![-3]);
let (report, model) = oracle.solve(&[1, 2, 3, 4]);
assert_eq!(report, Report::Satisfiable);
assert_eq!(model.as_dimacs(false), "1 -2 -3 4");
```
*/

mod backtracking;
pub use backtracking::Backtracking;

mod dpll;
pub use dpll::Dpll;

use crate::{
    reports::Report,
    structures::{atom::Atom, clause::CClause, valuation::Assignment},
};

/// Something which determines the satisfiability of an accumulated collection of clauses.
pub trait Oracle {
    /// Adds a clause to the oracle.
    fn add_clause(&mut self, clause: CClause);

    /// Adds each clause to the oracle.
    fn add_clauses(&mut self, clauses: impl IntoIterator<Item = CClause>)
    where
        Self: Sized,
    {
        for clause in clauses {
            self.add_clause(clause);
        }
    }

    /// Determines the satisfiability of the clauses added to the oracle.
    ///
    /// On a satisfiable report, the assignment has a value for each atom of `atoms`.
    /// Otherwise, the assignment is empty.
    fn solve(&mut self, atoms: &[Atom]) -> (Report, Assignment);

    /// Removes every clause from the oracle.
    fn reset(&mut self);

    /// The count of clauses added to the oracle.
    fn clause_count(&self) -> usize;
}

/// The atoms, with repetitions after the first removed.
pub(crate) fn distinct_atoms(atoms: &[Atom]) -> Vec<Atom> {
    let mut seen = std::collections::HashSet::with_capacity(atoms.len());
    atoms
        .iter()
        .copied()
        .filter(|atom| seen.insert(*atom))
        .collect()
}

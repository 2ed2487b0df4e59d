//! The reference oracle, an exhaustive backtracking search.
//!
//! The search extends a partial assignment over the atoms of interest, in the order given.
//! At each atom false is tried before true, and an extension is only explored if the extended assignment is consistent with every clause of the oracle.
//!
//! Consistency is checked clause by clause, and a clause is only inconsistent with an assignment if every literal of the clause has a value and every literal is false --- see [status_on](crate::structures::clause::Clause::status_on).
//! So, an atom outside those of interest never makes a clause inconsistent, and the search is only complete for clauses over the atoms of interest.
//!
//! The search is exponential in the count of atoms of interest, and so is suitable for small instances, such as the abstractions built by a [context](crate::context).

use crate::{
    misc::log::targets::{self},
    oracle::{distinct_atoms, Oracle},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        valuation::Assignment,
    },
};

/// An oracle which backtracks over the atoms of interest.
#[derive(Clone, Debug, Default)]
pub struct Backtracking {
    clauses: Vec<CClause>,
}

impl Backtracking {
    /// Whether no clause is violated on the assignment.
    fn consistent(&self, assignment: &Assignment) -> bool {
        !self
            .clauses
            .iter()
            .any(|clause| clause.violated_on(assignment))
    }

    /// Extends the assignment from the atom at `index`, returning whether some consistent extension to every atom was found.
    ///
    /// On failure the atom at `index` is removed from the assignment, so the caller may try a different value for the previous atom.
    fn backtrack(&self, assignment: &mut Assignment, atoms: &[Atom], index: usize) -> bool {
        let Some(&atom) = atoms.get(index) else {
            return self.consistent(assignment);
        };

        for value in [false, true] {
            assignment.insert(atom, value);
            if self.consistent(assignment) && self.backtrack(assignment, atoms, index + 1) {
                return true;
            }
        }

        assignment.remove(&atom);
        false
    }
}

impl Oracle for Backtracking {
    fn add_clause(&mut self, clause: CClause) {
        log::trace!(target: targets::ORACLE, "Clause: {}", clause.as_dimacs(false));
        self.clauses.push(clause);
    }

    fn solve(&mut self, atoms: &[Atom]) -> (Report, Assignment) {
        let atoms = distinct_atoms(atoms);
        log::debug!(target: targets::ORACLE, "Backtracking over {} atoms and {} clauses", atoms.len(), self.clauses.len());

        let mut assignment = Assignment::default();
        match self.backtrack(&mut assignment, &atoms, 0) {
            true => (Report::Satisfiable, assignment),
            false => (Report::Unsatisfiable, Assignment::default()),
        }
    }

    fn reset(&mut self) {
        self.clauses.clear();
    }

    fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Valuation;

    #[test]
    fn no_clauses() {
        let mut oracle = Backtracking::default();
        let (report, model) = oracle.solve(&[1, 2]);

        assert_eq!(report, Report::Satisfiable);
        assert_eq!(model.value_of(1), Some(false));
        assert_eq!(model.value_of(2), Some(false));
    }

    #[test]
    fn empty_clause() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![]);

        assert_eq!(oracle.solve(&[1, 2]).0, Report::Unsatisfiable);
        assert_eq!(oracle.solve(&[]).0, Report::Unsatisfiable);
    }

    #[test]
    fn clauses_accumulate() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![1]);
        assert_eq!(oracle.solve(&[1]).0, Report::Satisfiable);

        oracle.add_clause(vec![-1]);
        assert_eq!(oracle.solve(&[1]).0, Report::Unsatisfiable);
        assert_eq!(oracle.clause_count(), 2);

        oracle.reset();
        assert_eq!(oracle.clause_count(), 0);
        assert_eq!(oracle.solve(&[1]).0, Report::Satisfiable);
    }

    #[test]
    fn false_before_true() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![1, 2]);

        let (_, model) = oracle.solve(&[2, 1]);
        assert_eq!(model.value_of(2), Some(false));
        assert_eq!(model.value_of(1), Some(true));

        let (_, model) = oracle.solve(&[1, 2]);
        assert_eq!(model.value_of(1), Some(false));
        assert_eq!(model.value_of(2), Some(true));
    }

    #[test]
    fn unconstrained_atom_defaults_false() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![1]);

        let (report, model) = oracle.solve(&[1, 7]);
        assert_eq!(report, Report::Satisfiable);
        assert_eq!(model.value_of(1), Some(true));
        assert_eq!(model.value_of(7), Some(false));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn atoms_outside_interest_never_conflict() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![3]);
        oracle.add_clause(vec![-3]);

        let (report, model) = oracle.solve(&[1]);
        assert_eq!(report, Report::Satisfiable);
        assert_eq!(model.value_of(3), None);
    }
}

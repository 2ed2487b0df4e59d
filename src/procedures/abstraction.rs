/*!
The abstraction built at a (non-innermost) level of a solve.

An abstraction is an [oracle](crate::oracle) over the atoms of the block at the level, together with one selector for each clause of the matrix at the level.
A model of the abstraction is a candidate move for the block, read as a [selection](crate::procedures::simplify#selections) of which clauses to defer to the inner levels.

# Existential blocks

For each clause *c* with selector *s*, the clause *c|ᵦ ∨ s* is added, where *c|ᵦ* is the projection of *c* to the block.
So, a clause may only be resolved (*s* false) if the block satisfies the clause.

```none
  (x1 ∨ y1)        ⟶   (x1 ∨ s0)
  (¬x1 ∨ x2 ∨ y2)  ⟶   (¬x1 ∨ x2 ∨ s1)
```

With [local_clauses](crate::config::Config::local_clauses), a clause whose atoms are all bound by the block is also given the unit clause ¬*s*, as deferring such a clause leaves the empty clause for the inner levels.

# Universal blocks

For each clause *c* with selector *s* and each literal *l* of *c|ᵦ*, the clause *¬l ∨ ¬s* is added.
So, a clause may only be deferred (*s* true) if the block falsifies every literal of the clause it binds.

```none
  (x1 ∨ y1)        ⟶   (¬x1 ∨ ¬s0)
  (¬x1 ∨ x2 ∨ y2)  ⟶   (x1 ∨ ¬s1) ∧ (¬x2 ∨ ¬s1)
```

# Ownership

An abstraction, and so the oracle within, is owned by a single level of a solve and is dropped when the level returns.
Selectors are [tagged](crate::structures::variable) with the level, and flattened to atoms from a watermark above every problem atom only when clauses are handed to the oracle.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    procedures::simplify,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        prefix::{Block, Quantifier},
        valuation::{Assignment, Valuation},
        variable::{SelectorPool, VarLiteral},
    },
    types::err::{self, ErrorKind},
};

/// A candidate move read from a model of an abstraction.
#[derive(Clone, Debug)]
pub struct Selection {
    /// The values of the block atoms.
    pub block: Assignment,

    /// For each clause of the matrix, whether the clause is deferred.
    pub deferred: Vec<bool>,
}

/// The abstraction of some level.
pub struct Abstraction<O: Oracle> {
    quantifier: Quantifier,
    block: Vec<Atom>,
    pool: SelectorPool,
    oracle: O,
}

impl<O: Oracle + Default> Abstraction<O> {
    /// Builds the abstraction of `matrix` relative to `block`, at `level`.
    pub fn build(
        level: usize,
        block: &Block,
        matrix: &[CClause],
        watermark: Atom,
        local_clauses: bool,
    ) -> Result<Self, ErrorKind> {
        let pool = SelectorPool::new(level, watermark, matrix.len())?;
        let bound = block.atoms.iter().copied().collect::<HashSet<_>>();

        let mut abstraction = Abstraction {
            quantifier: block.quantifier,
            block: block.atoms.clone(),
            pool,
            oracle: O::default(),
        };

        for (index, clause) in matrix.iter().enumerate() {
            let selector = pool.selector(index);
            let projection = simplify::project(clause, &bound);

            match block.quantifier {
                Quantifier::Existential => {
                    let mut relaxed = projection
                        .literals()
                        .map(VarLiteral::from)
                        .collect::<Vec<_>>();
                    relaxed.push(VarLiteral::new(selector, true));
                    abstraction.add(&relaxed);

                    if local_clauses && projection.size() == clause.size() {
                        abstraction.add(&[VarLiteral::new(selector, false)]);
                    }
                }

                Quantifier::Universal => {
                    for literal in projection.literals() {
                        let falsified = VarLiteral::from(literal).negate();
                        abstraction.add(&[falsified, VarLiteral::new(selector, false)]);
                    }
                }
            }
        }

        log::debug!(target: targets::ABSTRACTION, "Level {level}: {} abstraction of {} clauses over {} atoms and {} selectors", block.quantifier, abstraction.oracle.clause_count(), abstraction.block.len(), pool.count());

        Ok(abstraction)
    }
}

impl<O: Oracle> Abstraction<O> {
    /// Adds a clause to the oracle of the abstraction, flattened to integer literals.
    fn add(&mut self, clause: &[VarLiteral]) {
        let flat = clause
            .iter()
            .map(|literal| self.pool.literal_of(*literal))
            .collect::<CClause>();
        self.oracle.add_clause(flat);
    }

    /// Queries the abstraction for a candidate move.
    ///
    /// Returns `None` if the abstraction is unsatisfiable, in which case no (further) move exists.
    pub fn query(&mut self) -> Result<Option<Selection>, ErrorKind> {
        let mut atoms = self.block.clone();
        atoms.extend(self.pool.atoms());

        let (report, model) = self.oracle.solve(&atoms);
        match report {
            Report::Unsatisfiable => return Ok(None),
            Report::Unknown => return Err(err::ErrorKind::from(err::OracleError::Unknown)),
            Report::Satisfiable => {}
        }

        let mut deferred = Vec::with_capacity(self.pool.count());
        for atom in self.pool.atoms() {
            match model.value_of(atom) {
                Some(value) => deferred.push(value),
                None => return Err(err::ErrorKind::InvalidState),
            }
        }

        let block = self
            .block
            .iter()
            .filter_map(|atom| model.value_of(*atom).map(|value| (*atom, value)))
            .collect();

        Ok(Some(Selection { block, deferred }))
    }

    /// Refines the abstraction to exclude a failed selection.
    pub fn refine(&mut self, selection: &Selection) {
        let blocking_clause = simplify::blocking_clause(self.quantifier, &self.pool, &selection.deferred);

        log::trace!(target: targets::REFINEMENT, "Blocking: {}", blocking_clause.iter().map(|literal| self.pool.literal_of(*literal).to_string()).collect::<Vec<_>>().join(" "));

        self.add(&blocking_clause);
    }

    /// The quantifier of the block.
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Backtracking;

    #[test]
    fn universal_first_move_defers_nothing() {
        let block = Block::new(Quantifier::Universal, vec![1]);
        let matrix = vec![vec![1, 2], vec![-1, -2]];

        let mut abstraction = Abstraction::<Backtracking>::build(0, &block, &matrix, 3, false).unwrap();
        let selection = abstraction.query().unwrap().unwrap();

        assert_eq!(selection.deferred, vec![false, false]);
        assert_eq!(selection.block.value_of(1), Some(false));
    }

    #[test]
    fn universal_refinement_forces_a_deferral() {
        let block = Block::new(Quantifier::Universal, vec![1]);
        let matrix = vec![vec![1, 2], vec![-1, -2]];

        let mut abstraction = Abstraction::<Backtracking>::build(0, &block, &matrix, 3, false).unwrap();

        let first = abstraction.query().unwrap().unwrap();
        abstraction.refine(&first);

        let second = abstraction.query().unwrap().unwrap();
        assert_eq!(second.deferred, vec![true, false]);
        assert_eq!(second.block.value_of(1), Some(false));

        abstraction.refine(&second);
        let third = abstraction.query().unwrap().unwrap();
        assert_eq!(third.deferred, vec![false, true]);
        assert_eq!(third.block.value_of(1), Some(true));

        abstraction.refine(&third);
        assert!(abstraction.query().unwrap().is_none());
    }

    #[test]
    fn existential_first_move() {
        let block = Block::new(Quantifier::Existential, vec![1]);
        let matrix = vec![vec![1, 2], vec![-1, -2]];

        let mut abstraction = Abstraction::<Backtracking>::build(0, &block, &matrix, 3, false).unwrap();
        let selection = abstraction.query().unwrap().unwrap();

        assert_eq!(selection.block.value_of(1), Some(false));
        assert_eq!(selection.deferred, vec![true, false]);
    }

    #[test]
    fn local_clauses_are_resolved() {
        let block = Block::new(Quantifier::Existential, vec![1, 2]);
        let matrix = vec![vec![1, 2], vec![-1, 3]];

        let mut abstraction = Abstraction::<Backtracking>::build(0, &block, &matrix, 4, true).unwrap();
        let selection = abstraction.query().unwrap().unwrap();

        assert!(!selection.deferred[0]);
        assert_eq!(selection.block.value_of(1), Some(false));
        assert_eq!(selection.block.value_of(2), Some(true));
    }
}

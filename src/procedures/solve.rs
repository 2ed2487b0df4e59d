//! Determines the truth of a quantified formula.
//!
//! # Overview
//!
//! A solve recurses through the prefix, one block per level, with the matrix at each level derived from the matrix at the previous level.
//!
//! At each level:
//! - An empty matrix is true, and a matrix containing the empty clause is false.
//! - At the innermost block, the matrix is propositional:
//!   + If the block is existential, the matrix is handed to a fresh oracle.
//!   + If the block is universal, the (non-empty) matrix is taken to be false.
//! - Otherwise, an [abstraction](crate::procedures::abstraction) of the matrix is built, and a CEGAR loop is entered.
//!
//! Roughly, the loop at a level is as diagrammed:
//!
//! ```none
//!                      +-------+
//! build abstraction -->| query |-----> if no move: false for ∃, true for ∀
//!                      +-------+
//!                        ⌃   |
//!                        |   | simplify the matrix on the move, and recurse
//!                        |   ⌄
//!                +--------+ +---------+
//!                | refine |<| inner   |-----> if ∃ and true, or ∀ and false: the same
//!                +--------+ +---------+
//!                     ⌃          |
//!                     +----------+ if ∃ and false, or ∀ and true
//! ```
//!
//! The loop terminates, as each refinement excludes at least the selection which failed, and there are finitely many selections.
//!
//! # The innermost universal block
//!
//! A universal innermost block facing a non-empty matrix is false, without consulting an oracle.
//! This is exact when every clause of the matrix is bound by the block and no clause is a tautology, as each clause may be falsified.
//! Though, a tautological clause such as (x ∨ ¬x) is never false, and so in this case the result differs from the truth of the formula.
//!
//! # Selector atoms
//!
//! Selectors are flattened to atoms from a single watermark, one above every atom of the prefix and matrix.
//! The same watermark is used at every level, as the selectors of a level only ever appear in the abstraction of that level.

use std::collections::HashSet;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    oracle::Oracle,
    procedures::{abstraction::Abstraction, simplify},
    reports::Report,
    structures::{
        atom::Atom,
        clause::CClause,
        formula::{self, Formula},
        matrix::{self, Matrix},
        prefix::{self, Block, Quantifier},
    },
    types::err::{self, ErrorKind},
};

impl<O: Oracle + Default> GenericContext<O> {
    /// Determines the truth of the formula given by `prefix` and `matrix`.
    ///
    /// The formula is [checked](crate::structures::formula::check) before any search begins.
    /// On success the report is either satisfiable (true) or unsatisfiable (false).
    pub fn solve(&mut self, prefix: &[Block], matrix: &[CClause]) -> Result<Report, ErrorKind> {
        formula::check(prefix, matrix)?;

        self.counters = Default::default();
        self.witness = None;

        let max_atom = prefix::max_atom(prefix)
            .max(matrix::max_atom(matrix))
            .unwrap_or(0);
        let watermark = max_atom.max(1) + 1;

        log::info!(target: targets::ENGINE, "Solving {} blocks and {} clauses, selectors from {watermark}", prefix.len(), matrix.len());

        let start = std::time::Instant::now();
        let result = self.solve_level(prefix, 0, matrix.to_vec(), watermark);
        self.counters.time = start.elapsed();

        log::info!(target: targets::ENGINE, "Result: {result:?} after {} iterations", self.counters.iterations);
        result
    }

    /// Determines the truth of a formula.
    pub fn solve_formula(&mut self, formula: &Formula) -> Result<Report, ErrorKind> {
        self.solve(&formula.prefix, &formula.matrix)
    }

    /// Determines the truth of the formula given by the blocks of `prefix` from `depth` and `matrix`.
    fn solve_level(
        &mut self,
        prefix: &[Block],
        depth: usize,
        matrix: Matrix,
        watermark: Atom,
    ) -> Result<Report, ErrorKind> {
        self.counters.max_depth = self.counters.max_depth.max(depth);

        if matrix.is_empty() {
            log::trace!(target: targets::ENGINE, "Level {depth}: empty matrix");
            return Ok(Report::Satisfiable);
        }

        if matrix::has_empty_clause(&matrix) {
            log::trace!(target: targets::ENGINE, "Level {depth}: empty clause");
            return Ok(Report::Unsatisfiable);
        }

        let innermost = prefix.len().saturating_sub(1);
        if depth > innermost {
            return Err(err::ErrorKind::InvalidState);
        }

        if depth == innermost {
            let quantifier = match prefix.get(depth) {
                Some(block) => block.quantifier,
                None => Quantifier::Existential,
            };
            return self.solve_innermost(depth, quantifier, &matrix);
        }

        let block = &prefix[depth];
        let bound = block.atoms.iter().copied().collect::<HashSet<Atom>>();

        let mut abstraction = Abstraction::<O>::build(
            depth,
            block,
            &matrix,
            watermark,
            self.config.local_clauses.value,
        )?;
        self.counters.abstractions += 1;

        loop {
            self.counters.iterations += 1;
            self.counters.oracle_calls += 1;

            let Some(selection) = abstraction.query()? else {
                log::debug!(target: targets::ENGINE, "Level {depth}: no {} move remains", abstraction.quantifier());
                return match abstraction.quantifier() {
                    Quantifier::Existential => Ok(Report::Unsatisfiable),
                    Quantifier::Universal => Ok(Report::Satisfiable),
                };
            };

            let inner_matrix = simplify::simplify(&matrix, &bound, &selection.deferred);

            log::trace!(target: targets::ENGINE, "Level {depth}: move {:?}, deferring {} of {} clauses", selection.block, inner_matrix.len(), matrix.len());

            let inner = self.solve_level(prefix, depth + 1, inner_matrix, watermark)?;

            match (abstraction.quantifier(), inner) {
                (Quantifier::Existential, Report::Unsatisfiable)
                | (Quantifier::Universal, Report::Satisfiable) => {
                    self.counters.refinements += 1;
                    abstraction.refine(&selection);
                }

                (Quantifier::Existential, Report::Satisfiable) => return Ok(Report::Satisfiable),

                (Quantifier::Universal, Report::Unsatisfiable) => {
                    return Ok(Report::Unsatisfiable)
                }

                (_, Report::Unknown) => return Err(err::ErrorKind::InvalidState),
            }
        }
    }

    /// Determines the truth of a (non-empty, empty clause free) matrix at the innermost block.
    fn solve_innermost(
        &mut self,
        depth: usize,
        quantifier: Quantifier,
        matrix: &[CClause],
    ) -> Result<Report, ErrorKind> {
        if quantifier == Quantifier::Universal {
            log::debug!(target: targets::ENGINE, "Level {depth}: universal block with {} clauses remaining", matrix.len());
            return Ok(Report::Unsatisfiable);
        }

        let mut oracle = O::default();
        oracle.add_clauses(matrix.iter().cloned());

        self.counters.oracle_calls += 1;
        let (report, model) = oracle.solve(&matrix::atoms(matrix));

        match report {
            Report::Satisfiable => {
                if depth == 0 && self.config.witness.value {
                    self.witness = Some(model);
                }
                Ok(Report::Satisfiable)
            }

            Report::Unsatisfiable => Ok(Report::Unsatisfiable),

            Report::Unknown => Err(err::ErrorKind::from(err::OracleError::Unknown)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, structures::prefix::Quantifier::*};

    use super::*;

    fn solve(prefix: Vec<Block>, matrix: Matrix) -> Result<Report, ErrorKind> {
        Context::from_config(Config::default()).solve(&prefix, &matrix)
    }

    #[test]
    fn single_existential() {
        let prefix = vec![Block::new(Existential, vec![1])];

        assert_eq!(solve(prefix.clone(), vec![vec![1]]), Ok(Report::Satisfiable));
        assert_eq!(solve(prefix, vec![vec![1], vec![-1]]), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn counters_follow_the_solve() {
        let prefix = vec![Block::new(Universal, vec![1]), Block::new(Existential, vec![2])];
        let matrix = vec![vec![1, 2], vec![-1, -2]];

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&prefix, &matrix), Ok(Report::Satisfiable));

        assert_eq!(ctx.counters.abstractions, 1);
        assert_eq!(ctx.counters.iterations, 4);
        assert_eq!(ctx.counters.refinements, 3);
        assert_eq!(ctx.counters.max_depth, 1);
        assert!(ctx.witness().is_none());
    }

    #[test]
    fn empty_matrix_is_true() {
        assert_eq!(solve(vec![], vec![]), Ok(Report::Satisfiable));
        assert_eq!(
            solve(vec![Block::new(Universal, vec![1])], vec![]),
            Ok(Report::Satisfiable)
        );
    }

    #[test]
    fn empty_clause_is_false() {
        let prefix = vec![Block::new(Existential, vec![1]), Block::new(Universal, vec![2])];
        assert_eq!(solve(prefix, vec![vec![1], vec![]]), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn innermost_universal_is_false() {
        let prefix = vec![Block::new(Universal, vec![1])];
        assert_eq!(solve(prefix.clone(), vec![vec![1]]), Ok(Report::Unsatisfiable));

        // A tautology, still false by the innermost universal rule.
        assert_eq!(solve(prefix, vec![vec![1, -1]]), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn malformed_input_is_rejected() {
        let prefix = vec![Block::new(Existential, vec![1])];
        assert_eq!(
            solve(prefix, vec![vec![1, 0]]),
            Err(ErrorKind::Build(err::BuildError::ZeroLiteral(0)))
        );
    }
}

//! Formulas, aka. a quantifier prefix paired with a matrix.
//!
//! A formula given to a [context](crate::context) must be well formed, which is checked before any search begins:
//! - No literal is zero, and every literal is within the range of [atoms](crate::structures::atom).
//! - No block binds zero, and no atom is bound more than once.
//! - If the prefix is non-empty, every atom of the matrix is bound by some block.
//!
//! An empty prefix is permitted, in which case the matrix is read as a propositional formula.
//!
//! ```rust
//! # use otter_qbf::structures::formula::Formula;
//! # use otter_qbf::structures::prefix::{Block, Quantifier};
//! # use otter_qbf::types::err::{BuildError, ErrorKind};
//! let formula = Formula::new(
//!     vec![Block::new(Quantifier::Existential, vec![1])],
//!     vec![vec![1, 2]],
//! );
//!
//! assert_eq!(formula.check(), Err(ErrorKind::Build(BuildError::UnboundAtom(2))));
//!
//! let propositional = Formula::new(vec![], vec![vec![1, 2]]);
//! assert!(propositional.check().is_ok());
//! ```

use std::collections::HashSet;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::Literal,
        matrix::{self, Matrix},
        prefix::{self, Block, Prefix},
    },
    types::err::{self, ErrorKind},
};

/// A quantifier prefix paired with a matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The quantifier prefix, outermost block first.
    pub prefix: Prefix,

    /// The matrix.
    pub matrix: Matrix,
}

impl Formula {
    pub fn new(prefix: Prefix, matrix: Matrix) -> Self {
        Formula { prefix, matrix }
    }

    /// Checks the formula is well formed.
    /// For details, see [check].
    pub fn check(&self) -> Result<(), ErrorKind> {
        check(&self.prefix, &self.matrix)
    }

    /// The largest atom of the prefix or matrix, if some atom occurs.
    pub fn max_atom(&self) -> Option<Atom> {
        prefix::max_atom(&self.prefix).max(matrix::max_atom(&self.matrix))
    }

    /// The formula in QDIMACS form.
    pub fn as_qdimacs(&self) -> String {
        let mut qdimacs = format!(
            "p cnf {} {}\n",
            self.max_atom().unwrap_or(0),
            self.matrix.len()
        );
        for block in &self.prefix {
            qdimacs.push_str(block.to_string().as_str());
            qdimacs.push('\n');
        }
        qdimacs.push_str(matrix::as_dimacs(&self.matrix).as_str());
        qdimacs
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_qdimacs())
    }
}

/// Checks a prefix and matrix form a well formed formula, returning the first issue found.
pub fn check(prefix: &[Block], matrix: &[CClause]) -> Result<(), ErrorKind> {
    for (index, clause) in matrix.iter().enumerate() {
        for literal in clause.literals() {
            if literal == 0 {
                return Err(err::ErrorKind::from(err::BuildError::ZeroLiteral(index)));
            }
            if literal.atom() > ATOM_MAX {
                return Err(err::ErrorKind::from(err::BuildError::AtomOutOfRange));
            }
        }
    }

    let mut bound = HashSet::<Atom>::default();
    for block in prefix {
        for atom in &block.atoms {
            if *atom == 0 {
                return Err(err::ErrorKind::from(err::BuildError::ZeroAtom));
            }
            if *atom > ATOM_MAX {
                return Err(err::ErrorKind::from(err::BuildError::AtomOutOfRange));
            }
            if !bound.insert(*atom) {
                return Err(err::ErrorKind::from(err::BuildError::DuplicateBinding(
                    *atom,
                )));
            }
        }
    }

    if !prefix.is_empty() {
        for clause in matrix {
            for atom in clause.atoms() {
                if !bound.contains(&atom) {
                    return Err(err::ErrorKind::from(err::BuildError::UnboundAtom(atom)));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::prefix::Quantifier;

    #[test]
    fn zero_literal() {
        let formula = Formula::new(vec![], vec![vec![1], vec![2, 0]]);
        assert_eq!(
            formula.check(),
            Err(ErrorKind::Build(err::BuildError::ZeroLiteral(1)))
        );
    }

    #[test]
    fn out_of_range() {
        let formula = Formula::new(vec![], vec![vec![i32::MIN]]);
        assert_eq!(
            formula.check(),
            Err(ErrorKind::Build(err::BuildError::AtomOutOfRange))
        );
    }

    #[test]
    fn duplicate_binding() {
        let formula = Formula::new(
            vec![
                Block::new(Quantifier::Existential, vec![1, 2]),
                Block::new(Quantifier::Universal, vec![2]),
            ],
            vec![vec![1, 2]],
        );
        assert_eq!(
            formula.check(),
            Err(ErrorKind::Build(err::BuildError::DuplicateBinding(2)))
        );
    }

    #[test]
    fn zero_atom() {
        let formula = Formula::new(vec![Block::new(Quantifier::Universal, vec![0])], vec![]);
        assert_eq!(
            formula.check(),
            Err(ErrorKind::Build(err::BuildError::ZeroAtom))
        );
    }

    #[test]
    fn bound_atoms_absent_from_the_matrix() {
        let formula = Formula::new(
            vec![Block::new(Quantifier::Universal, vec![1, 9])],
            vec![vec![1]],
        );
        assert!(formula.check().is_ok());
        assert_eq!(formula.max_atom(), Some(9));
    }

    #[test]
    fn qdimacs() {
        let formula = Formula::new(
            vec![
                Block::new(Quantifier::Universal, vec![1]),
                Block::new(Quantifier::Existential, vec![2, 3]),
            ],
            vec![vec![1, 2], vec![-1, -3]],
        );
        assert_eq!(
            formula.as_qdimacs(),
            "p cnf 3 2\na 1 0\ne 2 3 0\n1 2 0\n-1 -3 0\n"
        );
    }
}

//! Matrices, aka. a sequence of clauses, interpreted as the conjunction of those clauses.
//!
//! ```rust
//! # use otter_qbf::structures::matrix::{self, Matrix};
//! let the_matrix: Matrix = vec![vec![3, -1], vec![1, 2], vec![-3]];
//!
//! assert_eq!(matrix::atoms(&the_matrix), vec![1, 2, 3]);
//! assert_eq!(matrix::max_atom(&the_matrix), Some(3));
//! assert!(!matrix::has_empty_clause(&the_matrix));
//! ```
//!
//! Matrices are only ever derived, never revised in place.
//! Each level of a solve receives its own matrix, and any simplification of that matrix results in a new matrix passed to the next level.

use std::collections::BTreeSet;

use super::{
    atom::Atom,
    clause::{CClause, Clause},
};

/// The canonical representation of a matrix.
pub type Matrix = Vec<CClause>;

/// The distinct atoms occurring in a matrix, in ascending order.
pub fn atoms(matrix: &[CClause]) -> Vec<Atom> {
    matrix
        .iter()
        .flat_map(|clause| clause.atoms())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The largest atom occurring in a matrix, if some atom occurs.
pub fn max_atom(matrix: &[CClause]) -> Option<Atom> {
    matrix.iter().flat_map(|clause| clause.atoms()).max()
}

/// Whether some clause of the matrix is empty, in which case the matrix is false.
pub fn has_empty_clause(matrix: &[CClause]) -> bool {
    matrix.iter().any(|clause| clause.is_empty())
}

/// The matrix in DIMACS form, one clause per line.
pub fn as_dimacs(matrix: &[CClause]) -> String {
    let mut dimacs_string = String::new();
    for clause in matrix {
        dimacs_string.push_str(clause.as_dimacs(true).as_str());
        dimacs_string.push('\n');
    }
    dimacs_string
}

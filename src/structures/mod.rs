//! Key structures, such as literals, clauses, and quantifier prefixes.
//!
//! As with most SAT libraries the representation of literals and clauses is integer based, with structure given by a handful of traits.
//!
//! # Other structures
//!
//! ## Matrices
//!
//! A [matrix] is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! The empty matrix is true, and a matrix containing the empty clause is false.
//!
//! ## Prefixes
//!
//! A [prefix] is an ordered sequence of quantifier blocks, with the first block outermost.
//! Together with a matrix a prefix forms a [formula].
//!
//! ## Assignments
//!
//! An [assignment](valuation) is a partial function from atoms to truth values.
//! The absence of an atom is distinct from the atom being false.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod matrix;
pub mod prefix;
pub mod valuation;
pub mod variable;

//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_qbf::structures::clause::{Clause, ClauseStatus};
//! # use otter_qbf::structures::valuation::Assignment;
//! let clause = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut assignment = Assignment::default();
//! assignment.insert(23, false);
//! assignment.insert(41, true);
//! assert_eq!(clause.status_on(&assignment), ClauseStatus::Undecided);
//!
//! assignment.insert(3, true);
//! assert_eq!(clause.status_on(&assignment), ClauseStatus::Violated);
//! ```
//!
//! - The empty clause is always false (never true), and is violated on every assignment.
//! - A clause removed from a matrix is a clause already satisfied, which is distinct from a clause made empty.

mod int_clause;
pub use int_clause::IntClause;

use crate::structures::{atom::Atom, literal::CLiteral, valuation::Valuation};

/// The status of a clause on some (partial) assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// No literal has been found to be true, though some literal has no value.
    Undecided,

    /// Every literal of the clause has a value, and every literal is false.
    Violated,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The status of the clause on a valuation.
    ///
    /// Literals are scanned in order, and the scan stops at the first literal which is either true or has no value.
    /// So, a clause is only violated if every literal has a value, and each value conflicts with the polarity of the literal.
    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus;

    /// Returns whether the clause is violated on the given valuation.
    fn violated_on(&self, valuation: &impl Valuation) -> bool {
        self.status_on(valuation) == ClauseStatus::Violated
    }
}

/// The canonical implementation of a clause.
pub type CClause = IntClause;

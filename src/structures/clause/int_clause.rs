//! Implementation of the clause trait for a vector of integer literals.

use crate::structures::{
    atom::Atom,
    clause::{Clause, ClauseStatus},
    literal::{CLiteral, IntLiteral, Literal},
    valuation::Valuation,
};

/// The implementation of a clause as a vector of integers.
pub type IntClause = Vec<IntLiteral>;

impl Clause for IntClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self.literals() {
            dimacs_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            dimacs_string += "0";
            dimacs_string
        } else {
            dimacs_string.pop();
            dimacs_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        for literal in self.literals() {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
                Some(_) => continue,
                None => return ClauseStatus::Undecided,
            }
        }
        ClauseStatus::Violated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Assignment;

    #[test]
    fn dimacs() {
        let clause: IntClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");

        let empty: IntClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
    }

    #[test]
    fn empty_clause_is_violated() {
        let empty: IntClause = vec![];
        assert!(empty.violated_on(&Assignment::default()));
    }

    #[test]
    fn unvalued_literal_stops_the_scan() {
        let clause: IntClause = vec![1, 2, 3];

        let mut assignment = Assignment::default();
        assignment.insert(1, false);
        assignment.insert(3, false);
        assert_eq!(clause.status_on(&assignment), ClauseStatus::Undecided);

        assignment.insert(2, true);
        assert_eq!(clause.status_on(&assignment), ClauseStatus::Satisfied);

        assignment.insert(2, false);
        assert_eq!(clause.status_on(&assignment), ClauseStatus::Violated);
    }
}

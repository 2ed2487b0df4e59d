/*!
Pure helpers for simplifying a matrix and refining an abstraction.

# Selections

A *selection* is read from a model of an [abstraction](crate::procedures::abstraction), and records for each clause of the matrix at that level whether the clause is *deferred* to the inner levels (its selector is true) or *resolved* at the level (its selector is false).

# Simplification

On a selection, the matrix for the next level keeps only the deferred clauses, and drops every literal of a kept clause bound by the current block.
Those literals are dropped regardless of their value, so:
- For an existential block, the simplified matrix is at least as strong as the matrix which follows from the chosen values of the block.
- For a universal block, the simplified matrix is at most as strong, as only clauses whose block literals are all false are deferred.

```rust
# use std::collections::HashSet;
# use otter_qbf::procedures::simplify::simplify;
let matrix = vec![vec![1, 2], vec![-1, -2], vec![1, 3]];
let block = HashSet::from([1]);

assert_eq!(simplify(&matrix, &block, &[true, false, true]), vec![vec![2], vec![3]]);
```

# Refinement

If the inner levels fail on a selection, the abstraction is refined with a blocking clause over the selectors.
- For an existential block, the deferred clauses were too many, and one must be resolved: the clause of negated deferred selectors.
- For a universal block, the deferred clauses were too few, and some other must be deferred: the clause of resolved selectors.

In either case the blocking clause also excludes every selection which would fail for the same reason, as a larger (respectively smaller) set of deferred clauses gives a stronger (respectively weaker) simplified matrix.
*/

use std::collections::HashSet;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::Literal,
    matrix::Matrix,
    prefix::Quantifier,
    variable::{SelectorPool, VarLiteral},
};

/// The literals of `clause` whose atoms are bound by `block`, in order.
pub fn project(clause: &CClause, block: &HashSet<Atom>) -> CClause {
    clause
        .literals()
        .filter(|literal| block.contains(&literal.atom()))
        .collect()
}

/// The literals of `clause` whose atoms are not bound by `block`, in order.
pub fn residue(clause: &CClause, block: &HashSet<Atom>) -> CClause {
    clause
        .literals()
        .filter(|literal| !block.contains(&literal.atom()))
        .collect()
}

/// The matrix for the next level, keeping the residue of each deferred clause.
pub fn simplify(matrix: &[CClause], block: &HashSet<Atom>, deferred: &[bool]) -> Matrix {
    debug_assert_eq!(matrix.len(), deferred.len());

    matrix
        .iter()
        .zip(deferred)
        .filter(|(_, deferred)| **deferred)
        .map(|(clause, _)| residue(clause, block))
        .collect()
}

/// The clause which blocks a failed selection.
pub fn blocking_clause(
    quantifier: Quantifier,
    pool: &SelectorPool,
    deferred: &[bool],
) -> Vec<VarLiteral> {
    debug_assert_eq!(pool.count(), deferred.len());

    let selectors = deferred.iter().enumerate();
    match quantifier {
        Quantifier::Existential => selectors
            .filter(|(_, deferred)| **deferred)
            .map(|(index, _)| VarLiteral::new(pool.selector(index), false))
            .collect(),

        Quantifier::Universal => selectors
            .filter(|(_, deferred)| !**deferred)
            .map(|(index, _)| VarLiteral::new(pool.selector(index), true))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_and_residue_partition() {
        let block = HashSet::from([1, 3]);
        let clause = vec![-3, 2, 1, -4];

        assert_eq!(project(&clause, &block), vec![-3, 1]);
        assert_eq!(residue(&clause, &block), vec![2, -4]);
    }

    #[test]
    fn simplification_may_empty_a_clause() {
        let matrix = vec![vec![1], vec![2]];
        let block = HashSet::from([1]);

        assert_eq!(simplify(&matrix, &block, &[true, false]), vec![Vec::<i32>::new()]);
        assert!(simplify(&matrix, &block, &[false, false]).is_empty());
    }

    #[test]
    fn existential_blocking() {
        let pool = SelectorPool::new(0, 10, 3).unwrap();
        let clause = blocking_clause(Quantifier::Existential, &pool, &[true, false, true]);

        let flat = clause.into_iter().map(|l| pool.literal_of(l)).collect::<Vec<_>>();
        assert_eq!(flat, vec![-10, -12]);
    }

    #[test]
    fn universal_blocking() {
        let pool = SelectorPool::new(0, 10, 3).unwrap();
        let clause = blocking_clause(Quantifier::Universal, &pool, &[true, false, false]);

        let flat = clause.into_iter().map(|l| pool.literal_of(l)).collect::<Vec<_>>();
        assert_eq!(flat, vec![11, 12]);

        let everything_deferred = blocking_clause(Quantifier::Universal, &pool, &[true; 3]);
        assert!(everything_deferred.is_empty());
    }
}

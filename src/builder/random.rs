/*!
Random formulas, for testing and exploration.

A [RandomFormula] fixes the shape of a formula, and [generate](RandomFormula::generate) draws a formula of that shape from some source of randomness.
With a seeded source, such as [MinimalPCG32](crate::generic::random::MinimalPCG32), the formula is fixed by the seed.

The shape:
- Atoms 1 to *atoms* are split into *blocks* contiguous, non-empty blocks, with quantifiers alternating so the innermost block is existential.
- Each of the *clauses* clauses contains *width* literals over distinct atoms, and so no clause is a tautology.

```rust
# use otter_qbf::builder::random::RandomFormula;
# use otter_qbf::generic::random::MinimalPCG32;
# use otter_qbf::structures::prefix::Quantifier;
let shape = RandomFormula { atoms: 6, blocks: 3, clauses: 8, width: 3 };
let formula = shape.generate(&mut MinimalPCG32::from_u64(73));

assert_eq!(formula.prefix.len(), 3);
assert_eq!(formula.prefix[0].quantifier, Quantifier::Existential);
assert_eq!(formula.prefix[1].quantifier, Quantifier::Universal);
assert_eq!(formula.matrix.len(), 8);
assert!(formula.check().is_ok());

assert_eq!(formula, shape.generate(&mut MinimalPCG32::from_u64(73)));
```
*/

use rand::Rng;

use crate::structures::{
    atom::Atom,
    clause::CClause,
    formula::Formula,
    literal::{CLiteral, Literal},
    prefix::{Block, Quantifier},
};

/// The shape of a random formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomFormula {
    /// The count of atoms, each of which is bound by some block.
    pub atoms: Atom,

    /// The count of blocks, at most the count of atoms.
    pub blocks: usize,

    /// The count of clauses.
    pub clauses: usize,

    /// The count of literals in each clause, at most the count of atoms.
    pub width: usize,
}

impl Default for RandomFormula {
    fn default() -> Self {
        RandomFormula {
            atoms: 8,
            blocks: 3,
            clauses: 16,
            width: 3,
        }
    }
}

impl RandomFormula {
    /// A formula of the shape, drawn from `rng`.
    ///
    /// If there are no atoms the formula is empty, and so true.
    pub fn generate(&self, rng: &mut impl Rng) -> Formula {
        if self.atoms == 0 {
            return Formula::default();
        }

        let atom_count = self.atoms as usize;
        let block_count = self.blocks.clamp(1, atom_count);
        let width = self.width.min(atom_count);

        let mut sizes = vec![1; block_count];
        for _ in block_count..atom_count {
            sizes[rng.random_range(0..block_count)] += 1;
        }

        let mut prefix = Vec::with_capacity(block_count);
        let mut next_atom: Atom = 1;
        for (index, size) in sizes.into_iter().enumerate() {
            let quantifier = match (block_count - 1 - index) % 2 {
                0 => Quantifier::Existential,
                _ => Quantifier::Universal,
            };
            let atoms = (next_atom..next_atom + size as Atom).collect();
            next_atom += size as Atom;
            prefix.push(Block::new(quantifier, atoms));
        }

        let mut matrix = Vec::with_capacity(self.clauses);
        for _ in 0..self.clauses {
            let mut clause: CClause = Vec::with_capacity(width);
            while clause.len() < width {
                let atom = rng.random_range(1..=self.atoms);
                if clause.iter().any(|literal| literal.atom() == atom) {
                    continue;
                }
                clause.push(CLiteral::new(atom, rng.random_bool(0.5)));
            }
            matrix.push(clause);
        }

        Formula::new(prefix, matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generic::random::MinimalPCG32, structures::clause::Clause};

    #[test]
    fn shape() {
        let shape = RandomFormula {
            atoms: 10,
            blocks: 4,
            clauses: 20,
            width: 4,
        };

        for seed in 0..16 {
            let formula = shape.generate(&mut MinimalPCG32::from_u64(seed));

            assert!(formula.check().is_ok());
            assert_eq!(formula.prefix.len(), 4);
            assert_eq!(formula.prefix.last().map(|b| b.quantifier), Some(Quantifier::Existential));
            assert_eq!(formula.prefix.iter().map(|b| b.atoms.len()).sum::<usize>(), 10);
            assert!(formula.matrix.iter().all(|clause| clause.size() == 4));
        }
    }

    #[test]
    fn clamped() {
        let shape = RandomFormula {
            atoms: 2,
            blocks: 5,
            clauses: 3,
            width: 7,
        };
        let formula = shape.generate(&mut MinimalPCG32::from_u64(1));

        assert_eq!(formula.prefix.len(), 2);
        assert_eq!(formula.prefix[0].quantifier, Quantifier::Universal);
        assert!(formula.matrix.iter().all(|clause| clause.size() == 2));
    }

    #[test]
    fn no_atoms() {
        let shape = RandomFormula {
            atoms: 0,
            ..Default::default()
        };
        assert_eq!(shape.generate(&mut MinimalPCG32::from_u64(1)), Formula::default());
    }
}

/*!
Variables of an abstraction, tagged by origin.

An abstraction built at some level of a solve ranges over two kinds of variable:
- The atoms bound by the block at that level, which are [Var::Problem] variables.
- One selector for each clause of the matrix at that level, which are [Var::Selector] variables.

Within a solve variables are kept tagged, and are flattened to atoms only when clauses are handed to an [oracle](crate::oracle), as oracles work with integer literals.

Flattening is relative to a [SelectorPool], which maps the selector with index *i* to the atom *watermark + i*.
The watermark is strictly above every problem atom, and so a selector never collides with a problem atom.
Selectors of different levels may share atoms, as the selectors of a level are only ever seen by the oracle of that level.

```rust
# use otter_qbf::structures::variable::{SelectorPool, Var, VarLiteral};
let pool = SelectorPool::new(2, 10, 3).unwrap();

assert_eq!(pool.atom_of(Var::Problem(4)), 4);
assert_eq!(pool.atom_of(pool.selector(2)), 12);

let not_selector = VarLiteral::new(pool.selector(1), false);
assert_eq!(pool.literal_of(not_selector), -11);
assert_eq!(pool.atoms().collect::<Vec<_>>(), vec![10, 11, 12]);
```
*/

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A variable of an abstraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Var {
    /// An atom of the formula given to a context.
    Problem(Atom),

    /// The selector for the clause at `index` of the matrix at `level`.
    Selector { level: usize, index: usize },
}

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VarLiteral {
    /// The variable of the literal.
    pub var: Var,

    /// The polarity of the literal.
    pub polarity: bool,
}

impl VarLiteral {
    pub fn new(var: Var, polarity: bool) -> Self {
        VarLiteral { var, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        VarLiteral {
            var: self.var,
            polarity: !self.polarity,
        }
    }
}

impl From<CLiteral> for VarLiteral {
    fn from(literal: CLiteral) -> Self {
        VarLiteral {
            var: Var::Problem(literal.atom()),
            polarity: literal.polarity(),
        }
    }
}

/// The selectors of some level, and the atoms they flatten to.
#[derive(Clone, Copy, Debug)]
pub struct SelectorPool {
    level: usize,
    watermark: Atom,
    count: usize,
}

impl SelectorPool {
    /// A pool of `count` selectors for `level`, flattened to atoms from `watermark`.
    ///
    /// Fails if some selector would be flattened to an atom above [ATOM_MAX].
    pub fn new(level: usize, watermark: Atom, count: usize) -> Result<Self, ErrorKind> {
        let last = (watermark as u64) + (count as u64);
        if watermark == 0 || last > (ATOM_MAX as u64) + 1 {
            return Err(err::ErrorKind::AtomsExhausted);
        }
        Ok(SelectorPool {
            level,
            watermark,
            count,
        })
    }

    /// The selector for the clause at `index`.
    pub fn selector(&self, index: usize) -> Var {
        debug_assert!(index < self.count);
        Var::Selector {
            level: self.level,
            index,
        }
    }

    /// The number of selectors in the pool.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The atom a variable is flattened to.
    pub fn atom_of(&self, var: Var) -> Atom {
        match var {
            Var::Problem(atom) => atom,
            Var::Selector { level, index } => {
                debug_assert_eq!(level, self.level);
                self.watermark + index as Atom
            }
        }
    }

    /// The integer literal a literal is flattened to.
    pub fn literal_of(&self, literal: VarLiteral) -> CLiteral {
        CLiteral::new(self.atom_of(literal.var), literal.polarity)
    }

    /// The atoms of the selectors in the pool, in index order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        (0..self.count).map(|index| self.atom_of(self.selector(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_pool() {
        assert!(SelectorPool::new(0, ATOM_MAX, 1).is_ok());
        assert_eq!(
            SelectorPool::new(0, ATOM_MAX, 2).err(),
            Some(ErrorKind::AtomsExhausted)
        );
    }

    #[test]
    fn negation_keeps_variable() {
        let literal = VarLiteral::from(-5);
        assert_eq!(literal.var, Var::Problem(5));
        assert!(!literal.polarity);
        assert!(literal.negate().polarity);
    }
}

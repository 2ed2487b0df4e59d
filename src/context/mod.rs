/*!
The context --- within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [oracle](crate::oracle) used to solve abstractions, and a [Context] is a generic context using the reference [Backtracking] oracle.
As the oracle is a type parameter, the procedures of a solve depend only on the [Oracle] trait and never on a particular oracle.

A context is configured once, and may then be used for any number of solves.
No state is carried between solves, other than configuration, and so the result of a solve is determined by the prefix and matrix given.

# Example
```rust
# use otter_qbf::context::{Context, DpllContext};
# use otter_qbf::config::Config;
# use otter_qbf::reports::Report;
# use otter_qbf::structures::prefix::{Block, Quantifier};
let mut the_context = Context::from_config(Config::default());

let prefix = vec![Block::new(Quantifier::Existential, vec![1, 2])];
let matrix = vec![vec![1, 2], vec![-1]];

assert_eq!(the_context.solve(&prefix, &matrix), Ok(Report::Satisfiable));

let witness = the_context.witness().unwrap();
assert_eq!(witness.get(&1), Some(&false));
assert_eq!(witness.get(&2), Some(&true));

let mut dpll_context = DpllContext::from_config(Config::default());
assert_eq!(dpll_context.solve(&prefix, &matrix), Ok(Report::Satisfiable));
```
*/

mod counters;
pub use counters::Counters;

use std::marker::PhantomData;

use crate::{
    config::Config,
    oracle::{Backtracking, Dpll, Oracle},
    structures::valuation::Assignment,
};

/// A generic context, parameratised to an oracle.
///
/// Requires an [Oracle] which (also) implements [Default], as a fresh oracle is made for each abstraction.
pub struct GenericContext<O: Oracle + Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent solve.
    pub counters: Counters,

    /// A model of the innermost block from the most recent solve, if recorded.
    pub(crate) witness: Option<Assignment>,

    oracle: PhantomData<O>,
}

/// A context which uses [Backtracking] as an oracle.
pub type Context = GenericContext<Backtracking>;

/// A context which uses [Dpll] as an oracle.
pub type DpllContext = GenericContext<Dpll>;

impl<O: Oracle + Default> GenericContext<O> {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            witness: None,
            oracle: PhantomData,
        }
    }

    /// A model of the atoms of the matrix, if the most recent solve was decided satisfiable by the oracle without recursion through the prefix.
    ///
    /// That is, if the prefix is empty or a single existential block, and [witness](crate::config::Config::witness) is configured.
    pub fn witness(&self) -> Option<&Assignment> {
        self.witness.as_ref()
    }
}

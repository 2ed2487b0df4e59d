/*!
Tools for building a formula.

A formula is a [prefix](crate::structures::prefix) paired with a [matrix](crate::structures::matrix), and may be built:
- Directly, from blocks and clauses, as the canonical structures are plain vectors.
- From a QDIMACS file, with [read_qdimacs](crate::structures::formula::Formula::read_qdimacs).
- At random, with a [RandomFormula](random::RandomFormula).

# Examples

A formula built directly.

```rust
# use otter_qbf::context::Context;
# use otter_qbf::config::Config;
# use otter_qbf::reports::Report;
# use otter_qbf::structures::formula::Formula;
# use otter_qbf::structures::prefix::{Block, Quantifier};
let formula = Formula::new(
    vec![
        Block::new(Quantifier::Universal, vec![1]),
        Block::new(Quantifier::Existential, vec![2, 3]),
    ],
    vec![vec![1, 2], vec![-1, 3], vec![-2, -3]],
);

let mut the_context = Context::from_config(Config::default());
assert_eq!(the_context.solve_formula(&formula), Ok(Report::Satisfiable));
```

A formula read from QDIMACS and written back.

```rust
# use otter_qbf::structures::formula::Formula;
let qdimacs = b"
c A comment
p cnf 3 1
a 1 0
e 2 3 0
1 2 -3 0
";

let formula = Formula::read_qdimacs(qdimacs.as_slice()).unwrap();
assert_eq!(formula.as_qdimacs(), "p cnf 3 1\na 1 0\ne 2 3 0\n1 2 -3 0\n");
```
*/

mod qdimacs;
pub mod random;

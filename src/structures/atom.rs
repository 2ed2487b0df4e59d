/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a positive u32 *u*, and the atom *u* appears in a formula through the literals *u* and *-u*.
So, atoms are bounded by the largest magnitude of a (non-zero) 32-bit integer.

```rust
# use otter_qbf::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

Atoms are partitioned between:
- *Problem* atoms, which appear in the prefix or matrix given to a context.
- *Selector* atoms, which are minted during a solve, strictly above every problem atom.

For details on selectors, see [variable](crate::structures::variable).

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is an [Assignment], an ordered map from atoms to booleans.
An atom absent from the map has no value, which is distinct from the atom having the value false.

```rust
# use otter_qbf::structures::valuation::{Assignment, Valuation};
let mut assignment = Assignment::default();
assignment.insert(1, false);
assignment.insert(3, true);

assert_eq!(assignment.value_of(1), Some(false));
assert_eq!(assignment.value_of(2), None);
assert_eq!(assignment.as_dimacs(false), "-1 3");
```

Assignments are both the model returned by an [oracle](crate::oracle) and the working state of the reference backtracking search.
As the map is ordered, iteration (and so any string representation) is in atom order.
*/

use std::collections::BTreeMap;

use super::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a (partial) valuation.
pub type Assignment = BTreeMap<Atom, bool>;

/// A valuation is something which may store some value of an atom.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal under the valuation, if the atom of the literal has a value.
    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The valuation as literals, in atom order.
    fn literals(&self) -> Vec<CLiteral>;

    /// The valuation in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .literals()
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push('0');
        }
        dimacs_string
    }
}

impl Valuation for Assignment {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(&atom).copied()
    }

    fn literals(&self) -> Vec<CLiteral> {
        self.iter()
            .map(|(atom, value)| CLiteral::new(*atom, *value))
            .collect()
    }
}

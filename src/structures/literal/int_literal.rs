use crate::structures::atom::Atom;

use super::Literal;

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_polarity() {
        let p = IntLiteral::new(3, true);
        let not_p = IntLiteral::new(3, false);

        assert_eq!(p, 3);
        assert_eq!(not_p, -3);
        assert_eq!(p.negate(), not_p);
        assert_eq!(not_p.atom(), 3);
        assert!(!not_p.polarity());
        assert_eq!(not_p.as_int(), -3);
    }
}

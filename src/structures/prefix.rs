//! Quantifier prefixes, aka. an ordered sequence of quantifier blocks.
//!
//! A block pairs a [Quantifier] with a collection of atoms bound by the quantifier, and the first block of a prefix is outermost.
//!
//! ```rust
//! # use otter_qbf::structures::prefix::{Block, Prefix, Quantifier};
//! let prefix: Prefix = vec![
//!     Block::new(Quantifier::Universal, vec![1, 2]),
//!     Block::new(Quantifier::Existential, vec![3]),
//! ];
//!
//! assert!(prefix[0].binds(2));
//! assert!(!prefix[0].binds(3));
//! assert_eq!(prefix[1].to_string(), "e 3 0");
//! assert_eq!(Quantifier::try_from('a'), Ok(Quantifier::Universal));
//! ```
//!
//! The order of atoms within a block does not affect the truth of a formula, though it does fix the order in which an oracle is asked to consider the atoms.

use super::atom::Atom;

/// A quantifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// ∃, written 'e'.
    Existential,

    /// ∀, written 'a'.
    Universal,
}

impl Quantifier {
    /// The character used for the quantifier in QDIMACS.
    pub fn as_char(&self) -> char {
        match self {
            Self::Existential => 'e',
            Self::Universal => 'a',
        }
    }

    /// The dual of the quantifier.
    pub fn dual(&self) -> Self {
        match self {
            Self::Existential => Self::Universal,
            Self::Universal => Self::Existential,
        }
    }
}

impl TryFrom<char> for Quantifier {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'e' => Ok(Self::Existential),
            'a' => Ok(Self::Universal),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Existential => write!(f, "∃"),
            Self::Universal => write!(f, "∀"),
        }
    }
}

/// A quantifier paired with the atoms bound by the quantifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The quantifier of the block.
    pub quantifier: Quantifier,

    /// The atoms bound by the block.
    pub atoms: Vec<Atom>,
}

impl Block {
    /// A block binding `atoms` with `quantifier`.
    pub fn new(quantifier: Quantifier, atoms: Vec<Atom>) -> Self {
        Block { quantifier, atoms }
    }

    /// Whether the block binds `atom`.
    pub fn binds(&self, atom: Atom) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn is_existential(&self) -> bool {
        self.quantifier == Quantifier::Existential
    }

    pub fn is_universal(&self) -> bool {
        self.quantifier == Quantifier::Universal
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.quantifier.as_char())?;
        for atom in &self.atoms {
            write!(f, " {atom}")?;
        }
        write!(f, " 0")
    }
}

/// The canonical representation of a prefix.
pub type Prefix = Vec<Block>;

/// The largest atom bound by some block of the prefix, if some atom is bound.
pub fn max_atom(prefix: &[Block]) -> Option<Atom> {
    prefix
        .iter()
        .flat_map(|block| block.atoms.iter().copied())
        .max()
}

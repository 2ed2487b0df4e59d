//! Error types used in the library.
//!
//! - Build errors are contract violations by the caller, e.g. a literal of zero, and are raised before any search begins.
//! - Oracle errors are raised when an oracle fails to determine satisfiability.
//!   A context has no sound interpretation of such a failure, and so the solve is abandoned.
//! - Parse errors are raised when reading a formula.
//!
//! Failed iterations of a CEGAR loop are not errors, as these drive refinement of an abstraction.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Oracle(OracleError),
    Parse(ParseError),

    /// There are no more fresh atoms for selectors.
    AtomsExhausted,

    /// A procedure was called in some state it does not support.
    InvalidState,
}

/// Noted errors when checking a formula given to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The matrix contains the literal zero, noted by the index of the clause containing the literal.
    ZeroLiteral(usize),

    /// The prefix binds the atom zero.
    ZeroAtom,

    /// Some literal is outside the range of representable atoms.
    AtomOutOfRange,

    /// An atom of the matrix is not bound by any block of a non-empty prefix.
    UnboundAtom(Atom),

    /// An atom is bound more than once by the prefix.
    DuplicateBinding(Atom),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors from an oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The oracle could not determine satisfiability.
    Unknown,
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a QDIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A quantifier line after the first clause, noted by line.
    MisplacedQuantifier(usize),

    /// A quantifier line without a terminating zero, noted by line.
    UnterminatedLine(usize),

    /// Something other than an integer where a literal was expected, noted by line.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(BuildError::ZeroLiteral(index)) => {
                write!(f, "Clause {index} contains the literal zero")
            }
            Self::Build(BuildError::ZeroAtom) => write!(f, "The prefix binds the atom zero"),
            Self::Build(BuildError::AtomOutOfRange) => write!(f, "A literal is out of range"),
            Self::Build(BuildError::UnboundAtom(atom)) => {
                write!(f, "Atom {atom} is not bound by the prefix")
            }
            Self::Build(BuildError::DuplicateBinding(atom)) => {
                write!(f, "Atom {atom} is bound more than once")
            }
            Self::Oracle(OracleError::Unknown) => write!(f, "The oracle returned unknown"),
            Self::Parse(ParseError::ProblemSpecification) => {
                write!(f, "Malformed problem specification")
            }
            Self::Parse(ParseError::Line(line)) => write!(f, "Failed to read line {line}"),
            Self::Parse(ParseError::MisplacedQuantifier(line)) => {
                write!(f, "Quantifier after the first clause, on line {line}")
            }
            Self::Parse(ParseError::UnterminatedLine(line)) => {
                write!(f, "Quantifier line {line} is not terminated by 0")
            }
            Self::Parse(ParseError::Literal(line)) => write!(f, "Invalid literal on line {line}"),
            Self::AtomsExhausted => write!(f, "No fresh atoms remain for selectors"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

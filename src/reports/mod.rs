/*!
Reports for the context, and from oracles.
*/

/// High-level reports regarding a solve.
///
/// Both oracles and contexts report with this structure.
/// Though, `Unknown` is only ever reported by an incomplete oracle, and a context reports `Unknown` from an oracle as an [error](crate::types::err::OracleError::Unknown).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable (or, for a quantified formula, true).
    Satisfiable,

    /// The formula is unsatisfiable (or, for a quantified formula, false).
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

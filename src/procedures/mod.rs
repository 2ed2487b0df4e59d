//! Procedures for determining the truth of a formula.
//!
//! The [solve](solve) procedure is a method accessed via a context, and is primarily placed here for documentation.
//! The [abstraction] and [simplification](simplify) used at each level of a solve are free of any context.

pub mod abstraction;
pub mod simplify;
pub mod solve;

//! A library for determining the truth of quantified boolean formulas.
//!
//! otter_qbf decides quantified boolean formulas (QBF) given as a quantifier prefix over a matrix in conjunctive normal form.
//! The procedure is counterexample guided abstraction refinement (CEGAR), applied block-by-block through the prefix, and at each block relies on a propositional [oracle] to propose candidate moves.
//!
//! # Orientation
//!
//! The library is designed around a [context], built from a [configuration](crate::config).
//! A context is generic over the [Oracle](crate::oracle::Oracle) used to solve abstractions, and a reference (exhaustive backtracking) oracle is used by the [Context](crate::context::Context) alias.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the recursion through the prefix.
//! - The [abstraction](crate::procedures::abstraction) built at each block, and the [helpers](crate::procedures::simplify) used to simplify a matrix and refine an abstraction.
//! - The [structures] to familiarise yourself with literals, clauses, prefixes, etc.
//! - The [oracles](crate::oracle) to see the propositional contract a solve depends on.
//!
//! # Examples
//!
//! + ∀x1 ∃x2 . (x1 ∨ x2) ∧ (¬x1 ∨ ¬x2) is true, as x2 may always be chosen to be ¬x1.
//!
//! ```rust
//! # use otter_qbf::config::Config;
//! # use otter_qbf::context::Context;
//! # use otter_qbf::reports::Report;
//! use otter_qbf::structures::prefix::{Block, Quantifier};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let prefix = vec![
//!     Block::new(Quantifier::Universal, vec![1]),
//!     Block::new(Quantifier::Existential, vec![2]),
//! ];
//! let matrix = vec![vec![1, 2], vec![-1, -2]];
//!
//! assert_eq!(the_context.solve(&prefix, &matrix), Ok(Report::Satisfiable));
//! ```
//!
//! + Swapping the quantifiers gives a false formula, as no single value for x1 works for both values of x2.
//!
//! ```rust
//! # use otter_qbf::config::Config;
//! # use otter_qbf::context::Context;
//! # use otter_qbf::reports::Report;
//! # use otter_qbf::structures::prefix::{Block, Quantifier};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let prefix = vec![
//!     Block::new(Quantifier::Existential, vec![1]),
//!     Block::new(Quantifier::Universal, vec![2]),
//! ];
//! let matrix = vec![vec![1, 2], vec![-1, -2]];
//!
//! assert_eq!(the_context.solve(&prefix, &matrix), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Parse and solve a QDIMACS formula.
//!
//! ```rust
//! # use otter_qbf::context::Context;
//! # use otter_qbf::config::Config;
//! # use otter_qbf::reports::Report;
//! # use otter_qbf::structures::formula::Formula;
//! let qdimacs = b"
//! p cnf 2 2
//! a 1 0
//! e 2 0
//!  1  2 0
//! -1 -2 0
//! ";
//!
//! let formula = Formula::read_qdimacs(qdimacs.as_slice()).unwrap();
//!
//! let mut the_context = Context::from_config(Config::default());
//! assert_eq!(the_context.solve_formula(&formula), Ok(Report::Satisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout a solve, with targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to refinement of an abstraction can be filtered with `RUST_LOG=refinement …` or,
//! - Logs of each oracle call can be found with `RUST_LOG=oracle=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod oracle;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;

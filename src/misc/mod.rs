//! Miscellaneous things.

pub mod log;

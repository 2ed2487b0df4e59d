//! Generic structures, independent of quantified formulas.

pub mod random;

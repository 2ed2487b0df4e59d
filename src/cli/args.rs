use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use otter_qbf::builder::random::RandomFormula;

/// The oracle used to solve abstractions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OracleChoice {
    /// Exhaustive backtracking over the atoms of interest.
    #[default]
    Backtracking,

    /// Unit propagation with chronological backtracking.
    Dpll,
}

/// Determines whether a quantified boolean formula is true or false.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The QDIMACS file to parse.
    pub path: Option<PathBuf>,

    /// Solve a random formula, generated from the given seed, in place of a file.
    #[arg(long, value_name = "SEED", conflicts_with = "path")]
    pub random: Option<u64>,

    /// The count of atoms in a random formula.
    #[arg(long, requires = "random")]
    pub atoms: Option<u32>,

    /// The count of blocks in a random formula.
    #[arg(long, requires = "random")]
    pub blocks: Option<usize>,

    /// The count of clauses in a random formula.
    #[arg(long, requires = "random")]
    pub clauses: Option<usize>,

    /// The count of literals in each clause of a random formula.
    #[arg(long, requires = "random")]
    pub width: Option<usize>,

    /// The oracle used to solve abstractions.
    #[arg(long, value_enum, default_value_t = OracleChoice::Backtracking)]
    pub oracle: OracleChoice,

    /// Display a model of the formula, if one is recorded.
    #[arg(short, long)]
    pub model: bool,

    /// Resolve clauses local to an existential block at that block.
    #[arg(long)]
    pub local_clauses: bool,

    /// Display counters from the solve.
    #[arg(short, long)]
    pub stats: bool,
}

impl Args {
    /// The shape of a random formula, with defaults for any count not given.
    pub fn random_shape(&self) -> RandomFormula {
        let default = RandomFormula::default();
        RandomFormula {
            atoms: self.atoms.unwrap_or(default.atoms),
            blocks: self.blocks.unwrap_or(default.blocks),
            clauses: self.clauses.unwrap_or(default.clauses),
            width: self.width.unwrap_or(default.width),
        }
    }
}

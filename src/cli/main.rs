#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_qbf::{
    config::Config,
    context::{Context, DpllContext, GenericContext},
    generic::random::MinimalPCG32,
    oracle::Oracle,
    reports::Report,
    structures::{formula::Formula, valuation::Valuation},
};

mod args;
mod read;

use args::{Args, OracleChoice};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::default();
    if args.local_clauses {
        if let Err((min, max)) = config.local_clauses.set(true) {
            println!("c {} must be between {min} and {max}", config.local_clauses.name);
            std::process::exit(1);
        }
    }

    let formula = match (&args.path, args.random) {
        (_, Some(seed)) => {
            println!("c Generating a random formula from seed {seed}");
            args.random_shape().generate(&mut MinimalPCG32::from_u64(seed))
        }

        (Some(path), None) => {
            println!("c Reading QDIMACS file from {path:?}");
            match read::read_formula(path) {
                Ok(formula) => formula,
                Err(e) => {
                    println!("c Parse error: {e}");
                    std::process::exit(1);
                }
            }
        }

        (None, None) => {
            println!("c Path to QDIMACS file required");
            std::process::exit(1);
        }
    };

    println!(
        "c {} blocks, {} clauses",
        formula.prefix.len(),
        formula.matrix.len()
    );

    match args.oracle {
        OracleChoice::Backtracking => run(Context::from_config(config), &formula, &args),
        OracleChoice::Dpll => run(DpllContext::from_config(config), &formula, &args),
    }
}

fn run<O: Oracle + Default>(mut ctx: GenericContext<O>, formula: &Formula, args: &Args) {
    let result = match ctx.solve_formula(formula) {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if args.stats {
        println!("c Abstractions: {}", ctx.counters.abstractions);
        println!("c Iterations:   {}", ctx.counters.iterations);
        println!("c Oracle calls: {}", ctx.counters.oracle_calls);
        println!("c Refinements:  {}", ctx.counters.refinements);
        println!("c Depth:        {}", ctx.counters.max_depth);
        println!("c Time:         {:.2?}", ctx.counters.time);
    }

    println!("s {result}");

    if result == Report::Satisfiable && args.model {
        match ctx.witness() {
            Some(witness) => println!("v {}", witness.as_dimacs(true)),
            None => println!("c No model is recorded when the prefix requires recursion"),
        }
    }
}

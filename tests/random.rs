use otter_qbf::{
    builder::random::RandomFormula,
    config::Config,
    context::{Context, DpllContext},
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{
        clause::{CClause, Clause, ClauseStatus},
        formula::Formula,
        prefix::{Block, Quantifier},
        valuation::Assignment,
    },
};

/// The truth of the formula, by expansion of every block over every value of its atoms.
fn expansion(prefix: &[Block], matrix: &[CClause], assignment: &mut Assignment) -> bool {
    let Some((block, rest)) = prefix.split_first() else {
        return matrix
            .iter()
            .all(|clause| clause.status_on(assignment) == ClauseStatus::Satisfied);
    };

    expand_block(block, &block.atoms, rest, matrix, assignment)
}

fn expand_block(
    block: &Block,
    atoms: &[u32],
    rest: &[Block],
    matrix: &[CClause],
    assignment: &mut Assignment,
) -> bool {
    let Some((atom, remaining)) = atoms.split_first() else {
        return expansion(rest, matrix, assignment);
    };

    let mut values = [false, true].into_iter().map(|value| {
        assignment.insert(*atom, value);
        let result = expand_block(block, remaining, rest, matrix, assignment);
        assignment.remove(atom);
        result
    });

    match block.quantifier {
        Quantifier::Existential => values.any(|result| result),
        Quantifier::Universal => values.all(|result| result),
    }
}

fn expected(shape: &RandomFormula, seed: u64) -> (Formula, Report) {
    let formula = shape.generate(&mut MinimalPCG32::from_u64(seed));
    let truth = expansion(&formula.prefix, &formula.matrix, &mut Assignment::default());
    let report = match truth {
        true => Report::Satisfiable,
        false => Report::Unsatisfiable,
    };
    (formula, report)
}

mod cross_check {

    use super::*;

    fn check_shape(shape: RandomFormula, seeds: std::ops::Range<u64>) {
        let mut local_config = Config::default();
        assert!(local_config.local_clauses.set(true).is_ok());

        for seed in seeds {
            let (formula, report) = expected(&shape, seed);

            let mut ctx = Context::from_config(Config::default());
            assert_eq!(ctx.solve_formula(&formula), Ok(report), "seed {seed}\n{formula}");

            let mut ctx = DpllContext::from_config(Config::default());
            assert_eq!(ctx.solve_formula(&formula), Ok(report), "seed {seed}\n{formula}");

            let mut ctx = Context::from_config(local_config.clone());
            assert_eq!(ctx.solve_formula(&formula), Ok(report), "seed {seed}\n{formula}");
        }
    }

    #[test]
    fn two_blocks() {
        let shape = RandomFormula {
            atoms: 4,
            blocks: 2,
            clauses: 5,
            width: 2,
        };
        check_shape(shape, 0..64);
    }

    #[test]
    fn three_blocks() {
        let shape = RandomFormula {
            atoms: 6,
            blocks: 3,
            clauses: 8,
            width: 3,
        };
        check_shape(shape, 0..64);
    }

    #[test]
    fn four_blocks() {
        let shape = RandomFormula {
            atoms: 7,
            blocks: 4,
            clauses: 10,
            width: 3,
        };
        check_shape(shape, 0..48);
    }
}

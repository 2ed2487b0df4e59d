use otter_qbf::{
    builder::random::RandomFormula,
    generic::random::MinimalPCG32,
    oracle::{Backtracking, Dpll, Oracle},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseStatus},
        matrix,
        valuation::{Assignment, Valuation},
    },
};

/// The least model of `clauses` over `atoms`, ordered with earlier atoms more significant and false before true.
fn least_model(clauses: &[CClause], atoms: &[Atom]) -> Option<Assignment> {
    let count = atoms.len();
    for pattern in 0..(1_u64 << count) {
        let assignment = atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (*atom, (pattern >> (count - 1 - index)) & 1 == 1))
            .collect::<Assignment>();

        if clauses
            .iter()
            .all(|clause| clause.status_on(&assignment) == ClauseStatus::Satisfied)
        {
            return Some(assignment);
        }
    }
    None
}

fn random_clauses(seed: u64, atoms: Atom, clauses: usize) -> Vec<CClause> {
    let shape = RandomFormula {
        atoms,
        blocks: 1,
        clauses,
        width: 3,
    };
    shape.generate(&mut MinimalPCG32::from_u64(seed)).matrix
}

mod reference {

    use super::*;

    #[test]
    fn least_model_in_ascending_order() {
        for seed in 0..64 {
            let clauses = random_clauses(seed, 8, 30);
            let atoms = matrix::atoms(&clauses);

            let mut oracle = Backtracking::default();
            oracle.add_clauses(clauses.clone());

            let (report, model) = oracle.solve(&atoms);

            match least_model(&clauses, &atoms) {
                Some(least) => {
                    assert_eq!(report, Report::Satisfiable);
                    assert_eq!(model, least);
                }
                None => assert_eq!(report, Report::Unsatisfiable),
            }
        }
    }

    #[test]
    fn least_model_in_given_order() {
        for seed in 0..32 {
            let clauses = random_clauses(seed, 6, 16);
            let mut atoms = matrix::atoms(&clauses);
            atoms.reverse();

            let mut oracle = Backtracking::default();
            oracle.add_clauses(clauses.clone());

            let (report, model) = oracle.solve(&atoms);
            match least_model(&clauses, &atoms) {
                Some(least) => {
                    assert_eq!(report, Report::Satisfiable);
                    assert_eq!(model, least);
                }
                None => assert_eq!(report, Report::Unsatisfiable),
            }
        }
    }

    #[test]
    fn atoms_outside_of_clauses() {
        let mut oracle = Backtracking::default();
        oracle.add_clause(vec![2]);

        let (report, model) = oracle.solve(&[1, 2, 5]);
        assert_eq!(report, Report::Satisfiable);
        assert_eq!(model.as_dimacs(false), "-1 2 -5");
    }
}

mod agreement {

    use super::*;

    #[test]
    fn reports_agree() {
        let mut satisfiable = 0;

        for seed in 0..96 {
            let clauses = random_clauses(seed, 10, 42);
            let atoms = matrix::atoms(&clauses);

            let mut backtracking = Backtracking::default();
            backtracking.add_clauses(clauses.clone());

            let mut dpll = Dpll::default();
            dpll.add_clauses(clauses.clone());

            let (backtracking_report, _) = backtracking.solve(&atoms);
            let (dpll_report, dpll_model) = dpll.solve(&atoms);

            assert_eq!(backtracking_report, dpll_report, "seed {seed}");

            if dpll_report == Report::Satisfiable {
                satisfiable += 1;
                for clause in &clauses {
                    assert_eq!(clause.status_on(&dpll_model), ClauseStatus::Satisfied);
                }
            }
        }

        assert!(satisfiable > 0);
    }

    #[test]
    fn incremental() {
        let clauses = random_clauses(7, 8, 40);
        let atoms = matrix::atoms(&clauses);

        let mut backtracking = Backtracking::default();
        let mut dpll = Dpll::default();

        for clause in clauses {
            backtracking.add_clause(clause.clone());
            dpll.add_clause(clause);

            assert_eq!(backtracking.solve(&atoms).0, dpll.solve(&atoms).0);
            assert_eq!(backtracking.clause_count(), dpll.clause_count());
        }

        backtracking.reset();
        dpll.reset();
        assert_eq!(backtracking.solve(&atoms).0, Report::Satisfiable);
        assert_eq!(dpll.solve(&atoms).0, Report::Satisfiable);
    }
}

/*!
A complete oracle, by the Davis–Putnam–Logemann–Loveland procedure.

# Overview

The search maintains a trail of literals, each of which is either a decision, the flip of an earlier decision, or a consequence found by unit propagation.

```none
            +-----------+
  +---------| propagate |<-----------------+
  |         +-----------+                  |
  |               |                        |
  | conflict      | no further consequence |
  ⌄               ⌄                        |
+-----------+   +--------+   decision      |
| backtrack |   | decide |-----------------+
+-----------+   +--------+
  |       |           |
  |       +-----------|------------------> unsatisfiable, if no decision remains to flip
  |                   +------------------> satisfiable, if every atom is valued
  +--- flip the most recent decision, then propagate
```

Decisions are made on the atoms of interest first, in the order given, and then on the remaining atoms of the clauses, in ascending order.
Each decision values an atom false, and on a conflict the trail is unwound to the most recent decision, which is flipped to true.

Unlike the [reference oracle](crate::oracle::Backtracking) every atom of every clause is valued, and so the oracle is complete regardless of the atoms of interest.
Though, as propagation may force an atom of interest to be true before the atom is decided, the model found may differ from the model found by the reference oracle.

Propagation is by a scan over every clause, rather than watched literals, so this is still an oracle for modest instances.
*/

use std::collections::{BTreeSet, HashMap};

use crate::{
    misc::log::targets::{self},
    oracle::{distinct_atoms, Oracle},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Assignment,
    },
};

/// The reason for a literal on the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// A free choice, which may be flipped.
    Decision,

    /// A decision which has been flipped, and so may not be flipped again.
    Flip,

    /// A consequence of unit propagation.
    Consequence,
}

/// Unit propagation found a clause with every literal false.
struct Conflict;

/// An oracle which searches by propagation and chronological backtracking.
#[derive(Clone, Debug, Default)]
pub struct Dpll {
    clauses: Vec<CClause>,

    /// A count of all decisions made, across all solves.
    pub total_decisions: usize,

    /// A count of all conflicts found, across all solves.
    pub total_conflicts: usize,
}

/// The state of a single search.
struct Search<'c> {
    clauses: &'c [CClause],
    valuation: HashMap<Atom, bool>,
    trail: Vec<(CLiteral, Step)>,
}

impl Search<'_> {
    fn value_of(&self, literal: CLiteral) -> Option<bool> {
        self.valuation
            .get(&literal.atom())
            .map(|value| *value == literal.polarity())
    }

    fn assign(&mut self, literal: CLiteral, step: Step) {
        self.valuation.insert(literal.atom(), literal.polarity());
        self.trail.push((literal, step));
    }

    /// Values the last unvalued literal of every clause whose other literals are false, until no such clause remains.
    fn propagate(&mut self) -> Result<(), Conflict> {
        loop {
            let mut fresh_consequence = false;

            for clause in self.clauses {
                let mut unvalued = None;
                let mut unvalued_count = 0;
                let mut satisfied = false;

                for literal in clause.literals() {
                    match self.value_of(literal) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => {}
                        None => {
                            unvalued_count += 1;
                            unvalued = Some(literal);
                        }
                    }
                }

                if satisfied {
                    continue;
                }

                match (unvalued_count, unvalued) {
                    (0, _) => return Err(Conflict),
                    (1, Some(literal)) => {
                        log::trace!(target: targets::ORACLE, "Consequence: {literal}");
                        self.assign(literal, Step::Consequence);
                        fresh_consequence = true;
                    }
                    _ => {}
                }
            }

            if !fresh_consequence {
                return Ok(());
            }
        }
    }

    /// Unwinds the trail to the most recent decision and flips the decision.
    /// Returns false if there was no decision to flip.
    fn backtrack(&mut self) -> bool {
        while let Some((literal, step)) = self.trail.pop() {
            self.valuation.remove(&literal.atom());
            if step == Step::Decision {
                self.assign(literal.negate(), Step::Flip);
                return true;
            }
        }
        false
    }
}

impl Oracle for Dpll {
    fn add_clause(&mut self, clause: CClause) {
        log::trace!(target: targets::ORACLE, "Clause: {}", clause.as_dimacs(false));
        self.clauses.push(clause);
    }

    fn solve(&mut self, atoms: &[Atom]) -> (Report, Assignment) {
        let atoms = distinct_atoms(atoms);

        if self.clauses.iter().any(|clause| clause.is_empty()) {
            return (Report::Unsatisfiable, Assignment::default());
        }

        let mut decision_order = atoms.clone();
        let remaining = self
            .clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .filter(|atom| !atoms.contains(atom))
            .collect::<BTreeSet<_>>();
        decision_order.extend(remaining);

        log::debug!(target: targets::ORACLE, "DPLL over {} atoms and {} clauses", decision_order.len(), self.clauses.len());

        let mut search = Search {
            clauses: &self.clauses,
            valuation: HashMap::with_capacity(decision_order.len()),
            trail: Vec::default(),
        };

        loop {
            match search.propagate() {
                Err(Conflict) => {
                    self.total_conflicts += 1;
                    if !search.backtrack() {
                        return (Report::Unsatisfiable, Assignment::default());
                    }
                }

                Ok(()) => {
                    let choice = decision_order
                        .iter()
                        .copied()
                        .find(|atom| !search.valuation.contains_key(atom));

                    match choice {
                        Some(atom) => {
                            self.total_decisions += 1;
                            search.assign(CLiteral::new(atom, false), Step::Decision);
                        }

                        None => {
                            let model = atoms
                                .iter()
                                .map(|atom| (*atom, search.valuation.get(atom).copied().unwrap_or(false)))
                                .collect();
                            return (Report::Satisfiable, model);
                        }
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        self.clauses.clear();
    }

    fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

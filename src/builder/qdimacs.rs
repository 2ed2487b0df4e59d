use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        formula::Formula,
        literal::CLiteral,
        matrix,
        prefix::{Block, Quantifier},
    },
    types::err::{self, ErrorKind},
};

use std::{collections::HashSet, io::BufRead};

impl Formula {
    /// Reads a formula in QDIMACS form.
    ///
    /// ```rust,ignore
    /// let formula = Formula::read_qdimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// In detail:
    /// - Lines beginning with `c` are comments, and are skipped wherever they occur.
    /// - A problem line `p cnf <atoms> <clauses>` is required before any other line.
    /// - Quantifier lines, `e <atoms> 0` or `a <atoms> 0`, are read until the first clause.
    ///   Consecutive lines with the same quantifier are merged into a single block.
    /// - Clauses are terminated by `0`, and may span lines.
    /// - A line beginning with `%` ends the formula, as in some SATLIB files.
    ///
    /// If the prefix is non-empty, atoms of the matrix which are bound by no block are bound in an outermost existential block.
    ///
    /// ```rust
    /// # use otter_qbf::structures::formula::Formula;
    /// # use otter_qbf::structures::prefix::{Block, Quantifier};
    /// let qdimacs = b"
    /// p cnf 3 2
    /// a 2 0
    /// e 3 0
    /// 1 2 3 0
    /// -1 -3 0
    /// ";
    ///
    /// let formula = Formula::read_qdimacs(qdimacs.as_slice()).unwrap();
    ///
    /// assert_eq!(formula.prefix[0], Block::new(Quantifier::Existential, vec![1]));
    /// assert_eq!(formula.prefix.len(), 3);
    /// ```
    pub fn read_qdimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut formula = Formula::default();
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;
        let mut expected: Option<(usize, usize)> = None;

        // first phase, read until the problem line
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None | Some('c') => continue,

                Some('p') => {
                    expected = Some(problem_details(line)?);
                    break 'preamble_loop;
                }

                Some(_) => {
                    return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                }
            }
        }

        let Some((atom_count, clause_count)) = expected else {
            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
        };

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None | Some('c') => {}

                Some('%') => break 'formula_loop,

                Some(character @ ('e' | 'a')) => {
                    if !formula.matrix.is_empty() || !clause_buffer.is_empty() {
                        return Err(err::ErrorKind::from(err::ParseError::MisplacedQuantifier(
                            line_counter,
                        )));
                    }

                    let quantifier = match Quantifier::try_from(character) {
                        Ok(quantifier) => quantifier,
                        Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
                    };
                    let atoms = quantifier_atoms(line, line_counter)?;

                    match formula.prefix.last_mut() {
                        Some(block) if block.quantifier == quantifier => block.atoms.extend(atoms),
                        _ => formula.prefix.push(Block::new(quantifier, atoms)),
                    }
                }

                Some(_) => {
                    for item in line.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                formula.matrix.push(the_clause);
                            }

                            _ => {
                                let the_literal = match item.parse::<CLiteral>() {
                                    Ok(literal) => literal,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(err::ParseError::Literal(
                                            line_counter,
                                        )))
                                    }
                                };

                                if !clause_buffer.contains(&the_literal) {
                                    clause_buffer.push(the_literal);
                                }
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Final clause is not terminated by 0");
            formula.matrix.push(clause_buffer);
        }

        if !formula.prefix.is_empty() {
            bind_free_atoms(&mut formula);
        }

        if formula.matrix.len() != clause_count {
            log::warn!(target: targets::PARSE, "Expected {clause_count} clauses, read {}", formula.matrix.len());
        }
        if let Some(max_atom) = formula.max_atom() {
            if max_atom as usize > atom_count {
                log::warn!(target: targets::PARSE, "Expected at most {atom_count} atoms, read atom {max_atom}");
            }
        }

        log::info!(target: targets::PARSE, "Read {} blocks and {} clauses from {line_counter} lines", formula.prefix.len(), formula.matrix.len());

        Ok(formula)
    }
}

/// The atom and clause counts of a problem line.
fn problem_details(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut problem_details = line.split_whitespace();

    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf") {
        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match problem_details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
        }
    };

    let atom_count = count()?;
    let clause_count = count()?;
    Ok((atom_count, clause_count))
}

/// The atoms of a quantifier line, which must be terminated by `0`.
fn quantifier_atoms(line: &str, line_counter: usize) -> Result<Vec<Atom>, ErrorKind> {
    let mut atoms = Vec::default();
    let mut items = line.split_whitespace().skip(1);

    loop {
        match items.next() {
            None => {
                return Err(err::ErrorKind::from(err::ParseError::UnterminatedLine(
                    line_counter,
                )))
            }

            Some("0") => break,

            Some(item) => match item.parse::<Atom>() {
                Ok(atom) => atoms.push(atom),
                Err(_) => {
                    return Err(err::ErrorKind::from(err::ParseError::Literal(line_counter)))
                }
            },
        }
    }

    match items.next() {
        None => Ok(atoms),
        Some(_) => Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
    }
}

/// Binds the atoms of the matrix bound by no block in an outermost existential block.
fn bind_free_atoms(formula: &mut Formula) {
    let bound = formula
        .prefix
        .iter()
        .flat_map(|block| block.atoms.iter().copied())
        .collect::<HashSet<Atom>>();

    let free = matrix::atoms(&formula.matrix)
        .into_iter()
        .filter(|atom| !bound.contains(atom))
        .collect::<Vec<_>>();

    if free.is_empty() {
        return;
    }

    log::info!(target: targets::PARSE, "Binding {} free atoms existentially", free.len());

    match formula.prefix.first_mut() {
        Some(block) if block.quantifier == Quantifier::Existential => {
            let mut atoms = free;
            atoms.append(&mut block.atoms);
            block.atoms = atoms;
        }

        _ => formula
            .prefix
            .insert(0, Block::new(Quantifier::Existential, free)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err::ParseError;

    fn read(qdimacs: &str) -> Result<Formula, ErrorKind> {
        Formula::read_qdimacs(qdimacs.as_bytes())
    }

    #[test]
    fn blocks_and_clauses() {
        let formula = read(
            "c comment\np cnf 4 2\na 1 2 0\ne 3 0\ne 4 0\n1 -3\n 4 0\n-2 3 0\n",
        )
        .unwrap();

        assert_eq!(
            formula.prefix,
            vec![
                Block::new(Quantifier::Universal, vec![1, 2]),
                Block::new(Quantifier::Existential, vec![3, 4]),
            ]
        );
        assert_eq!(formula.matrix, vec![vec![1, -3, 4], vec![-2, 3]]);
        assert!(formula.check().is_ok());
    }

    #[test]
    fn end_marker() {
        let formula = read("p cnf 1 1\ne 1 0\n1 0\n%\n0\n").unwrap();
        assert_eq!(formula.matrix, vec![vec![1]]);
    }

    #[test]
    fn free_atoms_join_an_outer_existential_block() {
        let formula = read("p cnf 3 1\ne 2 0\na 3 0\n1 2 3 0\n").unwrap();
        assert_eq!(formula.prefix[0], Block::new(Quantifier::Existential, vec![1, 2]));
        assert_eq!(formula.prefix.len(), 2);
    }

    #[test]
    fn no_prefix() {
        let formula = read("p cnf 2 1\n1 2 0\n").unwrap();
        assert!(formula.prefix.is_empty());
    }

    #[test]
    fn repeated_literals_are_dropped() {
        let formula = read("p cnf 2 1\ne 1 2 0\n1 2 1 0\n").unwrap();
        assert_eq!(formula.matrix, vec![vec![1, 2]]);
    }

    #[test]
    fn malformed() {
        assert_eq!(
            read("1 2 0\n"),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
        assert_eq!(
            read("p cnf x 1\n"),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
        assert_eq!(
            read("p cnf 2 1\ne 1 2\n1 2 0\n"),
            Err(ErrorKind::Parse(ParseError::UnterminatedLine(2)))
        );
        assert_eq!(
            read("p cnf 2 2\ne 1 0\n1 0\na 2 0\n2 0\n"),
            Err(ErrorKind::Parse(ParseError::MisplacedQuantifier(4)))
        );
        assert_eq!(
            read("p cnf 2 1\ne 1 2 0\n1 two 0\n"),
            Err(ErrorKind::Parse(ParseError::Literal(3)))
        );
        assert_eq!(
            read("p cnf 2 1\ne 1 -2 0\n1 2 0\n"),
            Err(ErrorKind::Parse(ParseError::Literal(2)))
        );
    }
}

//! Tools for building a formula.
//!
//! Clauses may be added programmatically through [add_clause](Formula::add_clause) or read from a
//! DIMACS source through [read_dimacs](Formula::read_dimacs).
//!
//! In either case a clause is normalised before it is stored:
//! - Duplicate literals are dropped.
//! - A tautologous clause is dropped entirely.
//! - A unit clause is absorbed into the valuation and the log of units, and never stored.
//!
//! So, every clause of the database has length two or greater, and contains no repeated atom.

use crate::{
    formula::Formula,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use std::io::BufRead;

/// How a clause was absorbed into a formula, for clauses which were.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was a tautology, and was dropped.
    Tautology,

    /// The clause was a unit, and was absorbed into the valuation and the log of units.
    Unit,

    /// The clause was stored in the clause database.
    Added,
}

/// Methods for building a formula.
impl Formula {
    /// Adds a clause to the formula.
    ///
    /// The clause is normalised first, and the returned [ClauseOk] notes what became of it.
    /// A unit clause is forced immediately, and forcing may settle the
    /// [status](crate::formula::Status) of the formula --- callers should inspect the status
    /// rather than expect an error.
    ///
    /// ```rust
    /// # use stoat_prep::builder::ClauseOk;
    /// # use stoat_prep::formula::Formula;
    /// # use stoat_prep::structures::literal::{CLiteral, Literal};
    /// let mut formula = Formula::new(2);
    /// let p = CLiteral::new(0, true);
    /// let q = CLiteral::new(1, false);
    ///
    /// assert_eq!(Ok(ClauseOk::Added), formula.add_clause(vec![p, q]));
    /// assert_eq!(Ok(ClauseOk::Tautology), formula.add_clause(vec![p, p.negate()]));
    /// assert_eq!(Ok(ClauseOk::Unit), formula.add_clause(vec![q, q]));
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        if clause.size() == 0 {
            return Err(err::ErrorKind::from(err::BuildError::EmptyClause));
        }

        let mut clause = clause.canonical();

        if clause
            .literals()
            .any(|literal| literal.atom() as usize >= self.atom_count())
        {
            return Err(err::ErrorKind::from(err::BuildError::AtomOutOfBounds));
        }

        if clause.simplify() {
            return Ok(ClauseOk::Tautology);
        }

        match clause[..] {
            [literal] => {
                self.force_unit(literal);
                Ok(ClauseOk::Unit)
            }

            [..] => {
                self.clauses.push(clause);
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Reads a DIMACS CNF source into a fresh formula.
    ///
    /// The problem specification fixes the count of atoms, and a literal over an atom outside the
    /// specification is a parse error.
    /// Comment lines are skipped, and a line beginning `%` ends the formula.
    ///
    /// ```rust
    /// # use stoat_prep::formula::Formula;
    /// # use std::io::Write;
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c an example
    /// p cnf 3 2
    ///  1  2       0
    /// -1  2 -3    0
    /// ");
    ///
    /// let formula = Formula::read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(formula.atom_count(), 3);
    /// assert_eq!(formula.clause_count(), 2);
    /// ```
    #[allow(clippy::manual_flatten, unused_labels)]
    pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // First phase, read until the problem specification is found.
        let mut the_formula = 'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') | Some('\n') => {
                    buffer.clear();
                    continue;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    let atom_count: usize = match problem_details.nth(2) {
                        None => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                        }
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(
                                    err::ParseError::ProblemSpecification,
                                ))
                            }
                            Ok(count) => count,
                        },
                    };

                    let clause_count: usize = match problem_details.next() {
                        None => {
                            return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification))
                        }
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(
                                    err::ParseError::ProblemSpecification,
                                ))
                            }
                            Ok(count) => count,
                        },
                    };

                    buffer.clear();

                    log::info!(target: targets::PARSE, "Expectation is to read {atom_count} atoms and {clause_count} clauses");
                    break 'preamble_loop Formula::new(atom_count);
                }

                _ => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
            }
        };

        // Second phase, read until the formula ends.
        'formula_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}

                _ => {
                    let split_buf = buffer.split_whitespace();
                    for item in split_buf {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                match the_formula.add_clause(the_clause) {
                                    Ok(_) => {}
                                    Err(e) => return Err(e),
                                }
                            }

                            _ => {
                                let parsed_int = match item.parse::<isize>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(err::ErrorKind::from(err::ParseError::Line(
                                            line_counter,
                                        )))
                                    }
                                };

                                if parsed_int == 0
                                    || parsed_int.unsigned_abs() > the_formula.atom_count()
                                {
                                    return Err(err::ErrorKind::from(err::ParseError::Line(
                                        line_counter,
                                    )));
                                }

                                let the_literal = CLiteral::new(
                                    (parsed_int.unsigned_abs() - 1) as Atom,
                                    parsed_int.is_positive(),
                                );

                                clause_buffer.push(the_literal);
                            }
                        }
                    }
                }
            }

            buffer.clear();
        }

        log::info!(target: targets::PARSE, "Read {} clauses and {} units", the_formula.clause_count(), the_formula.units().count());

        Ok(the_formula)
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::formula::Status;

    #[test]
    fn empty_clause_is_an_error() {
        let mut formula = Formula::new(1);
        let no_literals: CClause = vec![];

        assert_eq!(
            formula.add_clause(no_literals),
            Err(err::ErrorKind::from(err::BuildError::EmptyClause))
        );
    }

    #[test]
    fn out_of_bounds_atom_is_an_error() {
        let mut formula = Formula::new(2);
        let clause = vec![CLiteral::new(0, true), CLiteral::new(2, true)];

        assert_eq!(
            formula.add_clause(clause),
            Err(err::ErrorKind::from(err::BuildError::AtomOutOfBounds))
        );
    }

    #[test]
    fn conflicting_units_settle_the_status() {
        let mut formula = Formula::new(1);
        let p = CLiteral::new(0, true);

        assert_eq!(Ok(ClauseOk::Unit), formula.add_clause(vec![p]));
        assert_eq!(Ok(ClauseOk::Unit), formula.add_clause(vec![p.negate()]));

        assert_eq!(formula.status(), Status::Unsatisfiable);
    }

    #[test]
    fn dimacs_without_a_specification_is_an_error() {
        let dimacs = "1 2 0\n";

        assert_eq!(
            Formula::read_dimacs(dimacs.as_bytes()).err(),
            Some(err::ErrorKind::from(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn dimacs_literal_out_of_bounds_is_an_error() {
        let dimacs = "p cnf 2 1\n1 3 0\n";

        assert!(matches!(
            Formula::read_dimacs(dimacs.as_bytes()).err(),
            Some(err::ErrorKind::Parse(err::ParseError::Line(_)))
        ));
    }
}

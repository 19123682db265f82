/*!
Unit propagation, aka. boolean constraint propagation (BCP).

# Overview

[propagate](Formula::propagate) repeatedly scans the clause database against the valuation:
- A literal bound matching its polarity satisfies its clause, and the clause is removed.
- A literal bound against its polarity is false in its clause, and is removed from the clause.
- An unbound literal is kept.

What remains of a clause after a scan decides what happens next:
- Length zero: every literal of the clause is false, so the formula is unsatisfiable and all
  further work halts.
- Length one: the remaining literal is forced, the clause is dropped, and a full restart of the
  scan is required --- the fresh binding may satisfy or falsify clauses already visited.
- Length two or greater: the clause is kept, truncated to its surviving literals.

The scan terminates when a full sweep completes with no unit extracted.
Each restart strictly removes at least one clause, so the count of clauses is a strictly
decreasing, bounded-below measure and the loop terminates.

If the terminal sweep leaves the database empty while the status is undetermined, every clause was
satisfied, and the status becomes satisfiable.

# Removal

Clause and literal removal are both by swap with the final (active) element.
When a literal is swapped into a scanned position the position is re-examined, as a fresh literal
now occupies it.
Order within the database and within a clause carries no meaning.
*/

use crate::{
    formula::{Formula, Status},
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        valuation::{Valuation, ValuationStatus},
    },
};

impl Formula {
    /// Binds the atom of `literal` to match the polarity of `literal`.
    ///
    /// If the atom is already bound to the opposite value the status of the formula becomes
    /// [Unsatisfiable](Status::Unsatisfiable) with no further mutation.
    /// Otherwise, the binding is recorded and the literal is appended to the log of units, unless
    /// the literal is already logged.
    pub fn force_unit(&mut self, literal: CLiteral) {
        if self.status == Status::Unsatisfiable {
            return;
        }

        match self.valuation.check_literal(literal) {
            ValuationStatus::Conflict => {
                log::info!(target: targets::PROPAGATION, "Conflicting unit {literal}, inferred unsatisfiable");
                self.status = Status::Unsatisfiable;
            }

            ValuationStatus::None | ValuationStatus::Set => {
                self.valuation[literal.atom() as usize] = Some(literal.polarity());

                if !self.units.contains(&literal) {
                    log::trace!(target: targets::PROPAGATION, "Unit {literal}");
                    self.units.push(literal);
                }
            }
        }
    }

    /// Propagates the valuation through the clause database, to fixpoint.
    ///
    /// See the [module documentation](crate::procedures::bcp) for the scan discipline.
    pub fn propagate(&mut self) {
        if self.status == Status::Unsatisfiable {
            return;
        }

        let mut clause_count = self.clauses.len();
        let mut restart = true;

        while restart {
            restart = false;

            let mut index = 0;
            'clause_loop: while index < clause_count {
                let mut length = self.clauses[index].len();
                let mut satisfied = false;

                let mut position = 0;
                while position < length {
                    let literal = self.clauses[index][position];

                    match self.valuation.value_of(literal.atom()) {
                        None => position += 1,

                        Some(value) if value == literal.polarity() => {
                            satisfied = true;
                            break;
                        }

                        Some(_) => {
                            // The swapped-in literal is examined at the same position.
                            length -= 1;
                            self.clauses[index].swap(position, length);
                        }
                    }
                }

                if satisfied {
                    clause_count -= 1;
                    self.clauses.swap(index, clause_count);
                    continue 'clause_loop;
                }

                match length {
                    0 => {
                        log::info!(target: targets::PROPAGATION, "Falsified clause, inferred unsatisfiable");
                        self.status = Status::Unsatisfiable;
                        return;
                    }

                    1 => {
                        let unit = self.clauses[index][0];
                        self.force_unit(unit);
                        if self.status == Status::Unsatisfiable {
                            return;
                        }

                        clause_count -= 1;
                        self.clauses.swap(index, clause_count);

                        // The fresh binding may touch clauses already scanned.
                        restart = true;
                    }

                    _ => {
                        if self.clauses[index].len() != length {
                            self.clauses[index].truncate(length);
                        }
                        index += 1;
                    }
                }
            }
        }

        self.clauses.truncate(clause_count);

        if self.status == Status::Undetermined && self.clauses.is_empty() {
            self.status = Status::Satisfiable;
        }
    }
}

/*!
Self-subsuming resolution.

# Overview

For an unbound atom *v* with literal *p* and negation *n*, the pass examines clause pairs
(*C₁* ∋ *p*, *C₂* ∋ *n*) drawn from the occurrence lists of *p* and *n*, and asks, in both
directions, whether resolving on *v* lets one clause absorb the resolvent --- i.e. whether the
resolvent [subsumes](crate::structures::clause::Clause::self_subsumes) a parent.

When a direction holds the resolvent is derived and classified:
- A tautologous resolvent is discarded.
- An empty resolvent settles the formula as unsatisfiable, halting everything.
- A unit resolvent is [forced](crate::formula::Formula::force_unit).
- Any longer resolvent is appended to the clause database as a fresh clause.

Then the absorbed parent is removed --- both parents, when both directions hold.

# Control

The occurrence index is stale the instant a clause is removed or appended, so on any structural
change the index is rebuilt from scratch, the pair scan for the atom is abandoned, and the scan
moves to the next atom.
No attempt is made to patch and continue within a stale scan.

The outer loop sweeps every atom repeatedly until a complete sweep makes no modification.
If any modification was ever made the pass ends with a call to
[propagate](crate::formula::Formula::propagate), flushing any pending forced units.

# Cost

Pair examination is quadratic in the occurrence lists of an atom, so an atom qualifies only if
both lists are non-empty and at least one is within the
[configured bound](crate::config::Config::occurrence_bound).
*/

use crate::{
    db::occurrence::OccurrenceIndex,
    formula::{Formula, Status},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

impl Formula {
    /// Applies self-subsuming resolution across the clause database, to fixpoint.
    ///
    /// See the [module documentation](crate::procedures::self_subsumption) for the pass.
    pub fn self_subsumption(&mut self) {
        if self.status == Status::Unsatisfiable {
            return;
        }

        let bound = self.config.occurrence_bound;
        let mut occurs = OccurrenceIndex::build(&self.clauses, self.atom_count());

        let mut modified = true;
        let mut ever_modified = false;

        while modified {
            modified = false;

            'atom_loop: for atom in 0..self.atom_count() as Atom {
                if self.valuation.value_of(atom).is_some() {
                    continue 'atom_loop;
                }

                let positive = CLiteral::new(atom, true);
                let negative = positive.negate();

                let positive_count = occurs.of(positive).len();
                let negative_count = occurs.of(negative).len();

                if positive_count == 0 || negative_count == 0 {
                    continue 'atom_loop;
                }

                if positive_count >= bound && negative_count >= bound {
                    continue 'atom_loop;
                }

                log::trace!(target: targets::SELF_SUBSUMPTION, "Examining atom {atom}: {positive_count} positive, {negative_count} negative occurrences");

                // Structural changes invalidate the index, so the scan works on a snapshot of the
                // two lists and abandons the snapshot on any change.
                let positive_occurrences = occurs.of(positive).to_vec();
                let negative_occurrences = occurs.of(negative).to_vec();

                for &first in &positive_occurrences {
                    for &second in &negative_occurrences {
                        let absorbs_negative =
                            self.clauses[first].self_subsumes(&self.clauses[second], atom);
                        let absorbs_positive =
                            self.clauses[second].self_subsumes(&self.clauses[first], atom);

                        if !absorbs_negative && !absorbs_positive {
                            continue;
                        }

                        let mut resolvent = match absorbs_negative {
                            true => self.clauses[first].resolve(&self.clauses[second], atom),
                            false => self.clauses[second].resolve(&self.clauses[first], atom),
                        };

                        if !resolvent.simplify() {
                            match resolvent.len() {
                                0 => {
                                    log::info!(target: targets::SELF_SUBSUMPTION, "Empty resolvent, inferred unsatisfiable");
                                    self.status = Status::Unsatisfiable;
                                    return;
                                }

                                1 => {
                                    self.force_unit(resolvent[0]);
                                    if self.status == Status::Unsatisfiable {
                                        return;
                                    }
                                }

                                _ => self.clauses.push(resolvent),
                            }
                        }

                        if absorbs_negative && absorbs_positive {
                            self.remove_clause_pair(first, second);
                        } else if absorbs_negative {
                            self.remove_clause(second);
                        } else {
                            self.remove_clause(first);
                        }

                        occurs = OccurrenceIndex::build(&self.clauses, self.atom_count());
                        modified = true;
                        ever_modified = true;

                        continue 'atom_loop;
                    }
                }
            }
        }

        if ever_modified {
            self.propagate();
        }
    }
}

#[cfg(test)]
mod self_subsumption_tests {
    use super::*;

    #[test]
    fn mutual_absorption_collapses_to_a_unit() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p.negate(), q]).is_ok());

        formula.self_subsumption();

        assert_eq!(formula.status(), Status::Satisfiable);
        assert_eq!(formula.clause_count(), 0);
        assert_eq!(formula.units().copied().collect::<Vec<_>>(), vec![q]);
    }

    #[test]
    fn one_way_absorption_strengthens_a_clause() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q, r]).is_ok());
        assert!(formula.add_clause(vec![p.negate(), q]).is_ok());

        formula.self_subsumption();

        assert_eq!(formula.status(), Status::Undetermined);
        assert_eq!(formula.clause_count(), 2);

        // (p ∨ q ∨ r) is strengthened to (q ∨ r), while (¬p ∨ q) survives untouched.
        let mut sets = formula
            .clauses()
            .map(|clause| {
                let mut clause = clause.clone();
                clause.sort_unstable();
                clause
            })
            .collect::<Vec<_>>();
        sets.sort_unstable();

        let mut expected = vec![vec![p.negate(), q], vec![q, r]];
        expected.iter_mut().for_each(|c| c.sort_unstable());
        expected.sort_unstable();

        assert_eq!(sets, expected);
    }

    #[test]
    fn clashing_pairs_are_left_alone() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p.negate(), q.negate(), r]).is_ok());

        formula.self_subsumption();

        assert_eq!(formula.status(), Status::Undetermined);
        assert_eq!(formula.clause_count(), 2);
    }
}

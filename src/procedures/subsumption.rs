/*!
Subsumption elimination.

# Overview

A clause whose literals are a superset of another clause is logically redundant --- any valuation
satisfying the shorter clause satisfies the longer.
The pass removes every such clause.

Candidate pairs share a literal, so the scan is keyed on occurrence lists: for each unbound atom,
and for the positive and the negative occurrence lists independently, every unordered pair of
distinct positions is examined, and the strictly shorter clause tests whether its literals are a
[subset](crate::structures::clause::Clause::subsumes) of the longer.
If so, the position of the longer clause is marked for removal.

Marking is a monotone set-membership operation --- overlapping pairs may mark a position more than
once, with no effect beyond the first.
After the full scan the surviving database is exactly the clauses whose position was never marked,
in no particular order.

Subsumption removal cannot itself create new units, but the pass ends with a call to
[propagate](crate::formula::Formula::propagate) all the same, so every pass leaves the formula
normalised.
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
    /// Removes every clause subsumed by a shorter clause, then propagates.
    ///
    /// See the [module documentation](crate::procedures::subsumption) for the pass.
    pub fn subsumption(&mut self) {
        if self.status == Status::Unsatisfiable {
            return;
        }

        let occurs = OccurrenceIndex::build(&self.clauses, self.atom_count());
        let mut marked = vec![false; self.clauses.len()];

        for atom in 0..self.atom_count() as Atom {
            if self.valuation.value_of(atom).is_some() {
                continue;
            }

            let positive = CLiteral::new(atom, true);

            for literal in [positive, positive.negate()] {
                let list = occurs.of(literal);

                for (cursor, &first) in list.iter().enumerate() {
                    for &second in &list[..cursor] {
                        if self.clauses[first].len() > self.clauses[second].len()
                            && self.clauses[second].subsumes(&self.clauses[first])
                        {
                            log::trace!(target: targets::SUBSUMPTION, "Clause at {first} subsumed by clause at {second}");
                            marked[first] = true;
                        } else if self.clauses[second].len() > self.clauses[first].len()
                            && self.clauses[first].subsumes(&self.clauses[second])
                        {
                            log::trace!(target: targets::SUBSUMPTION, "Clause at {second} subsumed by clause at {first}");
                            marked[second] = true;
                        }
                    }
                }
            }
        }

        let mut survivors = Vec::with_capacity(self.clauses.len());
        for (position, clause) in self.clauses.drain(..).enumerate() {
            if !marked[position] {
                survivors.push(clause);
            }
        }
        self.clauses = survivors;

        self.propagate();
    }
}

#[cfg(test)]
mod subsumption_tests {
    use super::*;

    #[test]
    fn a_subset_removes_its_superset() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p, q, r]).is_ok());

        formula.subsumption();

        assert_eq!(formula.status(), Status::Undetermined);
        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.clauses().next().unwrap().len(), 2);
    }

    #[test]
    fn polarity_is_respected() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p.negate(), q, r]).is_ok());

        formula.subsumption();

        // (p ∨ q) shares no polarity-matched subset with (¬p ∨ q ∨ r).
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn overlapping_pairs_mark_idempotently() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        // The long clause is subsumed through p pairs and through q pairs alike.
        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p, q, r]).is_ok());
        assert!(formula.add_clause(vec![q, r]).is_ok());

        formula.subsumption();

        assert_eq!(formula.status(), Status::Undetermined);
        assert_eq!(formula.clause_count(), 2);
    }
}

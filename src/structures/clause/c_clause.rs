//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::{CLiteral, Literal},
};

use std::ops::Deref;

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self.deref() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.deref() {
            the_string.push_str(format!("{} ", literal.as_int()).as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn simplify(&mut self) -> bool {
        let mut index = 0;
        let mut max = self.len();

        'literal_loop: while index < max {
            let literal = self[index];

            for other_index in 0..index {
                let other_literal = self[other_index];
                if other_literal.atom() == literal.atom() {
                    if other_literal.polarity() == literal.polarity() {
                        self.swap_remove(index);
                        max -= 1;
                        continue 'literal_loop;
                    } else {
                        return true;
                    }
                }
            }
            index += 1;
        }

        false
    }

    fn subsumes(&self, other: &CClause) -> bool {
        self.iter().all(|literal| other.contains(literal))
    }

    fn self_subsumes(&self, other: &CClause, pivot: Atom) -> bool {
        let mut pivot_found = false;

        for literal in self {
            if literal.atom() == pivot {
                if !other.contains(&literal.negate()) {
                    return false;
                }
                pivot_found = true;
            } else if !other.contains(literal) {
                return false;
            }
        }

        pivot_found
    }

    fn resolve(&self, other: &CClause, pivot: Atom) -> CClause {
        let mut resolvent: CClause = self
            .iter()
            .filter(|literal| literal.atom() != pivot)
            .copied()
            .collect();

        for literal in other {
            if literal.atom() != pivot && !resolvent.contains(literal) {
                resolvent.push(*literal);
            }
        }

        resolvent
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn sorted(mut clause: CClause) -> CClause {
        clause.sort_unstable();
        clause
    }

    #[test]
    fn simplify_pass() {
        let p = CLiteral::new(1, true);
        let not_q = CLiteral::new(2, false);
        let r = CLiteral::new(3, true);

        let clause = vec![p, not_q, r];
        let mut simplified_clause = clause.clone();

        assert!(!simplified_clause.simplify());
        assert!(clause.eq(&simplified_clause));
    }

    #[test]
    fn simplify_duplicate_removal() {
        let p = CLiteral::new(1, true);
        let not_q = CLiteral::new(2, false);
        let r = CLiteral::new(3, true);

        let mut clause = vec![p, not_q, r, r, not_q, p];

        assert!(!clause.simplify());
        assert_eq!(sorted(clause), sorted(vec![p, not_q, r]));
    }

    #[test]
    fn simplify_tautology() {
        let p = CLiteral::new(1, true);

        let mut clause = vec![p, p.negate()];
        assert!(clause.simplify());
    }

    #[test]
    fn subset_subsumes() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let short = vec![p, r];
        let long = vec![r, q, p];

        assert!(short.subsumes(&long));
        assert!(!long.subsumes(&short));
        assert!(!vec![p.negate()].subsumes(&long));
    }

    #[test]
    fn self_subsumption_requires_the_pivot() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let first = vec![p, q];
        let second = vec![p.negate(), q, r];

        // Resolving on atom 0 gives (q ∨ r), which subsumes `second`.
        assert!(first.self_subsumes(&second, 0));
        assert!(!second.self_subsumes(&first, 0));

        // Though, without the pivot there is no resolution to speak of.
        assert!(!vec![q].self_subsumes(&second, 0));
    }

    #[test]
    fn resolution() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let first = vec![p, q];
        let second = vec![p.negate(), q, r];

        let resolvent = first.resolve(&second, 0);
        assert_eq!(sorted(resolvent), sorted(vec![q, r]));
    }

    #[test]
    fn resolution_to_tautology() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let first = vec![p, q];
        let second = vec![p.negate(), q.negate()];

        let mut resolvent = first.resolve(&second, 0);
        assert!(resolvent.simplify());
    }
}

use stoat_prep::{
    formula::{Formula, Objective, Status},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// The clauses of a formula as a set of sets, as clause and literal order carry no meaning.
fn clause_sets(formula: &Formula) -> Vec<CClause> {
    let mut sets: Vec<CClause> = formula
        .clauses()
        .map(|clause| {
            let mut clause = clause.clone();
            clause.sort_unstable();
            clause
        })
        .collect();
    sets.sort_unstable();
    sets
}

/// A formula which exercises strengthening, subsumption, and unit derivation together.
fn mixed_formula() -> Formula {
    let p = |atom| CLiteral::new(atom, true);
    let n = |atom| CLiteral::new(atom, false);

    let mut formula = Formula::new(6);
    assert!(formula.add_clause(vec![p(0), p(1), p(2)]).is_ok());
    assert!(formula.add_clause(vec![n(0), p(1)]).is_ok());
    assert!(formula.add_clause(vec![p(2), p(3)]).is_ok());
    assert!(formula.add_clause(vec![p(3), p(4), p(5)]).is_ok());
    assert!(formula.add_clause(vec![p(3), p(4)]).is_ok());
    formula
}

mod properties {
    use super::*;

    #[test]
    fn preprocessing_is_idempotent() {
        let mut formula = mixed_formula();

        formula.preprocess();

        let clauses_after_one = clause_sets(&formula);
        let units_after_one: Vec<_> = formula.units().copied().collect();
        let status_after_one = formula.status();
        let valuation_after_one: Vec<_> = (0..formula.atom_count() as u32)
            .map(|atom| formula.value_of(atom))
            .collect();

        formula.preprocess();

        assert_eq!(clauses_after_one, clause_sets(&formula));
        assert_eq!(units_after_one, formula.units().copied().collect::<Vec<_>>());
        assert_eq!(status_after_one, formula.status());
        assert_eq!(
            valuation_after_one,
            (0..formula.atom_count() as u32)
                .map(|atom| formula.value_of(atom))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn surviving_clauses_are_well_formed() {
        let mut formula = mixed_formula();

        formula.preprocess();

        for clause in formula.clauses() {
            assert!(clause.len() >= 2);
            for literal in clause {
                assert_eq!(formula.value_of(literal.atom()), None);
            }
        }
    }

    #[test]
    fn units_are_never_duplicated() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        // Both pairs independently derive the unit (q).
        let mut formula = Formula::new(3);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p.negate(), q]).is_ok());
        assert!(formula.add_clause(vec![r, q]).is_ok());
        assert!(formula.add_clause(vec![r.negate(), q]).is_ok());

        formula.preprocess();

        let units: Vec<_> = formula.units().copied().collect();
        for unit in &units {
            assert_eq!(1, units.iter().filter(|u| *u == unit).count());
        }
    }

    #[test]
    fn unsatisfiable_is_terminal() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![p, q]).is_ok());
        assert!(formula.add_clause(vec![p]).is_ok());
        assert!(formula.add_clause(vec![p.negate()]).is_ok());

        assert_eq!(formula.status(), Status::Unsatisfiable);

        formula.preprocess();
        assert_eq!(formula.status(), Status::Unsatisfiable);

        formula.propagate();
        assert_eq!(formula.status(), Status::Unsatisfiable);
    }

    #[test]
    fn satisfiable_requires_an_empty_database() {
        let mut formula = mixed_formula();

        formula.preprocess();

        if formula.clause_count() != 0 {
            assert_eq!(formula.status(), Status::Undetermined);
        }
    }

    #[test]
    fn the_objective_is_untouched() {
        let p = CLiteral::new(0, true);

        let mut formula = mixed_formula();
        let objective = Objective {
            literals: vec![p, CLiteral::new(3, false)],
            weights: vec![2, 5],
        };
        formula.set_objective(objective.clone());

        formula.preprocess();

        assert_eq!(formula.objective(), Some(&objective));
    }
}

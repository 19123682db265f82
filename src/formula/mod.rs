/*!
The formula --- to which clauses are added and over which preprocessing takes place.

A formula owns:
- A clause database, holding every clause of length two or greater.
  Clauses of length zero or one never persist --- these are absorbed into the status or the log of
  units as they appear.
- A [valuation](crate::structures::valuation), recording the binding of each atom.
- A log of units: the forced literals derived so far, in order of derivation and without
  duplicates.
- A [status](Status), recording what is known of the satisfiability of the formula.
- Optionally, an [objective](Objective), untouched by preprocessing.

All state is exclusively owned and mutated by the formula, and every procedure is synchronous ---
there is no aliasing to discipline and no concurrency.

Within the clause database the order of clauses carries no meaning, and removal of a clause is by
swap with the final clause and truncation.
Callers should read the database as a set.

# Example

```rust
# use stoat_prep::formula::{Formula, Status};
# use stoat_prep::structures::literal::{CLiteral, Literal};
let mut formula = Formula::new(2);

let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);

assert!(formula.add_clause(vec![p, q]).is_ok());
assert!(formula.add_clause(vec![p.negate()]).is_ok());

formula.propagate();

assert_eq!(formula.status(), Status::Satisfiable);
assert_eq!(formula.units().count(), 2);
```
*/

mod objective;
pub use objective::Objective;
mod status;
pub use status::Status;

use crate::{
    config::Config,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::CLiteral,
        valuation::{CValuation, Valuation},
    },
};

/// A formula in conjunctive normal form, together with everything derived of the formula so far.
pub struct Formula {
    /// The configuration of the formula.
    pub config: Config,

    /// The count of atoms of the formula, fixed at construction.
    atom_count: usize,

    /// The clause database. Unordered, and destructively mutated by the passes.
    pub(crate) clauses: Vec<CClause>,

    /// The log of forced literals, in order of derivation, without duplicates.
    pub(crate) units: Vec<CLiteral>,

    /// The valuation of the formula.
    pub(crate) valuation: CValuation,

    /// What is known of the satisfiability of the formula.
    pub(crate) status: Status,

    /// An optional weighted objective, untouched by preprocessing.
    objective: Option<Objective>,
}

impl Formula {
    /// A fresh formula over the given count of atoms, with the default configuration.
    pub fn new(atom_count: usize) -> Self {
        Formula::from_config(atom_count, Config::default())
    }

    /// A fresh formula over the given count of atoms, with the given configuration.
    pub fn from_config(atom_count: usize, config: Config) -> Self {
        Formula {
            config,
            atom_count,
            clauses: Vec::default(),
            units: Vec::default(),
            valuation: vec![None; atom_count],
            status: Status::Undetermined,
            objective: None,
        }
    }

    /// The count of atoms of the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// What is known of the satisfiability of the formula.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Some value of an atom under the valuation of the formula, or otherwise nothing.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// An iterator over the clauses of the database, in no meaningful order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// A count of the clauses of the database.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the forced literals derived so far, in order of derivation.
    pub fn units(&self) -> impl Iterator<Item = &CLiteral> {
        self.units.iter()
    }

    /// Attaches a weighted objective to the formula.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    /// The weighted objective of the formula, if any.
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// A DIMACS CNF representation of the formula.
    ///
    /// The header counts forced literals alongside clauses, each forced literal is rendered as a
    /// unit clause, and each clause follows on a line of its own.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!(
            "p cnf {} {}\n",
            self.atom_count,
            self.clauses.len() + self.units.len()
        );

        for unit in &self.units {
            the_string.push_str(format!("{unit} 0\n").as_str());
        }

        for clause in &self.clauses {
            the_string.push_str(clause.as_dimacs(true).as_str());
            the_string.push('\n');
        }

        the_string
    }

    /// Removes the clause at the given position by swap with the final clause.
    pub(crate) fn remove_clause(&mut self, position: usize) {
        self.clauses.swap_remove(position);
    }

    /// Removes the clauses at the two given (distinct) positions by swap with the final clause.
    pub(crate) fn remove_clause_pair(&mut self, first: usize, second: usize) {
        let (low, high) = match first < second {
            true => (first, second),
            false => (second, first),
        };

        // The higher position is removed first, so the lower position is undisturbed.
        self.clauses.swap_remove(high);
        self.clauses.swap_remove(low);
    }
}

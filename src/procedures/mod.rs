/*!
Procedures for preprocessing a formula.

The procedures are factored into:
- [Unit propagation](bcp), which drives the formula to a fixpoint under the current valuation.
- [Self-subsuming resolution](self_subsumption), which shrinks or removes clauses by pairwise
  resolution keyed on occurrence lists.
- [Subsumption elimination](subsumption), which removes clauses whose literals are a superset of
  a shorter clause.

[preprocess](crate::formula::Formula::preprocess) composes the latter two in a fixed pipeline,
each pass running to its own internal fixpoint and ending with a call to
[propagate](crate::formula::Formula::propagate) to normalise the formula.

Every fixpoint loop terminates, as each iteration which continues a loop strictly shrinks a
bounded, non-negative measure (a clause count, a literal count, or an occurrence list).
*/

pub mod bcp;
pub mod self_subsumption;
pub mod subsumption;

use crate::{
    formula::{Formula, Status},
    misc::log::targets::{self},
};

impl Formula {
    /// Preprocesses the formula: the self-subsumption pass, then the subsumption elimination
    /// pass, once each, as permitted by the [configuration](crate::config).
    ///
    /// Postcondition: the status of the formula is [Undetermined](Status::Undetermined) with a
    /// possibly reduced clause database, or terminal.
    /// Callers should inspect the [status](crate::formula::Status) --- once unsatisfiable, every
    /// pass is a no-op.
    pub fn preprocess(&mut self) {
        log::info!(target: targets::PREPROCESSING, "Preprocessing… {} clauses currently", self.clause_count());

        if self.config.self_subsumption {
            self.self_subsumption();
        }

        if self.status() == Status::Unsatisfiable {
            return;
        }

        if self.config.subsumption {
            self.subsumption();
        }

        log::info!(target: targets::PREPROCESSING, "Done. {} clauses now", self.clause_count());
    }
}

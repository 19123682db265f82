//! The status of a formula.

/// The status of a formula.
///
/// The status is monotone in two respects:
/// - Once [Unsatisfiable](Status::Unsatisfiable) the status never changes, and every further pass
///   over the formula is a no-op.
/// - [Satisfiable](Status::Satisfiable) is reached only as a side effect of
///   [propagation](crate::procedures::bcp) emptying the clause database of an
///   [Undetermined](Status::Undetermined) formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The satisfiability of the formula is unknown.
    Undetermined,

    /// The formula is known to be satisfiable, e.g. as propagation consumed every clause.
    Satisfiable,

    /// The formula is known to be unsatisfiable, e.g. as an empty clause was inferred or a forced
    /// literal conflicted with the valuation.
    Unsatisfiable,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undetermined => write!(f, "Undetermined"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

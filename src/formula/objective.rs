//! An optional weighted objective, for optimisation variants of a formula.

use crate::structures::literal::CLiteral;

/// A list of literals and weights whose weighted sum is to be minimised by some downstream
/// consumer of the formula.
///
/// The objective is carried by the formula for the benefit of such consumers.
/// No preprocessing pass reads or modifies the objective, and the objective is excluded from the
/// [CNF report](crate::formula::Formula::as_dimacs).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Objective {
    /// The literals whose weighted sum is to be minimised.
    pub literals: Vec<CLiteral>,

    /// For each literal, by position, the weight of the literal.
    pub weights: Vec<usize>,
}

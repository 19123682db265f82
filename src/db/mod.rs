//! Structures derived from the clause database of a formula.

pub mod occurrence;

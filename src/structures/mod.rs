//! Structures, abstract and concrete, of a formula.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;

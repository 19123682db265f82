//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use stoat_prep::structures::literal::{CLiteral, Literal};
//! # use stoat_prep::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "24 -42 -4 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause
//!   --- where the 'unit' is the literal).
//!
//! Within a clause the order of literals carries no meaning, and the methods of the trait are free
//! to reorder literals.
//! In particular, removal of a literal is by swap with the final literal and truncation.

mod c_clause;

use crate::structures::{atom::Atom, literal::CLiteral};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Removes duplicate literals from the clause, and returns true if (and only if) the clause is
    /// a tautology --- i.e. if the clause contains both a literal and its negation.
    ///
    /// The contents of a tautologous clause are unspecified after the call.
    fn simplify(&mut self) -> bool;

    /// Returns true if (and only if) every literal of the clause occurs in `other`.
    ///
    /// A clause which subsumes another makes the other logically redundant.
    fn subsumes(&self, other: &CClause) -> bool;

    /// Returns true if (and only if) resolution with `other` on `pivot` produces a resolvent which
    /// subsumes `other`.
    ///
    /// In detail: the clause contains a literal over `pivot`, `other` contains its negation, and
    /// every other literal of the clause occurs in `other`.
    /// If so, `other` absorbs the resolvent --- self-subsuming resolution shrinks `other` by the
    /// pivot literal.
    fn self_subsumes(&self, other: &CClause, pivot: Atom) -> bool;

    /// The resolvent of the clause and `other` on `pivot`.
    ///
    /// That is, every literal of either clause whose atom is not `pivot`, without duplicates.
    /// The resolvent of clauses which clash on some atom other than `pivot` is a tautology, and
    /// detection of this is left to [simplify](Clause::simplify).
    fn resolve(&self, other: &CClause, pivot: Atom) -> CClause;
}

/// The canonical implementation of a clause, as a vector of literals.
pub type CClause = Vec<CLiteral>;

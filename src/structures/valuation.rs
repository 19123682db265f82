/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where each index of
the vector is interpreted as an atom:
- *v*\[a\] = Some(true) *if and only if* a is bound to true.
- *v*\[a\] = Some(false) *if and only if* a is bound to false.
- *v*\[a\] = None *if and only if* a is unbound.

An explicit tri-state is used, rather than the signed integers found in some solvers, so that the
assign-once contract is type-checkable: a bound atom is never silently overwritten, and a request
to bind an atom to the opposite value is always surfaced as a [conflict](ValuationStatus::Conflict).

During preprocessing transitions are monotone.
An atom moves from unbound to bound exactly once, and only [force_unit](crate::procedures::bcp)
makes the move.

```rust
# use stoat_prep::structures::valuation::{CValuation, Valuation, ValuationStatus};
# use stoat_prep::structures::literal::{CLiteral, Literal};
let valuation: CValuation = vec![Some(true), None, Some(false)];

assert_eq!(valuation.value_of(0), Some(true));
assert_eq!(valuation.value_of(1), None);

assert_eq!(valuation.check_literal(CLiteral::new(1, true)), ValuationStatus::None);
assert_eq!(valuation.check_literal(CLiteral::new(2, false)), ValuationStatus::Set);
assert_eq!(valuation.check_literal(CLiteral::new(2, true)), ValuationStatus::Conflict);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// The status of a literal against a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom of the literal has no value.
    None,

    /// The atom of the literal is bound, matching the polarity of the literal.
    Set,

    /// The atom of the literal is bound, conflicting with the polarity of the literal.
    Conflict,
}

/// A valuation is something which stores some value of an atom and/or perhaps the information
/// that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    ///
    /// The atom is used as an index without further checks --- an atom outside the valuation is a
    /// precondition violation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The status of the given literal against the valuation.
    fn check_literal(&self, literal: CLiteral) -> ValuationStatus;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self[atom as usize]
    }

    fn check_literal(&self, literal: CLiteral) -> ValuationStatus {
        match self.value_of(literal.atom()) {
            None => ValuationStatus::None,
            Some(value) if value == literal.polarity() => ValuationStatus::Set,
            Some(_) => ValuationStatus::Conflict,
        }
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

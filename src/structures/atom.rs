/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things to which assigning a (boolean) value (true or false) is of interest.

Each atom is a u32 *a* with *a* strictly less than the atom count of the formula the atom belongs
to, fixed when the formula is created.
In other words, the atoms of a formula are \[0..*n*) for some *n*, and no atom is created or
destroyed afterwards.

This representation allows atoms to be used as the indices of a structure, e.g. a valuation or an
occurrence list, without taking too much space.

# Notes
- The external (DIMACS) representation of an atom is the atom plus one, as DIMACS counts from 1.
- In the SAT literature these are often called 'variables' while in the logic literature these are
  often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, constrained by the signed external representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;

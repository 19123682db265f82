//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other
//! useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an
//! atom and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use stoat_prep::structures::literal::CLiteral;
//! # use stoat_prep::structures::literal::Literal;
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert_eq!(literal.as_int(), 80);
//! assert_eq!(literal.negate().as_int(), -80);
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of
//!     'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indices of
//!     maps, etc.
//!
//! In other solvers an integer is often used, with the sign of the integer indicating the value of
//! the literal.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its 'canonical' form of an atom paired with a boolean.
    fn canonical(&self) -> CLiteral;

    /// The literal in its (external) integer form, with sign indicating polarity.
    ///
    /// The integer form counts atoms from 1, as DIMACS does.
    fn as_int(&self) -> isize;

    /// A distinct index for the literal, suitable for direct array indexing.
    ///
    /// Literal indices are \[0..2*n*) for a formula of *n* atoms, with the index of the negation
    /// of a literal adjacent to the index of the literal.
    fn index(&self) -> usize;
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => (self.atom + 1) as isize,
            false => -((self.atom + 1) as isize),
        }
    }

    fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for CLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for CLiteral {}

impl std::hash::Hash for CLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

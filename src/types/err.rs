//! Error types used in the library.
//!
//! Errors are reserved for malformed input --- a clause which cannot be added, or a DIMACS
//! source which cannot be parsed.
//! Logical unsatisfiability is *not* an error.
//! It is signalled through the [status](crate::formula::Status) of a formula, and never through
//! an error value.
//
//  Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with
//  `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
}

/// Noted errors when adding a clause to a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Some attempt was made to add an empty clause.
    EmptyClause,

    /// A literal of the clause is over an atom outside the atoms of the formula.
    AtomOutOfBounds,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification of a DIMACS input, or the specification is
    /// missing entirely.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

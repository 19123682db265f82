//! A preprocessing library for boolean formulas written in conjunctive normal form.
//!
//! stoat_prep reduces the size of a formula and infers forced assignments *before* a search
//! procedure runs, without changing the satisfiability of the formula.
//! Three interacting fixpoint procedures are implemented:
//! - [Unit propagation](crate::procedures::bcp), aka. boolean constraint propagation.
//! - [Self-subsuming resolution](crate::procedures::self_subsumption).
//! - [Subsumption elimination](crate::procedures::subsumption).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [formula].
//!
//! Formulas are built with a configuration and a fixed count of atoms.
//! Clauses may be added through the [DIMACS](crate::formula::Formula::read_dimacs) representation
//! of a formula or [programatically](crate::formula::Formula::add_clause).
//!
//! Internally, and at a high-level, preprocessing is viewed in terms of manipulation of, and
//! relationships between, a handful of structures.
//! Notably:
//! - The clauses of a formula are stored in a clause database.
//! - A valuation records the (partial) assignment derived so far.
//! - Literals whose truth is forced are recorded in a log of units.
//! - An [occurrence index](crate::db::occurrence) maps each literal to the positions of clauses
//!   containing it, and is rebuilt whenever the clause database shifts.
//!
//! Useful starting points, then, may be:
//! - The high-level [preprocess procedure](crate::procedures) to inspect the dynamics of a pass.
//! - The [structures] to familiarise yourself with the abstract elements of a formula and their
//!   representation (literals, clauses, etc.)
//! - The [configuration](crate::config) to see what is supported.
//!
//! # Example
//!
//! ```rust
//! # use stoat_prep::formula::{Formula, Status};
//! use stoat_prep::structures::literal::{CLiteral, Literal};
//!
//! let mut formula = Formula::new(2);
//!
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! assert!(formula.add_clause(vec![p, q]).is_ok());
//! assert!(formula.add_clause(vec![p.negate(), q]).is_ok());
//!
//! formula.preprocess();
//!
//! assert_eq!(formula.status(), Status::Satisfiable);
//! assert_eq!(formula.value_of(q.atom()), Some(true));
//! ```
//!
//! # Status, not errors
//!
//! The only logical failure condition is unsatisfiability, and it is signalled purely through the
//! [status](crate::formula::Status) of a formula.
//! Once a formula is unsatisfiable every further pass is a no-op, and the status never reverts.
//! [Errors](crate::types::err) are reserved for malformed input.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided --- the targets are listed in [misc::log].

pub mod builder;
pub mod procedures;

pub mod config;
pub mod formula;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;

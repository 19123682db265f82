//! Items miscellaneous to primary use of the library.

pub mod log;

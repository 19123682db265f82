/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.
Nothing written to a log is part of the library contract, and nothing written to a log should be
parsed by a caller.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [orchestration of passes](crate::procedures).
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to [self-subsuming resolution](crate::procedures::self_subsumption).
    pub const SELF_SUBSUMPTION: &str = "self_subsumption";

    /// Logs related to [subsumption elimination](crate::procedures::subsumption).
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [parsing](crate::builder).
    pub const PARSE: &str = "parse";
}

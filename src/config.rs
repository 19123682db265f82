//! Configuration of a formula.
//!
//! All configuration for preprocessing is contained within the formula holding the configuration.
//! The configuration is read when [preprocess](crate::procedures) is called, so updates made
//! between passes take effect.

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Permit the self-subsumption pass.
    pub self_subsumption: bool,

    /// Permit the subsumption elimination pass.
    pub subsumption: bool,

    /// The bound under which an occurrence list qualifies an atom for self-subsumption.
    ///
    /// Pairwise clause comparison is quadratic in the occurrence lists of an atom, so an atom is
    /// examined only if the occurrence list of the atom or of its negation is within the bound.
    pub occurrence_bound: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            self_subsumption: true,
            subsumption: true,
            occurrence_bound: 10,
        }
    }
}

/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [solve](crate::procedures::solve) recursion.
    pub const ENGINE: &str = "engine";

    /// Logs related to building [abstractions](crate::procedures::abstraction).
    pub const ABSTRACTION: &str = "abstraction";

    /// Logs related to refinement of an abstraction.
    pub const REFINEMENT: &str = "refinement";

    /// Logs related to [oracles](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to reading a formula.
    pub const PARSE: &str = "parse";
}

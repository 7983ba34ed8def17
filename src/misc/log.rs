/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to reading clause strings
    pub const PARSER: &str = "parser";

    /// Logs related to the [clause database](crate::db)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [unification](crate::procedures::unification)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [subsumption](crate::procedures::subsumption)
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to the [saturation loop](crate::procedures::saturate)
    pub const SATURATION: &str = "saturation";

    /// Logs related to [refutation reconstruction](crate::reports)
    pub const RECONSTRUCTION: &str = "reconstruction";
}

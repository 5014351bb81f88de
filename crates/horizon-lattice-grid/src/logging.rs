//! Logging targets for the data grid.
//!
//! The grid uses the `tracing` crate for instrumentation. Column synthesis is
//! logged at `debug`, ignored unknown leaf fields and deprecated operator
//! lists at `warn`. Unknown filter operators are returned as errors, not
//! logged. Install a subscriber in your application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_grid=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Row grouping column synthesis target.
    pub const GROUPING: &str = "horizon_lattice_grid::grouping";
    /// Filter operator target.
    pub const FILTER: &str = "horizon_lattice_grid::filter";
    /// Row proxy (sort/filter pass) target.
    pub const PROXY: &str = "horizon_lattice_grid::proxy";
}

//! Debugging feature flags.
//!
//! Keep them `false` by default so release builds stay quiet. Every flag is
//! further gated by `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Log index and matrix build timings at debug level.
    pub print_build_timings: bool,
    /// Log sparse-table level counts and memory after the index is built.
    pub print_index_stats: bool,
    /// Log per-row summaries while writing the report.
    pub print_row_summaries: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_build_timings: false,
    print_index_stats: false,
    print_row_summaries: true,
};

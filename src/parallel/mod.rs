//! Parallel execution support: the execution policy switch and the sharded
//! concurrent map used by parallel query evaluation.

pub mod concurrent_map;

pub use concurrent_map::ConcurrentMap;

/// Execution policy for operations that have both a single-threaded and a
/// rayon-parallel implementation. Both variants of an operation return
/// identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionPolicy {
    /// Single-threaded evaluation over ordered maps.
    #[default]
    Sequential,

    /// Fan work out across the rayon thread pool.
    Parallel,
}

//! Evaluation backends for materialization loops.
//!
//! Every materialization in lazymat (construction from an expression,
//! assignment, compound assignment, dot product) boils down to "compute the
//! value of destination cell `i` and write it". Each cell is independent and
//! written exactly once, so the loop can run serially or be split across
//! worker threads without locking.
//!
//! # Backends
//!
//! - `SerialBackend`: plain loop (the default)
//! - `RayonBackend`: data-parallel loop on the rayon thread pool

mod generic;
mod parallel;

pub use generic::SerialBackend;
pub use parallel::{MIN_PARALLEL_LEN, RayonBackend};

use std::fmt;

/// Backend trait for per-cell materialization loops.
pub trait EvalBackend {
    /// Call `f(i, &mut dest[i])` exactly once for every index of `dest`.
    ///
    /// All calls have completed when this returns.
    fn write_each<T, F>(dest: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send;
}

/// Runtime choice of backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Execution {
    /// Single-threaded loop.
    #[default]
    Serial,
    /// Data-parallel loop over the rayon thread pool.
    Parallel,
}

impl Execution {
    /// Parse the configuration spelling (`serial` or `parallel`,
    /// case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "serial" => Some(Execution::Serial),
            "parallel" => Some(Execution::Parallel),
            _ => None,
        }
    }

    /// Dispatch to the selected backend.
    pub fn write_each<T, F>(self, dest: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        match self {
            Execution::Serial => SerialBackend::write_each(dest, f),
            Execution::Parallel => RayonBackend::write_each(dest, f),
        }
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Execution::Serial => f.write_str("serial"),
            Execution::Parallel => f.write_str("parallel"),
        }
    }
}

//! Data-parallel backend using rayon.

use crate::backend::EvalBackend;
use rayon::prelude::*;

/// Minimum number of cells handed to one rayon task.
///
/// Keeps small matrices from being split into tasks cheaper than their
/// scheduling cost.
pub const MIN_PARALLEL_LEN: usize = 1 << 12;

/// Parallel backend.
///
/// Destination cells are disjoint, so workers never contend; rayon's join
/// acts as the barrier before the result is handed back.
pub struct RayonBackend;

impl EvalBackend for RayonBackend {
    fn write_each<T, F>(dest: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        dest.par_iter_mut()
            .enumerate()
            .with_min_len(MIN_PARALLEL_LEN)
            .for_each(|(i, cell)| f(i, cell));
    }
}

//! Serial (plain loop) backend.

use crate::backend::EvalBackend;

/// Single-threaded backend.
///
/// Walks the destination front to back, which keeps reads sequential when the
/// expression's layout matches the destination's.
pub struct SerialBackend;

impl EvalBackend for SerialBackend {
    fn write_each<T, F>(dest: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        for (i, cell) in dest.iter_mut().enumerate() {
            f(i, cell);
        }
    }
}

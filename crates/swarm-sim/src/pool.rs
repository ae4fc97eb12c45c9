//! The worker pool every parallel pass runs on.

use crate::SimResult;

/// Owns a dedicated Rayon pool when a thread count is configured; otherwise
/// work runs on Rayon's global pool.
///
/// Without the `parallel` feature this is an empty shell and `install`
/// simply calls the closure.
#[derive(Debug, Default)]
pub struct WorkerPool {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl WorkerPool {
    /// `None` means all logical cores.
    pub fn new(num_threads: Option<usize>) -> SimResult<Self> {
        #[cfg(feature = "parallel")]
        {
            let pool = match num_threads {
                Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
                None => None,
            };
            Ok(Self { pool })
        }

        #[cfg(not(feature = "parallel"))]
        {
            let _ = num_threads;
            Ok(Self {})
        }
    }

    /// Run `f` with this pool as the ambient Rayon pool.
    pub fn install<R, F>(&self, f: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.install(f),
                None => f(),
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            f()
        }
    }
}

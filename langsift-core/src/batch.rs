//! Batch counting
//!
//! Each input is counted independently, so a batch is a plain map over the
//! inputs. With the `parallel` feature the map runs on rayon, either on the
//! global pool or on a dedicated pool of a requested size. Results always
//! come back in input order.

use crate::detector::{Counts, Detector};
use crate::error::{Error, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Options for batch counting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl BatchOptions {
    /// Run on a dedicated pool with this many threads
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }
}

impl Detector {
    /// Count every input, preserving order
    #[cfg(feature = "parallel")]
    pub fn count_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Counts> {
        texts.par_iter().map(|text| self.count(text.as_ref())).collect()
    }

    /// Count every input, preserving order
    #[cfg(not(feature = "parallel"))]
    pub fn count_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Counts> {
        texts.iter().map(|text| self.count(text.as_ref())).collect()
    }

    /// Count every input with explicit batch options
    pub fn count_batch_with<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        options: &BatchOptions,
    ) -> Result<Vec<Counts>> {
        match options.threads {
            None => Ok(self.count_batch(texts)),
            Some(0) => Err(Error::Configuration(
                "thread count must be greater than 0".into(),
            )),
            Some(threads) => self.count_batch_on_pool(texts, threads),
        }
    }

    #[cfg(feature = "parallel")]
    fn count_batch_on_pool<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        threads: usize,
    ) -> Result<Vec<Counts>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("langsift-{i}"))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;

        log::debug!("Counting {} inputs on {} threads", texts.len(), threads);
        Ok(pool.install(|| self.count_batch(texts)))
    }

    #[cfg(not(feature = "parallel"))]
    fn count_batch_on_pool<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        threads: usize,
    ) -> Result<Vec<Counts>> {
        log::debug!(
            "Built without the parallel feature; ignoring {} threads",
            threads
        );
        Ok(self.count_batch(texts))
    }
}

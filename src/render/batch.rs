use rayon::prelude::*;

use crate::foundation::error::{RoundelError, RoundelResult};
use crate::render::compositor::{RenderResult, render};
use crate::render::input::InputSource;
use crate::style::config::StyleConfig;
use crate::style::transform::TransformState;

/// One avatar to render as part of a batch.
#[derive(Clone, Debug)]
pub struct RenderJob {
    pub input: InputSource,
    pub style: StyleConfig,
    pub transform: TransformState,
}

impl RenderJob {
    /// Initials job with the default transform.
    pub fn initials(name: impl Into<String>, style: StyleConfig) -> Self {
        Self {
            input: InputSource::Initials { text: name.into() },
            style,
            transform: TransformState::default(),
        }
    }
}

/// Render many jobs in parallel.
///
/// Results come back in job order. A failed job only fails its own slot; the outer error is
/// reserved for pool setup (`threads = Some(0)` is rejected).
#[tracing::instrument(skip(jobs), fields(jobs = jobs.len()))]
pub fn render_batch(
    jobs: &[RenderJob],
    threads: Option<usize>,
) -> RoundelResult<Vec<RoundelResult<RenderResult>>> {
    let pool = build_thread_pool(threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "rendering batch");

    Ok(pool.install(|| {
        jobs.par_iter()
            .map(|job| render(&job.input, &job.style, &job.transform))
            .collect()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> RoundelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RoundelError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RoundelError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;

//! Default pipeline factory with per-kind pooling.

use crate::domain::{Pipeline, PipelineKind};
use crate::ports::PipelineFactory;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

/// Released pipelines kept per kind by default.
pub const DEFAULT_POOL_CAPACITY: usize = 16;

/// Reuses released pipelines before creating new ones.
pub struct DefaultPipelineFactory {
    capacity: usize,
    pool: Mutex<HashMap<PipelineKind, Vec<Pipeline>>>,
}

impl DefaultPipelineFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }

    /// Keep at most `capacity` released pipelines per kind; extras are dropped.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            pool: Mutex::new(HashMap::new()),
        }
    }

    /// Released pipelines of `kind` waiting for reuse.
    #[must_use]
    pub fn pooled_count(&self, kind: PipelineKind) -> usize {
        self.pool.lock().get(&kind).map_or(0, Vec::len)
    }
}

impl PipelineFactory for DefaultPipelineFactory {
    fn get_pipeline(&self, kind: PipelineKind) -> Pipeline {
        if let Some(pipeline) = self.pool.lock().get_mut(&kind).and_then(Vec::pop) {
            trace!(kind = %kind, id = %pipeline.id(), "Pipeline reused");
            return pipeline;
        }

        let pipeline = Pipeline::new(kind);
        trace!(kind = %kind, id = %pipeline.id(), "Pipeline created");
        pipeline
    }

    fn release_pipeline(&self, pipeline: Pipeline) {
        let mut pool = self.pool.lock();
        let pooled = pool.entry(pipeline.kind()).or_default();
        if pooled.len() >= self.capacity {
            trace!(kind = %pipeline.kind(), id = %pipeline.id(), "Pipeline pool full; dropped");
            return;
        }
        pooled.push(pipeline);
    }
}

impl Default for DefaultPipelineFactory {
    fn default() -> Self {
        Self::new()
    }
}

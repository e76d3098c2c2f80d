//! Pipeline identities.
//!
//! Stage execution is owned by the runtime; the configuration only hands out
//! and pools pipeline instances.

use std::fmt;
use uuid::Uuid;

/// The processing flows a bus runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Startup,
    Shutdown,
    Inbox,
    ControlInbox,
    Outbox,
    Deferred,
    Distributor,
    Transport,
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A pipeline instance. Instances are pooled, so the id survives reuse.
#[derive(Debug, PartialEq, Eq)]
pub struct Pipeline {
    id: Uuid,
    kind: PipelineKind,
}

impl Pipeline {
    /// A new pipeline of `kind`.
    #[must_use]
    pub fn new(kind: PipelineKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PipelineKind {
        self.kind
    }
}

//! Generation jobs: everything one asynchronous generation call needs,
//! captured at dispatch time.

use nb_core::id::NodeId;
use nb_core::model::GenerationToken;
use nb_gen::{Credential, GeneratedImage, GenerationError, GenerationRequest, ImageGenerator};

/// Whether the job fills a freshly submitted node or redoes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Initial,
    Regenerate,
}

/// A dispatched generation, detached from the graph.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub node: NodeId,
    pub token: GenerationToken,
    pub kind: GenerationKind,
    /// Key as it was when the job was created.
    pub credential: Credential,
    pub request: GenerationRequest,
}

impl GenerationJob {
    /// Issue the single external call and package the result for write-back.
    pub async fn run(self, generator: &dyn ImageGenerator) -> GenerationCompletion {
        log::debug!(
            "job {} ({:?}) started with {} source image(s)",
            self.node,
            self.kind,
            self.request.sources.len()
        );
        let result = generator.generate(&self.credential, &self.request).await;
        GenerationCompletion {
            node: self.node,
            token: self.token,
            kind: self.kind,
            result,
        }
    }
}

/// Result of a job, to be applied back onto the canvas.
#[derive(Debug)]
pub struct GenerationCompletion {
    pub node: NodeId,
    pub token: GenerationToken,
    pub kind: GenerationKind,
    pub result: Result<GeneratedImage, GenerationError>,
}

/// What applying a completion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The image was written to the node.
    Applied,
    /// The node's generating state was cleared and the failure recorded.
    Failed(String),
    /// The node was deleted or re-dispatched since; nothing was written.
    Stale,
}

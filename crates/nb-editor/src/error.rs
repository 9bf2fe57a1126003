use nb_core::id::NodeId;
use nb_core::model::NodeVariant;
use thiserror::Error;

/// Why a node action was refused. Every variant is raised before the graph
/// is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("node {id} is not a {expected:?} node")]
    WrongKind { id: NodeId, expected: NodeVariant },

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("Gemini API key is not set")]
    MissingCredential,

    #[error("node {0} is already generating")]
    AlreadyGenerating(NodeId),
}

use nb_core::id::{EdgeId, NodeId};
use nb_core::model::{Anchor, CanvasNode, Connection, NodePatch, Position};

/// A single structural change to the canvas graph.
#[derive(Debug, Clone)]
pub enum GraphMutation {
    AddNode {
        node: Box<CanvasNode>,
    },
    RemoveNode {
        id: NodeId,
    },
    UpdateNode {
        id: NodeId,
        patch: NodePatch,
    },
    MoveNode {
        id: NodeId,
        position: Position,
    },
    Connect {
        connection: Connection,
    },
    Disconnect {
        edge: EdgeId,
    },
    /// Move every edge into `from` onto `to`'s `anchor`.
    RewireIncoming {
        from: NodeId,
        to: NodeId,
        anchor: Anchor,
    },
}

impl GraphMutation {
    pub fn add(node: CanvasNode) -> Self {
        GraphMutation::AddNode {
            node: Box::new(node),
        }
    }
}

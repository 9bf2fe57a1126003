use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global string interner for canvas ids. Nodes and edges share it.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Process-wide sequence behind generated ids. Never reset, so two ids minted
/// in the same instant (e.g. a multi-file drop) still differ.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identifier of an edge. Edges share the node interner and are told apart
/// by their `edge_` prefix.
pub type EdgeId = NodeId;

/// A lightweight, interned identifier for canvas nodes and edges.
/// Internally a `Spur` index: 4 bytes, Copy, O(1) hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Spur);

impl NodeId {
    /// Intern a string as a NodeId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        NodeId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a unique id with a kind prefix (e.g. `text_3`, `image_4`).
    pub fn with_prefix(prefix: &str) -> Self {
        let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }

    /// Fresh id for a text-prompt node.
    pub fn text() -> Self {
        Self::with_prefix("text")
    }

    /// Fresh id for an image node.
    pub fn image() -> Self {
        Self::with_prefix("image")
    }

    /// Fresh id for an edge.
    pub fn edge() -> EdgeId {
        Self::with_prefix("edge")
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(NodeId::intern(&s))
    }
}

//! Core canvas data model.
//!
//! The canvas is a directed graph where nodes are either text prompts or
//! images and edges wire an image's output anchor into another node's input
//! anchor. Edges carry their anchors, so two nodes may be joined more than
//! once through different anchors. Cycles are allowed; only direct
//! predecessors are ever consulted.
//!
//! Every operation here is total: invalid input is ignored and reported
//! through the return value, never as an error. Policy (who may connect to
//! what, when a node may regenerate) lives in the editor crate.

use crate::id::{EdgeId, NodeId};
use crate::image::{ImageSource, InlineImage};
use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

// ─── Geometry ────────────────────────────────────────────────────────────

/// Canvas-space position of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// ─── Anchors ─────────────────────────────────────────────────────────────

/// A named connection point on a node. Serialized with the short handle
/// ids the rendering layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    #[serde(rename = "t")]
    Top,
    #[serde(rename = "b")]
    Bottom,
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
}

/// The closed set of node kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeVariant {
    Text,
    Image,
}

impl NodeVariant {
    /// Anchors that may receive an edge.
    pub const fn inputs(self) -> &'static [Anchor] {
        match self {
            NodeVariant::Text => &[Anchor::Top, Anchor::Left, Anchor::Right],
            NodeVariant::Image => &[Anchor::Top],
        }
    }

    /// Anchors that may emit an edge. Text nodes have none: submitting a
    /// text node replaces it instead of feeding anything downstream.
    pub const fn outputs(self) -> &'static [Anchor] {
        match self {
            NodeVariant::Text => &[],
            NodeVariant::Image => &[Anchor::Bottom],
        }
    }

    pub fn accepts(self, anchor: Anchor) -> bool {
        self.inputs().contains(&anchor)
    }

    pub fn emits(self, anchor: Anchor) -> bool {
        self.outputs().contains(&anchor)
    }
}

// ─── Generation tokens ───────────────────────────────────────────────────

/// Stamp identifying one in-flight generation for one image node.
///
/// A completion may only write back if the node still carries the token it
/// was dispatched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationToken(u64);

impl GenerationToken {
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        GenerationToken(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

// ─── Payloads ────────────────────────────────────────────────────────────

/// Payload of a text-prompt node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPayload {
    /// Prompt text as typed.
    pub text: String,
    pub title: Option<String>,
    /// Freshly created; the shell should focus its input once.
    pub auto_focus: bool,
    /// Image node this text was spawned from via "add next".
    pub parent: Option<NodeId>,
}

/// Payload of an image node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Prompt that produced (or will produce) the image.
    pub prompt: String,
    pub image: Option<ImageSource>,
    /// `image` was borrowed from the parent node as a blurred preview and
    /// is not this node's own result yet.
    pub placeholder: bool,
    pub generating: bool,
    pub error: Option<String>,
    pub auto_focus: bool,
    /// Token of the generation currently allowed to write back.
    #[serde(skip)]
    pub pending: Option<GenerationToken>,
}

/// What an image node should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDisplay {
    /// Spinner; `preview` is true when an older image is shown blurred.
    Generating { preview: bool },
    Ready,
    Failed,
    Empty,
}

impl ImagePayload {
    pub fn display(&self) -> ImageDisplay {
        if self.generating {
            ImageDisplay::Generating {
                preview: self.image.is_some(),
            }
        } else if self.image.is_some() {
            ImageDisplay::Ready
        } else if self.error.is_some() {
            ImageDisplay::Failed
        } else {
            ImageDisplay::Empty
        }
    }

    /// Mark the node as generating under a fresh token and return it.
    pub fn begin_generation(&mut self) -> GenerationToken {
        let token = GenerationToken::next();
        self.generating = true;
        self.error = None;
        self.pending = Some(token);
        token
    }

    pub fn is_pending(&self, token: GenerationToken) -> bool {
        self.pending == Some(token)
    }

    pub fn finish_with_image(&mut self, image: ImageSource) {
        self.image = Some(image);
        self.placeholder = false;
        self.generating = false;
        self.error = None;
        self.pending = None;
    }

    /// Clear the generating state after a failure. A borrowed placeholder
    /// is dropped; the node's own earlier image is kept.
    pub fn finish_with_error(&mut self, message: impl Into<String>) {
        if self.placeholder {
            self.image = None;
            self.placeholder = false;
        }
        self.generating = false;
        self.error = Some(message.into());
        self.pending = None;
    }

    /// The node's own embedded image, if it has one.
    pub fn own_inline(&self) -> Option<&InlineImage> {
        if self.placeholder {
            return None;
        }
        self.image.as_ref().and_then(ImageSource::inline)
    }
}

/// Variant-specific node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NodeKind {
    Text(TextPayload),
    Image(ImagePayload),
}

impl NodeKind {
    pub fn variant(&self) -> NodeVariant {
        match self {
            NodeKind::Text(_) => NodeVariant::Text,
            NodeKind::Image(_) => NodeVariant::Image,
        }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// A vertex on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    pub id: NodeId,
    pub position: Position,
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Insertion stamp assigned by the graph; 0 until added.
    #[serde(skip)]
    pub seq: u64,
}

impl CanvasNode {
    pub fn new(id: NodeId, position: Position, kind: NodeKind) -> Self {
        Self {
            id,
            position,
            kind,
            seq: 0,
        }
    }

    /// New text node with a freshly generated id.
    pub fn text(position: Position, payload: TextPayload) -> Self {
        Self::new(NodeId::text(), position, NodeKind::Text(payload))
    }

    /// New image node with a freshly generated id.
    pub fn image(position: Position, payload: ImagePayload) -> Self {
        Self::new(NodeId::image(), position, NodeKind::Image(payload))
    }

    pub fn variant(&self) -> NodeVariant {
        self.kind.variant()
    }

    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            NodeKind::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextPayload> {
        match &mut self.kind {
            NodeKind::Text(t) => Some(t),
            NodeKind::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePayload> {
        match &self.kind {
            NodeKind::Image(i) => Some(i),
            NodeKind::Text(_) => None,
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImagePayload> {
        match &mut self.kind {
            NodeKind::Image(i) => Some(i),
            NodeKind::Text(_) => None,
        }
    }
}

// ─── Partial updates ─────────────────────────────────────────────────────

/// Shallow overwrite of text payload fields; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub text: Option<String>,
    pub title: Option<Option<String>>,
    pub auto_focus: Option<bool>,
}

/// Shallow overwrite of image payload fields; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePatch {
    pub prompt: Option<String>,
    pub image: Option<Option<ImageSource>>,
    pub generating: Option<bool>,
    pub error: Option<Option<String>>,
    pub auto_focus: Option<bool>,
}

/// A partial payload update. The variant must match the node's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NodePatch {
    Text(TextPatch),
    Image(ImagePatch),
}

impl NodePatch {
    pub fn text(text: impl Into<String>) -> Self {
        NodePatch::Text(TextPatch {
            text: Some(text.into()),
            ..Default::default()
        })
    }

    pub fn prompt(prompt: impl Into<String>) -> Self {
        NodePatch::Image(ImagePatch {
            prompt: Some(prompt.into()),
            ..Default::default()
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NodePatch::Text(p) => *p == TextPatch::default(),
            NodePatch::Image(p) => *p == ImagePatch::default(),
        }
    }

    /// Merge into `kind`. Returns false on a variant mismatch.
    fn apply(&self, kind: &mut NodeKind) -> bool {
        match (self, kind) {
            (NodePatch::Text(p), NodeKind::Text(t)) => {
                if let Some(text) = &p.text {
                    t.text = text.clone();
                }
                if let Some(title) = &p.title {
                    t.title = title.clone();
                }
                if let Some(auto_focus) = p.auto_focus {
                    t.auto_focus = auto_focus;
                }
                true
            }
            (NodePatch::Image(p), NodeKind::Image(i)) => {
                if let Some(prompt) = &p.prompt {
                    i.prompt = prompt.clone();
                }
                if let Some(image) = &p.image {
                    i.image = image.clone();
                    i.placeholder = false;
                }
                if let Some(generating) = p.generating {
                    i.generating = generating;
                    if !generating {
                        i.pending = None;
                    }
                }
                if let Some(error) = &p.error {
                    i.error = error.clone();
                }
                if let Some(auto_focus) = p.auto_focus {
                    i.auto_focus = auto_focus;
                }
                true
            }
            _ => false,
        }
    }
}

// ─── Edges ───────────────────────────────────────────────────────────────

/// Endpoints of a prospective edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub source: NodeId,
    pub source_anchor: Anchor,
    pub target: NodeId,
    pub target_anchor: Anchor,
}

impl Connection {
    pub fn new(source: NodeId, source_anchor: Anchor, target: NodeId, target_anchor: Anchor) -> Self {
        Self {
            source,
            source_anchor,
            target,
            target_anchor,
        }
    }
}

/// A directed wire from an output anchor to an input anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub source_anchor: Anchor,
    pub target: NodeId,
    pub target_anchor: Anchor,
    /// Insertion stamp assigned by the graph.
    #[serde(skip)]
    pub seq: u64,
}

impl Edge {
    pub fn connection(&self) -> Connection {
        Connection::new(self.source, self.source_anchor, self.target, self.target_anchor)
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

// ─── Canvas Graph ────────────────────────────────────────────────────────

/// The canvas: nodes plus the edges wiring them.
///
/// Edge endpoints always reference live nodes. Removing a node drops every
/// incident edge with it.
#[derive(Debug, Clone)]
pub struct CanvasGraph {
    /// The underlying directed graph. Edge weights carry their own ids and
    /// anchors.
    pub graph: StableDiGraph<CanvasNode, Edge>,

    /// Index from NodeId → NodeIndex for fast lookup.
    pub id_index: HashMap<NodeId, NodeIndex>,

    /// Next insertion stamp. Petgraph recycles freed indices, so ordering
    /// goes by this instead.
    next_seq: u64,
}

impl CanvasGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            id_index: HashMap::new(),
            next_seq: 0,
        }
    }

    fn stamp(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Append a node. Returns false (and leaves the graph untouched) if the
    /// id is already taken.
    pub fn add_node(&mut self, mut node: CanvasNode) -> bool {
        let id = node.id;
        if self.id_index.contains_key(&id) {
            log::warn!("add_node: id {id} already on canvas, ignoring");
            return false;
        }
        node.seq = self.stamp();
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        log::debug!("add_node {id}");
        true
    }

    /// Remove a node and every edge touching it. No-op for unknown ids.
    pub fn remove_node(&mut self, id: NodeId) -> Option<CanvasNode> {
        let idx = self.id_index.remove(&id)?;
        let removed = self.graph.remove_node(idx);
        if removed.is_some() {
            log::debug!("remove_node {id}");
        }
        removed
    }

    pub fn get(&self, id: NodeId) -> Option<&CanvasNode> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut CanvasNode> {
        self.id_index
            .get(&id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.id_index.contains_key(&id)
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> Vec<&CanvasNode> {
        let mut nodes: Vec<&CanvasNode> = self.graph.node_weights().collect();
        nodes.sort_by_key(|n| n.seq);
        nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.graph.edge_weights().collect();
        edges.sort_by_key(|e| e.seq);
        edges
    }

    /// Edges whose target is `id`, in insertion order.
    pub fn incoming(&self, id: NodeId) -> Vec<&Edge> {
        self.directed(id, Direction::Incoming)
    }

    /// Edges whose source is `id`, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> Vec<&Edge> {
        self.directed(id, Direction::Outgoing)
    }

    fn directed(&self, id: NodeId, dir: Direction) -> Vec<&Edge> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        let mut edges: Vec<&Edge> = self.graph.edges_directed(idx, dir).map(|e| e.weight()).collect();
        edges.sort_by_key(|e| e.seq);
        edges
    }

    /// Merge a partial payload into a node. Unknown ids and variant
    /// mismatches are no-ops. Returns whether the patch was applied.
    pub fn update_node(&mut self, id: NodeId, patch: &NodePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        let applied = patch.apply(&mut node.kind);
        if !applied {
            log::warn!("update_node: patch kind does not match node {id}");
        }
        applied
    }

    /// Move a node (drag callbacks from the rendering layer).
    pub fn set_position(&mut self, id: NodeId, position: Position) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Whether `conn` would be a structurally valid, new edge.
    pub fn can_connect(&self, conn: &Connection) -> bool {
        if conn.source == conn.target {
            return false;
        }
        let (Some(source), Some(target)) = (self.get(conn.source), self.get(conn.target)) else {
            return false;
        };
        if !source.variant().emits(conn.source_anchor) || !target.variant().accepts(conn.target_anchor) {
            return false;
        }
        !self.outgoing(conn.source).iter().any(|e| e.connection() == *conn)
    }

    /// Add an edge. Self-loops, dangling endpoints, anchors the node kinds
    /// don't expose, and exact duplicates are rejected silently. Returns
    /// the new edge id.
    pub fn connect(&mut self, conn: Connection) -> Option<EdgeId> {
        if !self.can_connect(&conn) {
            log::warn!(
                "connect: rejected {}:{:?} -> {}:{:?}",
                conn.source,
                conn.source_anchor,
                conn.target,
                conn.target_anchor
            );
            return None;
        }
        let source_idx = self.index_of(conn.source)?;
        let target_idx = self.index_of(conn.target)?;
        let id = NodeId::edge();
        let seq = self.stamp();
        self.graph.add_edge(
            source_idx,
            target_idx,
            Edge {
                id,
                source: conn.source,
                source_anchor: conn.source_anchor,
                target: conn.target,
                target_anchor: conn.target_anchor,
                seq,
            },
        );
        Some(id)
    }

    /// Remove one edge by id.
    pub fn disconnect(&mut self, edge_id: EdgeId) -> Option<Edge> {
        let idx = self
            .graph
            .edge_indices()
            .find(|idx| self.graph[*idx].id == edge_id)?;
        self.graph.remove_edge(idx)
    }

    /// Point every edge that targets `old` at `new`'s `anchor` instead,
    /// keeping source and source anchor, then drop every edge still touching
    /// `old`. Returns how many edges were recreated.
    pub fn rewire_incoming(&mut self, old: NodeId, new: NodeId, anchor: Anchor) -> usize {
        let Some(old_idx) = self.index_of(old) else {
            return 0;
        };
        let incoming: Vec<Connection> = self.incoming(old).iter().map(|e| e.connection()).collect();

        let touching: Vec<EdgeIndex> = self
            .graph
            .edges_directed(old_idx, Direction::Incoming)
            .chain(self.graph.edges_directed(old_idx, Direction::Outgoing))
            .map(|e| e.id())
            .collect();
        for idx in touching {
            self.graph.remove_edge(idx);
        }

        incoming
            .into_iter()
            .filter_map(|c| self.connect(Connection::new(c.source, c.source_anchor, new, anchor)))
            .count()
    }

    /// Embedded images of the image nodes wired directly into `id`, in edge
    /// order. Only direct predecessors are consulted, so cycles are harmless.
    pub fn upstream_images(&self, id: NodeId) -> SmallVec<[InlineImage; 4]> {
        self.incoming(id)
            .iter()
            .filter_map(|e| self.get(e.source))
            .filter_map(CanvasNode::as_image)
            .filter_map(ImagePayload::own_inline)
            .cloned()
            .collect()
    }
}

impl Default for CanvasGraph {
    fn default() -> Self {
        Self::new()
    }
}

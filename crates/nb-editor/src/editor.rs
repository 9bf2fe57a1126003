//! Node interaction controllers.
//!
//! `CanvasEditor` owns the graph and applies every user action to it
//! synchronously. Actions that need the generation service return a
//! [`GenerationJob`]; the caller runs it (directly or through a
//! [`Dispatcher`](crate::dispatch::Dispatcher)) and hands the completion
//! back to [`CanvasEditor::apply_completion`].

use crate::config::LayoutConfig;
use crate::dispatch::Dispatcher;
use crate::download::{DownloadDebouncer, DownloadRequest};
use crate::error::ActionError;
use crate::generation::{CompletionOutcome, GenerationCompletion, GenerationJob, GenerationKind};
use crate::input::{InputEvent, Modifiers};
use crate::mutation::GraphMutation;
use crate::notice::Notice;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::slash::SlashSession;
use crate::tools::{CanvasTool, NEW_TEXT_TITLE, Tool};
use nb_core::id::{EdgeId, NodeId};
use nb_core::model::*;
use nb_gen::{Credential, CredentialStore, GenerationRequest};
use std::collections::HashMap;
use std::time::Instant;

/// Result of a key press inside a text node.
#[derive(Debug)]
pub enum KeyOutcome {
    Ignored,
    PaletteDismissed,
    Submitted(Result<GenerationJob, ActionError>),
}

/// The canvas plus everything needed to act on it.
pub struct CanvasEditor {
    pub graph: CanvasGraph,
    pub credentials: CredentialStore,
    tool: CanvasTool,
    slash: HashMap<NodeId, SlashSession>,
    downloads: DownloadDebouncer,
    notices: Vec<Notice>,
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new(CredentialStore::new(), LayoutConfig::default())
    }
}

impl CanvasEditor {
    pub fn new(credentials: CredentialStore, layout: LayoutConfig) -> Self {
        Self {
            graph: CanvasGraph::new(),
            credentials,
            downloads: DownloadDebouncer::new(layout.download_debounce),
            tool: CanvasTool::new(layout),
            slash: HashMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.tool.layout
    }

    /// Drain queued user-facing notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        log::debug!("notice: {}", notice.title);
        self.notices.push(notice);
    }

    fn require_credential(&mut self) -> Result<Credential, ActionError> {
        match self.credentials.current() {
            Some(credential) => Ok(credential),
            None => {
                self.notify(Notice::missing_credential());
                Err(ActionError::MissingCredential)
            }
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Apply a mutation. Returns whether the graph changed.
    pub fn apply_mutation(&mut self, mutation: GraphMutation) -> bool {
        match mutation {
            GraphMutation::AddNode { node } => self.graph.add_node(*node),
            GraphMutation::RemoveNode { id } => {
                self.slash.remove(&id);
                self.downloads.forget(id);
                self.graph.remove_node(id).is_some()
            }
            GraphMutation::UpdateNode { id, patch } => self.graph.update_node(id, &patch),
            GraphMutation::MoveNode { id, position } => self.graph.set_position(id, position),
            GraphMutation::Connect { connection } => self.graph.connect(connection).is_some(),
            GraphMutation::Disconnect { edge } => self.graph.disconnect(edge).is_some(),
            GraphMutation::RewireIncoming { from, to, anchor } => {
                self.graph.rewire_incoming(from, to, anchor) > 0
            }
        }
    }

    /// Route a pane-level event through the canvas tool. Returns the ids of
    /// nodes it created.
    pub fn handle_input(&mut self, event: &InputEvent, hit_node: Option<NodeId>) -> Vec<NodeId> {
        let mutations = self.tool.handle(event, hit_node);
        let mut created = Vec::new();
        for mutation in mutations {
            let id = match &mutation {
                GraphMutation::AddNode { node } => Some(node.id),
                _ => None,
            };
            if self.apply_mutation(mutation)
                && let Some(id) = id
            {
                created.push(id);
            }
        }
        created
    }

    // ─── Generic node actions ────────────────────────────────────────────

    /// Delete a node and its edges. Irreversible.
    pub fn delete(&mut self, id: NodeId) -> bool {
        self.apply_mutation(GraphMutation::RemoveNode { id })
    }

    /// Explicit user connection.
    pub fn connect(&mut self, connection: Connection) -> Option<EdgeId> {
        self.graph.connect(connection)
    }

    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        self.apply_mutation(GraphMutation::MoveNode { id, position })
    }

    /// Clear the one-shot focus flag once the shell has focused the node.
    pub fn focused(&mut self, id: NodeId) -> bool {
        let patch = match self.graph.get(id).map(CanvasNode::variant) {
            Some(NodeVariant::Text) => NodePatch::Text(TextPatch {
                auto_focus: Some(false),
                ..Default::default()
            }),
            Some(NodeVariant::Image) => NodePatch::Image(ImagePatch {
                auto_focus: Some(false),
                ..Default::default()
            }),
            None => return false,
        };
        self.graph.update_node(id, &patch)
    }

    // ─── Text nodes ──────────────────────────────────────────────────────

    fn text_payload(&self, id: NodeId) -> Result<&TextPayload, ActionError> {
        self.graph
            .get(id)
            .ok_or(ActionError::NodeNotFound(id))?
            .as_text()
            .ok_or(ActionError::WrongKind {
                id,
                expected: NodeVariant::Text,
            })
    }

    /// Replace a text node's prompt as the user types, driving the slash
    /// palette.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        if self.text_payload(id).is_err() {
            return false;
        }
        self.graph.update_node(id, &NodePatch::text(text));
        self.slash.entry(id).or_default().on_text(text);
        true
    }

    pub fn slash(&self, id: NodeId) -> Option<&SlashSession> {
        self.slash.get(&id)
    }

    /// Slash state of a text node, created on first use.
    pub fn slash_mut(&mut self, id: NodeId) -> Option<&mut SlashSession> {
        if self.text_payload(id).is_err() {
            return None;
        }
        Some(self.slash.entry(id).or_default())
    }

    /// Compose the open dialog's prompt into the node's text.
    pub fn confirm_slash(&mut self, id: NodeId) -> bool {
        let Some(prompt) = self.slash.get_mut(&id).and_then(SlashSession::confirm) else {
            return false;
        };
        self.graph.update_node(id, &NodePatch::text(prompt))
    }

    pub fn cancel_slash(&mut self, id: NodeId) {
        if let Some(session) = self.slash.get_mut(&id) {
            session.cancel();
        }
    }

    /// Keyboard handling inside a text node's input.
    pub fn handle_text_key(&mut self, id: NodeId, key: &str, modifiers: Modifiers) -> KeyOutcome {
        let action = ShortcutMap::resolve(
            key,
            modifiers.ctrl,
            modifiers.shift,
            modifiers.alt,
            modifiers.meta,
        );
        match action {
            Some(ShortcutAction::Submit) => KeyOutcome::Submitted(self.submit_text(id)),
            Some(ShortcutAction::DismissPalette) => {
                match self.slash.get_mut(&id).map(SlashSession::dismiss_palette) {
                    Some(true) => KeyOutcome::PaletteDismissed,
                    _ => KeyOutcome::Ignored,
                }
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Replace a text node with a generating image node and return the job
    /// that will fill it.
    ///
    /// Blank text and a missing key abort before anything changes. On
    /// success the text node's incoming edges end on the new node's top
    /// anchor, and a text node spawned from an image starts with that
    /// image as a blurred placeholder.
    pub fn submit_text(&mut self, id: NodeId) -> Result<GenerationJob, ActionError> {
        let (prompt, parent, position) = {
            let node = self.graph.get(id).ok_or(ActionError::NodeNotFound(id))?;
            let text = node.as_text().ok_or(ActionError::WrongKind {
                id,
                expected: NodeVariant::Text,
            })?;
            (text.text.trim().to_string(), text.parent, node.position)
        };
        if prompt.is_empty() {
            return Err(ActionError::EmptyPrompt);
        }
        let credential = self.require_credential()?;

        let sources = self.graph.upstream_images(id);
        let parent_image = parent
            .and_then(|p| self.graph.get(p))
            .and_then(CanvasNode::as_image)
            .and_then(|p| p.image.clone());
        let position = if parent.is_some() {
            position.offset(0.0, self.tool.layout.chained_image_offset)
        } else {
            position
        };

        let mut payload = ImagePayload {
            prompt: prompt.clone(),
            placeholder: parent_image.is_some(),
            image: parent_image,
            ..Default::default()
        };
        let token = payload.begin_generation();
        let image = CanvasNode::image(position, payload);
        let image_id = image.id;

        self.apply_mutation(GraphMutation::add(image));
        self.apply_mutation(GraphMutation::RewireIncoming {
            from: id,
            to: image_id,
            anchor: Anchor::Top,
        });
        self.apply_mutation(GraphMutation::RemoveNode { id });
        log::debug!("submit {id} -> {image_id} with {} source(s)", sources.len());

        Ok(GenerationJob {
            node: image_id,
            token,
            kind: GenerationKind::Initial,
            credential,
            request: GenerationRequest::new(prompt, sources),
        })
    }

    // ─── Image nodes ─────────────────────────────────────────────────────

    /// Re-run generation for an image node with its own prompt. The node's
    /// current image stays visible (blurred) while generating and survives
    /// a failure.
    pub fn regenerate(&mut self, id: NodeId) -> Result<GenerationJob, ActionError> {
        let prompt = {
            let node = self.graph.get(id).ok_or(ActionError::NodeNotFound(id))?;
            let image = node.as_image().ok_or(ActionError::WrongKind {
                id,
                expected: NodeVariant::Image,
            })?;
            if image.generating {
                return Err(ActionError::AlreadyGenerating(id));
            }
            image.prompt.trim().to_string()
        };
        if prompt.is_empty() {
            return Err(ActionError::EmptyPrompt);
        }
        let credential = self.require_credential()?;

        let sources = self.graph.upstream_images(id);
        let token = self
            .graph
            .get_mut(id)
            .and_then(CanvasNode::as_image_mut)
            .map(ImagePayload::begin_generation)
            .ok_or(ActionError::NodeNotFound(id))?;
        log::debug!("regenerate {id} with {} source(s)", sources.len());

        Ok(GenerationJob {
            node: id,
            token,
            kind: GenerationKind::Regenerate,
            credential,
            request: GenerationRequest::new(prompt, sources),
        })
    }

    /// Branch a new text node below an image node, wired from its bottom
    /// anchor.
    pub fn add_next(&mut self, source: NodeId) -> Result<NodeId, ActionError> {
        let node = self.graph.get(source).ok_or(ActionError::NodeNotFound(source))?;
        if node.as_image().is_none() {
            return Err(ActionError::WrongKind {
                id: source,
                expected: NodeVariant::Image,
            });
        }
        let position = node.position.offset(0.0, self.tool.layout.add_next_offset);

        let text = CanvasNode::text(
            position,
            TextPayload {
                title: Some(NEW_TEXT_TITLE.to_string()),
                auto_focus: true,
                parent: Some(source),
                ..Default::default()
            },
        );
        let text_id = text.id;
        self.apply_mutation(GraphMutation::add(text));
        self.apply_mutation(GraphMutation::Connect {
            connection: Connection::new(source, Anchor::Bottom, text_id, Anchor::Top),
        });
        Ok(text_id)
    }

    /// Approve a download of an image node's payload, unless one started
    /// within the debounce window or there is nothing to save.
    pub fn request_download(
        &mut self,
        id: NodeId,
        file_name: Option<String>,
        now: Instant,
    ) -> Option<DownloadRequest> {
        let image = self.graph.get(id)?.as_image()?.image.clone();
        if !self.downloads.try_acquire(id, now) {
            return None;
        }
        Some(DownloadRequest {
            node: id,
            source: image?,
            file_name,
        })
    }

    // ─── Completions ─────────────────────────────────────────────────────

    /// Write a finished job back. Only the dispatch the node is still
    /// waiting on may write; anything else is dropped as stale.
    pub fn apply_completion(&mut self, completion: GenerationCompletion) -> CompletionOutcome {
        let GenerationCompletion {
            node,
            token,
            kind,
            result,
        } = completion;

        let Some(payload) = self.graph.get_mut(node).and_then(CanvasNode::as_image_mut) else {
            log::debug!("completion for {node} dropped: node is gone");
            return CompletionOutcome::Stale;
        };
        if !payload.is_pending(token) {
            log::debug!("completion for {node} dropped: token {} superseded", token.value());
            return CompletionOutcome::Stale;
        }

        match result {
            Ok(generated) => {
                payload.finish_with_image(generated.into_source());
                log::debug!("completion for {node} applied");
                CompletionOutcome::Applied
            }
            Err(e) => {
                let message = e.to_string();
                payload.finish_with_error(message.clone());
                log::error!("generation for {node} failed: {message}");
                self.notify(Notice::generation_failed(kind, message.clone()));
                CompletionOutcome::Failed(message)
            }
        }
    }

    /// Apply every completion that has already arrived.
    pub fn drain_completions(&mut self, dispatcher: &mut Dispatcher) -> Vec<CompletionOutcome> {
        let mut outcomes = Vec::new();
        while let Some(completion) = dispatcher.try_completion() {
            outcomes.push(self.apply_completion(completion));
        }
        outcomes
    }
}

//! Tool system for canvas interactions.
//!
//! A tool translates pane-level input into `GraphMutation` commands that
//! the editor applies.
//!
//! ## Modifier behaviors
//!
//! | Modifiers | Pane click |
//! |-----------|------------|
//! | **⌘/Ctrl** | New text node centred on the click |
//! | **⌘/Ctrl + Shift** | New empty image node centred on the click |
//! | none | Nothing |

use crate::config::LayoutConfig;
use crate::input::InputEvent;
use crate::mutation::GraphMutation;
use nb_core::id::NodeId;
use nb_core::model::*;

/// Trait for tools that handle input and produce mutations.
pub trait Tool {
    /// Handle an input event, returning zero or more mutations.
    /// `hit_node` is the node under the pointer, if any.
    fn handle(&mut self, event: &InputEvent, hit_node: Option<NodeId>) -> Vec<GraphMutation>;
}

/// Title given to text nodes the editor creates.
pub const NEW_TEXT_TITLE: &str = "New Text Node";

// ─── Canvas Tool ─────────────────────────────────────────────────────────

/// Creates nodes from clicks and drops on empty canvas.
#[derive(Debug, Clone, Default)]
pub struct CanvasTool {
    pub layout: LayoutConfig,
}

impl CanvasTool {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    fn new_text_node(&self, click: Position) -> CanvasNode {
        CanvasNode::text(
            self.layout.text_origin(click),
            TextPayload {
                title: Some(NEW_TEXT_TITLE.to_string()),
                auto_focus: true,
                ..Default::default()
            },
        )
    }

    fn new_image_node(&self, click: Position) -> CanvasNode {
        CanvasNode::image(
            self.layout.image_origin(click),
            ImagePayload {
                auto_focus: true,
                ..Default::default()
            },
        )
    }
}

impl Tool for CanvasTool {
    fn handle(&mut self, event: &InputEvent, hit_node: Option<NodeId>) -> Vec<GraphMutation> {
        match event {
            InputEvent::PaneClick { x, y, modifiers } => {
                if hit_node.is_some() || !modifiers.command() {
                    return vec![];
                }
                let click = Position::new(*x, *y);
                let node = if modifiers.shift {
                    self.new_image_node(click)
                } else {
                    self.new_text_node(click)
                };
                vec![GraphMutation::add(node)]
            }
            InputEvent::Drop { x, y, files } => {
                let point = Position::new(*x, *y);
                files
                    .iter()
                    .filter(|f| f.is_image())
                    .enumerate()
                    .map(|(idx, file)| {
                        GraphMutation::add(CanvasNode::image(
                            self.layout.drop_origin(point, idx),
                            ImagePayload {
                                image: Some(file.to_image_source()),
                                ..Default::default()
                            },
                        ))
                    })
                    .collect()
            }
            InputEvent::Key { .. } => vec![],
        }
    }
}

//! Integration tests: canvas graph invariants.

use nb_core::id::{EdgeId, NodeId};
use nb_core::image::ImageSource;
use nb_core::model::*;
use pretty_assertions::assert_eq;

fn text_node(x: f32, y: f32) -> CanvasNode {
    CanvasNode::text(Position::new(x, y), TextPayload::default())
}

fn image_node(uri: Option<&str>) -> CanvasNode {
    CanvasNode::image(
        Position::default(),
        ImagePayload {
            prompt: "a cat".into(),
            image: uri.map(ImageSource::parse),
            ..Default::default()
        },
    )
}

fn node_ids(g: &CanvasGraph) -> Vec<NodeId> {
    g.nodes().iter().map(|n| n.id).collect()
}

// ─── Deletion ───────────────────────────────────────────────────────────

#[test]
fn delete_cascades_to_incident_edges() {
    let mut g = CanvasGraph::new();
    let a = image_node(Some("data:image/png;base64,AA=="));
    let b = text_node(0.0, 450.0);
    let (a_id, b_id) = (a.id, b.id);
    g.add_node(a);
    g.add_node(b);
    assert!(g.connect(Connection::new(a_id, Anchor::Bottom, b_id, Anchor::Top)).is_some());

    let removed = g.remove_node(a_id);
    assert!(removed.is_some());
    assert_eq!(node_ids(&g), vec![b_id]);
    assert!(g.edges().is_empty());
}

#[test]
fn delete_unknown_is_noop() {
    let mut g = CanvasGraph::new();
    g.add_node(text_node(0.0, 0.0));
    assert!(g.remove_node(NodeId::intern("never_added")).is_none());
    assert_eq!(g.node_count(), 1);
}

// ─── Updates ────────────────────────────────────────────────────────────

#[test]
fn empty_patch_changes_nothing() {
    let mut g = CanvasGraph::new();
    let img = image_node(Some("data:image/png;base64,AA=="));
    let id = img.id;
    g.add_node(img);
    g.add_node(text_node(5.0, 5.0));
    let before: Vec<CanvasNode> = g.nodes().into_iter().cloned().collect();

    for _ in 0..3 {
        assert!(!g.update_node(id, &NodePatch::Image(ImagePatch::default())));
        assert!(!g.update_node(id, &NodePatch::Text(TextPatch::default())));
    }

    let after: Vec<CanvasNode> = g.nodes().into_iter().cloned().collect();
    assert_eq!(after, before);
}

#[test]
fn patch_overwrites_only_named_fields() {
    let mut g = CanvasGraph::new();
    let img = image_node(None);
    let id = img.id;
    g.add_node(img);

    let patch = NodePatch::Image(ImagePatch {
        generating: Some(true),
        ..Default::default()
    });
    assert!(g.update_node(id, &patch));
    let payload = g.get(id).and_then(CanvasNode::as_image).unwrap();
    assert!(payload.generating);
    assert_eq!(payload.prompt, "a cat");
}

#[test]
fn update_unknown_id_is_noop() {
    let mut g = CanvasGraph::new();
    assert!(!g.update_node(NodeId::intern("ghost"), &NodePatch::text("hi")));
    assert_eq!(g.node_count(), 0);
}

// ─── Connections ────────────────────────────────────────────────────────

#[test]
fn connect_rejects_invalid_edges() {
    let mut g = CanvasGraph::new();
    let img = image_node(None);
    let other = image_node(None);
    let txt = text_node(0.0, 0.0);
    let (img_id, other_id, txt_id) = (img.id, other.id, txt.id);
    g.add_node(img);
    g.add_node(other);
    g.add_node(txt);

    // Self-loop.
    assert!(g.connect(Connection::new(img_id, Anchor::Bottom, img_id, Anchor::Top)).is_none());
    // Text nodes have no output anchor.
    assert!(g.connect(Connection::new(txt_id, Anchor::Bottom, img_id, Anchor::Top)).is_none());
    // Image nodes only accept on top.
    assert!(g.connect(Connection::new(img_id, Anchor::Bottom, other_id, Anchor::Left)).is_none());
    // Missing endpoint.
    assert!(
        g.connect(Connection::new(img_id, Anchor::Bottom, NodeId::intern("nope"), Anchor::Top))
            .is_none()
    );
    assert_eq!(g.edge_count(), 0);

    // Valid, then duplicate.
    assert!(g.connect(Connection::new(img_id, Anchor::Bottom, txt_id, Anchor::Left)).is_some());
    assert!(g.connect(Connection::new(img_id, Anchor::Bottom, txt_id, Anchor::Left)).is_none());
    // Same pair through a different anchor is a distinct edge.
    assert!(g.connect(Connection::new(img_id, Anchor::Bottom, txt_id, Anchor::Right)).is_some());
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn connect_returns_edge_id_for_disconnect() {
    let mut g = CanvasGraph::new();
    let img = image_node(None);
    let txt = text_node(0.0, 0.0);
    let (img_id, txt_id) = (img.id, txt.id);
    g.add_node(img);
    g.add_node(txt);

    let edge: EdgeId = g
        .connect(Connection::new(img_id, Anchor::Bottom, txt_id, Anchor::Top))
        .unwrap();
    assert!(edge.as_str().starts_with("edge_"));
    assert_eq!(g.edges()[0].id, edge);

    let removed = g.disconnect(edge).unwrap();
    assert_eq!(removed.source, img_id);
    assert_eq!(g.edge_count(), 0);
    assert!(g.disconnect(edge).is_none());
}

#[test]
fn cycles_are_allowed() {
    let mut g = CanvasGraph::new();
    let a = image_node(Some("data:image/png;base64,QQ=="));
    let b = image_node(Some("data:image/png;base64,Qg=="));
    let (a_id, b_id) = (a.id, b.id);
    g.add_node(a);
    g.add_node(b);
    assert!(g.connect(Connection::new(a_id, Anchor::Bottom, b_id, Anchor::Top)).is_some());
    assert!(g.connect(Connection::new(b_id, Anchor::Bottom, a_id, Anchor::Top)).is_some());

    assert_eq!(g.upstream_images(a_id).len(), 1);
    assert_eq!(g.upstream_images(b_id)[0].data, "QQ==");
}

// ─── Rewiring ───────────────────────────────────────────────────────────

#[test]
fn rewire_moves_incoming_edges_to_new_target() {
    let mut g = CanvasGraph::new();
    let src1 = image_node(Some("data:image/png;base64,QQ=="));
    let src2 = image_node(Some("data:image/png;base64,Qg=="));
    let old = text_node(0.0, 0.0);
    let new = image_node(None);
    let (s1, s2, old_id, new_id) = (src1.id, src2.id, old.id, new.id);
    for n in [src1, src2, old, new] {
        g.add_node(n);
    }
    g.connect(Connection::new(s1, Anchor::Bottom, old_id, Anchor::Left));
    g.connect(Connection::new(s2, Anchor::Bottom, old_id, Anchor::Top));

    assert_eq!(g.rewire_incoming(old_id, new_id, Anchor::Top), 2);
    assert!(g.incoming(old_id).is_empty());

    let rewired: Vec<Connection> = g.incoming(new_id).iter().map(|e| e.connection()).collect();
    assert_eq!(
        rewired,
        vec![
            Connection::new(s1, Anchor::Bottom, new_id, Anchor::Top),
            Connection::new(s2, Anchor::Bottom, new_id, Anchor::Top),
        ]
    );
}

#[test]
fn rewire_from_unknown_node_does_nothing() {
    let mut g = CanvasGraph::new();
    let n = image_node(None);
    let id = n.id;
    g.add_node(n);
    assert_eq!(g.rewire_incoming(NodeId::intern("missing"), id, Anchor::Top), 0);
    assert_eq!(g.edge_count(), 0);
}

// ─── Ordering ───────────────────────────────────────────────────────────

#[test]
fn sources_follow_connection_order_after_delete() {
    let mut g = CanvasGraph::new();
    let x = image_node(Some("data:image/png;base64,WA=="));
    let y = text_node(0.0, 0.0);
    let a = image_node(Some("data:image/png;base64,QQ=="));
    let b = image_node(Some("data:image/png;base64,Qg=="));
    let t = text_node(0.0, 0.0);
    let (x_id, y_id, a_id, b_id, t_id) = (x.id, y.id, a.id, b.id, t.id);
    for n in [x, y, a, b, t] {
        g.add_node(n);
    }
    g.connect(Connection::new(x_id, Anchor::Bottom, y_id, Anchor::Top));
    g.connect(Connection::new(a_id, Anchor::Bottom, t_id, Anchor::Top));
    // Frees the lowest edge slot, which the next edge reuses.
    g.remove_node(x_id);
    g.connect(Connection::new(b_id, Anchor::Bottom, t_id, Anchor::Left));

    let imgs = g.upstream_images(t_id);
    let data: Vec<&str> = imgs.iter().map(|i| i.data.as_str()).collect();
    assert_eq!(data, vec!["QQ==", "Qg=="]);
    let sources: Vec<NodeId> = g.edges().iter().map(|e| e.source).collect();
    assert_eq!(sources, vec![a_id, b_id]);
}

#[test]
fn rewire_keeps_connection_order_after_delete() {
    let mut g = CanvasGraph::new();
    let x = image_node(None);
    let a = image_node(None);
    let b = image_node(None);
    let old = text_node(0.0, 0.0);
    let new = image_node(None);
    let (x_id, a_id, b_id, old_id, new_id) = (x.id, a.id, b.id, old.id, new.id);
    for n in [x, a, b, old, new] {
        g.add_node(n);
    }
    g.connect(Connection::new(x_id, Anchor::Bottom, old_id, Anchor::Right));
    g.connect(Connection::new(a_id, Anchor::Bottom, old_id, Anchor::Top));
    g.remove_node(x_id);
    g.connect(Connection::new(b_id, Anchor::Bottom, old_id, Anchor::Left));

    assert_eq!(g.rewire_incoming(old_id, new_id, Anchor::Top), 2);
    let sources: Vec<NodeId> = g.incoming(new_id).iter().map(|e| e.source).collect();
    assert_eq!(sources, vec![a_id, b_id]);
}

#[test]
fn nodes_keep_insertion_order_after_delete() {
    let mut g = CanvasGraph::new();
    let first = text_node(0.0, 0.0);
    let second = text_node(1.0, 0.0);
    let (first_id, second_id) = (first.id, second.id);
    g.add_node(first);
    g.add_node(second);
    g.remove_node(first_id);
    let third = text_node(2.0, 0.0);
    let third_id = third.id;
    g.add_node(third);

    assert_eq!(node_ids(&g), vec![second_id, third_id]);
}

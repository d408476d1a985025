use log::debug;

use crate::coords::Vec2;
use crate::host::{CameraInfo, Hierarchy, InspectHost, LayerHost, ScreenHost, StickerHost, TextureKey};
use crate::layer::RenderOrder;

use super::id::{NodeId, VisualId};
use super::template::{NodeTemplate, Visual};

#[derive(Debug)]
struct NodeData {
    name: String,
    enabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    visual: Option<Visual>,
    camera: Option<CameraInfo>,
    render_layer: Option<u32>,
    /// Screen-transform anchor center; `None` for nodes without one.
    anchor: Option<Vec2>,
}

impl NodeData {
    fn new(name: String, parent: Option<NodeId>) -> Self {
        Self {
            name,
            enabled: true,
            parent,
            children: Vec::new(),
            visual: None,
            camera: None,
            render_layer: None,
            anchor: None,
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// Arena-backed scene tree.
///
/// Destroyed slots are recycled through a free list; generation counters make
/// handles to destroyed nodes inert. Every accessor tolerates stale handles by
/// returning an empty value, and every mutator ignores them.
///
/// Nodes are screen-space objects: a node's screen position is its anchor
/// center.
#[derive(Debug, Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Creates an empty node as the last child of `parent`, or as the last
    /// root when `parent` is `None` or stale.
    pub fn create_node(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let id = self.alloc(NodeData::new(name.into(), parent));

        match parent.and_then(|p| self.get_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    /// Instantiates `template` and its children under `parent`.
    pub fn spawn(&mut self, template: &NodeTemplate, parent: Option<NodeId>) -> NodeId {
        let id = self.create_node(template.name.clone(), parent);
        if let Some(node) = self.get_mut(id) {
            node.enabled = template.enabled;
            node.visual = template.visual.clone();
            node.camera = template.camera.clone();
            node.render_layer = template.render_layer;
            node.anchor = template.anchor;
        }
        for child in &template.children {
            self.spawn(child, Some(id));
        }
        id
    }

    /// Removes `id` and its whole subtree. Stale handles are ignored.
    pub fn destroy_node(&mut self, id: NodeId) {
        let Some(parent) = self.get(id).map(|n| n.parent) else {
            debug!("destroy of stale node {id:?} ignored");
            return;
        };

        match parent.and_then(|p| self.get_mut(p)) {
            Some(parent) => parent.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.free(next) {
                pending.extend(node.children);
            }
        }
    }

    /// First node named `name`, searching roots depth-first.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let mut pending: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = pending.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            if node.name == name {
                return Some(id);
            }
            pending.extend(node.children.iter().rev().copied());
        }
        None
    }

    // ── Components ────────────────────────────────────────────────────────

    /// Attaches (or replaces) the node's visual and returns its handle.
    pub fn set_visual(&mut self, id: NodeId, visual: Visual) -> VisualId {
        if let Some(node) = self.get_mut(id) {
            node.visual = Some(visual);
        }
        VisualId(id)
    }

    pub fn visual(&self, id: NodeId) -> Option<&Visual> {
        self.get(id)?.visual.as_ref()
    }

    pub fn visual_id(&self, id: NodeId) -> Option<VisualId> {
        self.visual(id).map(|_| VisualId(id))
    }

    pub fn set_camera(&mut self, id: NodeId, camera: CameraInfo) {
        if let Some(node) = self.get_mut(id) {
            node.camera = Some(camera);
        }
    }

    pub fn set_render_layer(&mut self, id: NodeId, layer: u32) {
        if let Some(node) = self.get_mut(id) {
            node.render_layer = Some(layer);
        }
    }

    pub fn set_anchor(&mut self, id: NodeId, center: Vec2) {
        if let Some(node) = self.get_mut(id) {
            node.anchor = Some(center);
        }
    }

    // ── Slots ─────────────────────────────────────────────────────────────

    fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(data);
            return NodeId { index, generation: slot.generation };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, node: Some(data) });
        NodeId { index, generation: 0 }
    }

    fn free(&mut self, id: NodeId) -> Option<NodeData> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)?;
        let data = slot.node.take()?;
        // Bump generation so old handles immediately fail lookup.
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        Some(data)
    }
}

impl Hierarchy for SceneGraph {
    type Node = NodeId;

    fn roots(&self) -> Vec<NodeId> {
        self.roots.clone()
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.get(node).map_or(0, |n| n.children.len())
    }

    fn child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.get(node)?.children.get(index).copied()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    fn name(&self, node: NodeId) -> &str {
        self.get(node).map_or("", |n| n.name.as_str())
    }

    fn is_enabled(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.enabled)
    }

    fn set_enabled(&mut self, node: NodeId, enabled: bool) {
        if let Some(n) = self.get_mut(node) {
            n.enabled = enabled;
        }
    }
}

impl LayerHost for SceneGraph {
    type Layer = VisualId;

    fn layers_on(&self, node: NodeId) -> Vec<VisualId> {
        self.visual_id(node).into_iter().collect()
    }

    fn render_order(&self, layer: VisualId) -> RenderOrder {
        self.visual(layer.0).map_or(RenderOrder::default(), |v| v.render_order)
    }

    fn set_render_order(&mut self, layer: VisualId, order: RenderOrder) {
        if let Some(visual) = self.get_mut(layer.0).and_then(|n| n.visual.as_mut()) {
            visual.render_order = order;
        }
    }

    fn owner(&self, layer: VisualId) -> NodeId {
        layer.0
    }
}

impl ScreenHost for SceneGraph {
    fn anchor_center(&self, node: NodeId) -> Option<Vec2> {
        self.get(node)?.anchor
    }

    fn set_anchor_center(&mut self, node: NodeId, center: Vec2) -> bool {
        match self.get_mut(node) {
            Some(n) if n.anchor.is_some() => {
                n.anchor = Some(center);
                true
            }
            _ => false,
        }
    }

    fn screen_position(&self, node: NodeId) -> Option<Vec2> {
        self.anchor_center(node)
    }
}

impl InspectHost for SceneGraph {
    fn render_layer(&self, node: NodeId) -> Option<u32> {
        self.get(node)?.render_layer
    }

    fn camera(&self, node: NodeId) -> Option<CameraInfo> {
        self.get(node)?.camera.clone()
    }
}

impl StickerHost for SceneGraph {
    type Prefab = NodeTemplate;

    fn instantiate(&mut self, prefab: &NodeTemplate, parent: NodeId) -> NodeId {
        self.spawn(prefab, Some(parent))
    }

    fn destroy(&mut self, node: NodeId) {
        self.destroy_node(node);
    }

    fn texture(&self, node: NodeId) -> Option<TextureKey> {
        self.visual(node)?.texture.clone()
    }

    fn set_texture(&mut self, node: NodeId, texture: TextureKey) {
        if let Some(visual) = self.get_mut(node).and_then(|n| n.visual.as_mut()) {
            visual.texture = Some(texture);
        }
    }

    fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        if let Some(visual) = self.get_mut(node).and_then(|n| n.visual.as_mut()) {
            visual.opacity = opacity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── topology ──────────────────────────────────────────────────────────

    #[test]
    fn children_keep_insertion_order() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node("root", None);
        let a = scene.create_node("a", Some(root));
        let b = scene.create_node("b", Some(root));
        assert_eq!(scene.child_count(root), 2);
        assert_eq!(scene.child(root, 0), Some(a));
        assert_eq!(scene.child(root, 1), Some(b));
        assert_eq!(scene.child(root, 2), None);
        assert_eq!(scene.parent(b), Some(root));
    }

    #[test]
    fn destroy_removes_subtree_and_detaches() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node("root", None);
        let a = scene.create_node("a", Some(root));
        let a1 = scene.create_node("a1", Some(a));
        let b = scene.create_node("b", Some(root));

        scene.destroy_node(a);

        assert!(!scene.is_alive(a));
        assert!(!scene.is_alive(a1));
        assert_eq!(scene.child_count(root), 1);
        assert_eq!(scene.child(root, 0), Some(b));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut scene = SceneGraph::new();
        let old = scene.create_node("old", None);
        scene.destroy_node(old);
        let new = scene.create_node("new", None);

        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert_eq!(scene.name(old), "");
        assert_eq!(scene.name(new), "new");
        assert_eq!(scene.roots(), vec![new]);
    }

    #[test]
    fn spawn_copies_template_tree() {
        let mut scene = SceneGraph::new();
        let parent = scene.create_node("parent", None);
        let template = NodeTemplate::new("sticker")
            .visual(Visual::new(RenderOrder::new(3)).with_texture("cat".into()))
            .anchor(Vec2::new(0.5, 0.5))
            .child(NodeTemplate::new("shadow").disabled());

        let node = scene.instantiate(&template, parent);

        assert_eq!(scene.parent(node), Some(parent));
        assert_eq!(scene.texture(node), Some(TextureKey::new("cat")));
        assert_eq!(scene.render_order(VisualId(node)), RenderOrder::new(3));
        let shadow = scene.child(node, 0).unwrap();
        assert!(!scene.is_enabled(shadow));
        assert_eq!(scene.find("shadow"), Some(shadow));
    }

    // ── screen ────────────────────────────────────────────────────────────

    #[test]
    fn anchor_only_moves_screen_nodes() {
        let mut scene = SceneGraph::new();
        let plain = scene.create_node("plain", None);
        let screen = scene.spawn(&NodeTemplate::new("screen").anchor(Vec2::zero()), None);

        assert!(!scene.set_anchor_center(plain, Vec2::new(1.0, 1.0)));
        assert!(scene.set_anchor_center(screen, Vec2::new(1.0, 1.0)));
        assert_eq!(scene.screen_position(screen), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(scene.screen_position(plain), None);
    }
}

//! Live hierarchy dump.
//!
//! Captures the host's object tree at one instant and renders it as an
//! indented listing with render order, render layer, and camera facts. Useful
//! when objects are created and destroyed at runtime.
//!
//! ```text
//! [Print Live Hierarchy][KEY] O: Render Order, L: Render Layer
//! |└[ROOT]
//! |    └(🎥 O:0 L:[1]) Camera (L:1)
//! |        └Stickers (L:1)
//! |            └Sticker (O:4) (L:1)
//! |            └❌ Sticker (O:5) (L:1)
//! ```

use core::fmt::Write;

use crate::host::{CameraInfo, InspectHost};
use crate::layer::RenderOrder;

/// Header line printed before every listing.
pub const KEY_LINE: &str = "[Print Live Hierarchy][KEY] O: Render Order, L: Render Layer";

/// Name of the synthetic node holding the scene roots.
pub const ROOT_NAME: &str = "[ROOT]";

/// One captured node.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    pub enabled: bool,
    pub render_layer: Option<u32>,
    pub camera: Option<CameraInfo>,
    /// Render order of the node's first visual, if any.
    pub render_order: Option<RenderOrder>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn root(children: Vec<HierarchyNode>) -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            enabled: true,
            render_layer: None,
            camera: None,
            render_order: None,
            children,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::count).sum::<usize>()
    }
}

/// Captures and renders hierarchy listings.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyPrinter {
    indent_width: usize,
}

impl Default for HierarchyPrinter {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl HierarchyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces per depth level.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Captures every root subtree under a synthetic [`ROOT_NAME`] node.
    ///
    /// Nodes for which `skip` returns true are left out with their subtrees.
    pub fn collect<H, F>(&self, host: &H, skip: F) -> HierarchyNode
    where
        H: InspectHost + ?Sized,
        F: Fn(&H, H::Node) -> bool,
    {
        let children = host
            .roots()
            .into_iter()
            .filter(|&root| !skip(host, root))
            .map(|root| capture(host, root, &skip))
            .collect();
        HierarchyNode::root(children)
    }

    /// Renders a captured tree, one line per node.
    pub fn render(&self, tree: &HierarchyNode) -> String {
        let mut out = String::new();
        self.write_node(&mut out, tree, 0);
        out
    }

    /// Captures and renders in one go, prefixed with [`KEY_LINE`].
    pub fn print<H, F>(&self, host: &H, skip: F) -> String
    where
        H: InspectHost + ?Sized,
        F: Fn(&H, H::Node) -> bool,
    {
        let tree = self.collect(host, skip);
        format!("{KEY_LINE}\n{}", self.render(&tree))
    }

    fn write_node(&self, out: &mut String, node: &HierarchyNode, depth: usize) {
        // Leading bar keeps consoles that trim whitespace from eating the indent.
        out.push('|');
        out.extend(core::iter::repeat_n(' ', depth * self.indent_width));
        out.push('└');

        if !node.enabled {
            out.push_str("❌ ");
        }
        if let Some(camera) = &node.camera {
            let layers = camera
                .render_layers
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            let _ = write!(out, "(🎥 O:{} L:[{layers}]) ", camera.render_order);
        }
        out.push_str(&node.name);
        if let Some(order) = node.render_order {
            let _ = write!(out, " (O:{order})");
        }
        if let Some(layer) = node.render_layer {
            let _ = write!(out, " (L:{layer})");
        }
        out.push('\n');

        for child in &node.children {
            self.write_node(out, child, depth + 1);
        }
    }
}

fn capture<H, F>(host: &H, node: H::Node, skip: &F) -> HierarchyNode
where
    H: InspectHost + ?Sized,
    F: Fn(&H, H::Node) -> bool,
{
    let children = (0..host.child_count(node))
        .filter_map(|i| host.child(node, i))
        .filter(|&child| !skip(host, child))
        .map(|child| capture(host, child, skip))
        .collect();

    HierarchyNode {
        name: host.name(node).to_string(),
        enabled: host.is_enabled(node),
        render_layer: host.render_layer(node),
        camera: host.camera(node),
        render_order: host
            .layers_on(node)
            .first()
            .map(|&layer| host.render_order(layer)),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeTemplate, SceneGraph, Visual};
    use crate::traverse::{keep_all, skip_underscore_prefixed};

    fn scene() -> SceneGraph {
        let mut scene = SceneGraph::new();
        let camera = NodeTemplate::new("Camera")
            .camera(CameraInfo::new(1, vec![1, 3]))
            .render_layer(1)
            .child(
                NodeTemplate::new("Stickers")
                    .render_layer(1)
                    .child(NodeTemplate::new("Cat").visual(Visual::new(RenderOrder::new(4))))
                    .child(NodeTemplate::new("Dog").visual(Visual::new(RenderOrder::new(5))).disabled()),
            );
        scene.spawn(&camera, None);
        scene.spawn(&NodeTemplate::new("_Debug").child(NodeTemplate::new("Probe")), None);
        scene
    }

    #[test]
    fn renders_key_root_and_annotations() {
        let text = HierarchyPrinter::new().print(&scene(), skip_underscore_prefixed);
        let expected = "\
[Print Live Hierarchy][KEY] O: Render Order, L: Render Layer
|└[ROOT]
|    └(🎥 O:1 L:[1,3]) Camera (L:1)
|        └Stickers (L:1)
|            └Cat (O:4)
|            └❌ Dog (O:5)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn keep_all_includes_underscore_nodes() {
        let tree = HierarchyPrinter::new().collect(&scene(), keep_all);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].name, "_Debug");
        assert_eq!(tree.count(), 7);
    }

    #[test]
    fn zero_render_order_is_still_shown() {
        let mut scene = SceneGraph::new();
        scene.spawn(&NodeTemplate::new("Bg").visual(Visual::new(RenderOrder::new(0))), None);
        let text = HierarchyPrinter::new().indent_width(2).render(
            &HierarchyPrinter::new().collect(&scene, keep_all),
        );
        assert_eq!(text, "|└[ROOT]\n|  └Bg (O:0)\n");
    }
}

//! Tree traversal over a [`Hierarchy`].
//!
//! All walks are depth-first pre-order with children visited in index order.
//! Filtering is always an explicit predicate; a skipped node prunes its whole
//! subtree.

use crate::host::{Hierarchy, LayerHost};

/// Returns `root` followed by every descendant not pruned by `skip`.
///
/// `skip` is never consulted for `root` itself.
pub fn depth_first<H, F>(host: &H, root: H::Node, skip: F) -> Vec<H::Node>
where
    H: Hierarchy + ?Sized,
    F: Fn(&H, H::Node) -> bool,
{
    let mut out = Vec::new();
    visit(host, root, &skip, &mut out);
    out
}

fn visit<H, F>(host: &H, node: H::Node, skip: &F, out: &mut Vec<H::Node>)
where
    H: Hierarchy + ?Sized,
    F: Fn(&H, H::Node) -> bool,
{
    out.push(node);
    for index in 0..host.child_count(node) {
        let Some(child) = host.child(node, index) else {
            continue;
        };
        if skip(host, child) {
            continue;
        }
        visit(host, child, skip, out);
    }
}

/// Layers on `parent` and all of its descendants.
///
/// The parent's own layers come first, then each child's subtree in turn.
pub fn collect_layers<H>(host: &H, parent: H::Node) -> Vec<H::Layer>
where
    H: LayerHost + ?Sized,
{
    depth_first(host, parent, keep_all)
        .into_iter()
        .flat_map(|node| host.layers_on(node))
        .collect()
}

/// Predicate that prunes nothing.
pub fn keep_all<H: Hierarchy + ?Sized>(_host: &H, _node: H::Node) -> bool {
    false
}

/// Predicate that prunes nodes whose name starts with `_`.
pub fn skip_underscore_prefixed<H: Hierarchy + ?Sized>(host: &H, node: H::Node) -> bool {
    host.name(node).starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeId, SceneGraph};

    fn names(scene: &SceneGraph, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&n| scene.name(n).to_string()).collect()
    }

    fn tree() -> (SceneGraph, NodeId) {
        let mut scene = SceneGraph::new();
        let root = scene.create_node("root", None);
        let a = scene.create_node("a", Some(root));
        scene.create_node("a1", Some(a));
        scene.create_node("a2", Some(a));
        let hidden = scene.create_node("_helpers", Some(root));
        scene.create_node("inside_helpers", Some(hidden));
        scene.create_node("b", Some(root));
        (scene, root)
    }

    #[test]
    fn pre_order_children_in_index_order() {
        let (scene, root) = tree();
        let order = depth_first(&scene, root, keep_all);
        assert_eq!(
            names(&scene, &order),
            ["root", "a", "a1", "a2", "_helpers", "inside_helpers", "b"]
        );
    }

    #[test]
    fn skipped_node_prunes_subtree() {
        let (scene, root) = tree();
        let order = depth_first(&scene, root, skip_underscore_prefixed);
        assert_eq!(names(&scene, &order), ["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn root_is_never_skipped() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node("_root", None);
        scene.create_node("_child", Some(root));
        let order = depth_first(&scene, root, skip_underscore_prefixed);
        assert_eq!(names(&scene, &order), ["_root"]);
    }

    #[test]
    fn custom_predicate() {
        let (scene, root) = tree();
        let order = depth_first(&scene, root, |h: &SceneGraph, n| h.name(n) == "a");
        assert_eq!(names(&scene, &order), ["root", "_helpers", "inside_helpers", "b"]);
    }
}

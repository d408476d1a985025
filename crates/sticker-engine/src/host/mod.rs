//! Seams to the host scene-graph runtime.
//!
//! The host owns every node, component, and asset. This crate only reaches it
//! through the traits below, so any runtime that can answer these questions
//! can drive the render-order stack and the sticker controllers.
//!
//! - [`Hierarchy`]: tree shape, names, enabled flags
//! - [`LayerHost`]: drawable layers and their render order
//! - [`ScreenHost`]: screen-space anchors and projected positions
//! - [`InspectHost`]: extra facts shown by the hierarchy printer
//! - [`StickerHost`]: prefab instantiation, destruction, and image state

mod texture;

use core::fmt;
use core::hash::Hash;

use crate::coords::Vec2;
use crate::layer::RenderOrder;

pub use texture::TextureKey;

/// Read/write access to the host's object tree.
pub trait Hierarchy {
    /// Handle to a scene object. Must stay cheap to copy and compare.
    type Node: Copy + Eq + Hash + fmt::Debug + 'static;

    /// Top-level objects in scene order.
    fn roots(&self) -> Vec<Self::Node>;

    fn child_count(&self, node: Self::Node) -> usize;

    /// Returns the `index`-th child of `node`, or `None` past the end.
    fn child(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Display name. Stale or unknown handles yield an empty string.
    fn name(&self, node: Self::Node) -> &str;

    fn is_enabled(&self, node: Self::Node) -> bool;

    fn set_enabled(&mut self, node: Self::Node, enabled: bool);
}

/// Drawable layers attached to scene objects.
pub trait LayerHost: Hierarchy {
    /// Handle to a drawable component.
    type Layer: Copy + Eq + fmt::Debug + 'static;

    /// Layers attached directly to `node` (not its descendants), in component order.
    fn layers_on(&self, node: Self::Node) -> Vec<Self::Layer>;

    fn render_order(&self, layer: Self::Layer) -> RenderOrder;

    fn set_render_order(&mut self, layer: Self::Layer, order: RenderOrder);

    /// Scene object the layer is attached to.
    fn owner(&self, layer: Self::Layer) -> Self::Node;
}

/// Screen-space placement.
///
/// Projection from world to screen (cameras, transforms) is performed by the
/// host; this crate only consumes its results.
pub trait ScreenHost: Hierarchy {
    /// Center of the node's screen-transform anchors, if it has one.
    fn anchor_center(&self, node: Self::Node) -> Option<Vec2>;

    /// Moves the node's anchors so they are centered on `center`.
    /// Returns `false` if the node has no screen transform.
    fn set_anchor_center(&mut self, node: Self::Node, center: Vec2) -> bool;

    /// Node position projected into screen space by its rendering camera.
    fn screen_position(&self, node: Self::Node) -> Option<Vec2>;
}

/// Camera facts reported by [`InspectHost::camera`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraInfo {
    pub render_order: i32,
    /// Render layer numbers the camera draws.
    pub render_layers: Vec<u32>,
}

impl CameraInfo {
    pub fn new(render_order: i32, render_layers: impl Into<Vec<u32>>) -> Self {
        Self { render_order, render_layers: render_layers.into() }
    }
}

/// Diagnostics-only facts about a node.
pub trait InspectHost: LayerHost {
    /// Render layer the node belongs to, if the host reports one.
    fn render_layer(&self, node: Self::Node) -> Option<u32>;

    fn camera(&self, node: Self::Node) -> Option<CameraInfo>;
}

/// Everything the sticker controllers need from the host.
pub trait StickerHost: LayerHost + ScreenHost {
    /// Host-side template that can be instantiated under a parent.
    type Prefab;

    /// Instantiates `prefab` as the last child of `parent`.
    fn instantiate(&mut self, prefab: &Self::Prefab, parent: Self::Node) -> Self::Node;

    /// Destroys `node` and its subtree. Stale handles are ignored.
    fn destroy(&mut self, node: Self::Node);

    /// Base texture of the node's image, if it has one.
    fn texture(&self, node: Self::Node) -> Option<TextureKey>;

    fn set_texture(&mut self, node: Self::Node, texture: TextureKey);

    /// Sets the alpha of the node's image base color.
    fn set_opacity(&mut self, node: Self::Node, opacity: f32);
}

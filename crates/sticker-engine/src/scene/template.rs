use crate::coords::Vec2;
use crate::host::{CameraInfo, TextureKey};
use crate::layer::RenderOrder;

/// Image state of a drawable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    pub render_order: RenderOrder,
    pub texture: Option<TextureKey>,
    /// Alpha of the image's base color.
    pub opacity: f32,
}

impl Visual {
    pub fn new(render_order: RenderOrder) -> Self {
        Self { render_order, texture: None, opacity: 1.0 }
    }

    pub fn with_texture(mut self, texture: TextureKey) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Blueprint for a node subtree; the reference host's prefab type.
///
/// ```rust,ignore
/// let sticker = NodeTemplate::new("Sticker")
///     .visual(Visual::new(RenderOrder::new(10)))
///     .anchor(Vec2::zero());
/// let node = scene.spawn(&sticker, Some(stickers_parent));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub name: String,
    pub enabled: bool,
    pub visual: Option<Visual>,
    pub camera: Option<CameraInfo>,
    pub render_layer: Option<u32>,
    pub anchor: Option<Vec2>,
    pub children: Vec<NodeTemplate>,
}

impl NodeTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            visual: None,
            camera: None,
            render_layer: None,
            anchor: None,
            children: Vec::new(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn camera(mut self, camera: CameraInfo) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn render_layer(mut self, layer: u32) -> Self {
        self.render_layer = Some(layer);
        self
    }

    /// Gives the node a screen transform centered on `center`.
    pub fn anchor(mut self, center: Vec2) -> Self {
        self.anchor = Some(center);
        self
    }

    pub fn child(mut self, child: NodeTemplate) -> Self {
        self.children.push(child);
        self
    }
}

use crate::coords::InstantiationArea;
use crate::host::TextureKey;

/// Settings for a [`MemeSticker`](crate::controllers::MemeSticker) session.
///
/// Follows a builder pattern:
///
/// ```rust,ignore
/// let config = MemeStickerConfig::new()
///     .texture("cat")
///     .texture("dog")
///     .show_instantiator(false)
///     .instantiation_area(InstantiationArea::new(-0.5, 0.5, -0.5, 0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemeStickerConfig {
    /// One instantiator button is created per texture.
    pub textures: Vec<TextureKey>,
    /// Instantiate a sticker from the first button at startup.
    pub auto_instantiate_first: bool,
    /// Keep the button panel visible.
    pub show_instantiator: bool,
    /// Allow drag-to-delete.
    pub deletable: bool,
    pub instantiation_area: InstantiationArea,
    /// Screen-space radius around the delete UI that arms deletion.
    pub distance_to_activate: f32,
}

impl Default for MemeStickerConfig {
    fn default() -> Self {
        Self {
            textures: Vec::new(),
            auto_instantiate_first: true,
            show_instantiator: true,
            deletable: true,
            instantiation_area: InstantiationArea::default(),
            distance_to_activate: 0.1,
        }
    }
}

impl MemeStickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture(mut self, texture: impl Into<TextureKey>) -> Self {
        self.textures.push(texture.into());
        self
    }

    pub fn textures<I, T>(mut self, textures: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TextureKey>,
    {
        self.textures.extend(textures.into_iter().map(Into::into));
        self
    }

    pub fn auto_instantiate_first(mut self, v: bool) -> Self {
        self.auto_instantiate_first = v;
        self
    }

    pub fn show_instantiator(mut self, v: bool) -> Self {
        self.show_instantiator = v;
        self
    }

    pub fn deletable(mut self, v: bool) -> Self {
        self.deletable = v;
        self
    }

    pub fn instantiation_area(mut self, area: InstantiationArea) -> Self {
        self.instantiation_area = area;
        self
    }

    pub fn distance_to_activate(mut self, d: f32) -> Self {
        self.distance_to_activate = d;
        self
    }
}

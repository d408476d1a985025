use std::fmt;
use std::rc::Rc;

/// Opaque reference to a host texture asset.
///
/// Textures are loaded and owned by the host; controllers only move these keys
/// between images.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureKey(Rc<str>);

impl TextureKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Rc::from(key.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextureKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

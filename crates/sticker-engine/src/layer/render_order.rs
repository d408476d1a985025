use core::cmp::Ordering;
use core::fmt;

/// Draw-order key for a layer.
///
/// Higher values draw later and therefore appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct RenderOrder(pub i32);

impl RenderOrder {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns `self + delta`, saturating at the `i32` bounds.
    #[inline]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

impl Ord for RenderOrder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for RenderOrder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i32> for RenderOrder {
    #[inline]
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl fmt::Display for RenderOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

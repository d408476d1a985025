use core::fmt;

/// A handle to a node in a [`SceneGraph`](super::SceneGraph).
///
/// Contains a slot index and a generation counter so stale handles are
/// detected after the node is destroyed and the slot reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Raw slot index (diagnostics only).
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@gen{})", self.index, self.generation)
    }
}

/// The visual component of a node. Each node carries at most one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub(crate) NodeId);

impl VisualId {
    /// Node the visual is attached to.
    #[inline]
    pub const fn node(self) -> NodeId {
        self.0
    }
}

impl fmt::Debug for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisualId({}@gen{})", self.0.index, self.0.generation)
    }
}

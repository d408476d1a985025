use core::fmt;
use core::hash::Hash;

use log::{debug, warn};

use crate::capability::Capabilities;
use crate::delete::{Deletable, DeletableEvent, Deleter};
use crate::error::SetupError;
use crate::hints::{HintManager, HINT_ROTATE, HINT_TAP};
use crate::host::StickerHost;
use crate::layer::RenderOrderStack;

use super::SharedStack;

/// Image alpha while idle.
pub const OPACITY_DEFAULT: f32 = 1.0;
/// Image alpha while hovering the delete UI.
pub const OPACITY_PENDING_DELETE: f32 = 0.4;

/// What a touch did to a sticker.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StickerOutcome {
    Handled,
    /// The sticker was destroyed; drop its controller.
    Deleted,
}

/// A placed sticker.
///
/// Touching it brings it to the front of its container's stack and swaps the
/// "rotate" hint for the "tap" hint. When deletable, dragging it onto the
/// delete UI fades it and releasing there destroys it.
pub struct StickerController<N, L> {
    node: N,
    visual: L,
    stack: Option<SharedStack<N, L>>,
    deletable: Option<Deletable>,
}

impl<N, L> StickerController<N, L>
where
    N: Copy + Eq + Hash + fmt::Debug + 'static,
    L: Copy + Eq + fmt::Debug + 'static,
{
    /// Binds `node`, resolving the stack its parent publishes.
    ///
    /// A missing stack is tolerated: the sticker still works, it just cannot
    /// reorder itself.
    pub fn new<H>(host: &H, caps: &Capabilities<N>, node: N, deletable: bool) -> Result<Self, SetupError>
    where
        H: StickerHost<Node = N, Layer = L> + ?Sized,
    {
        let Some(&visual) = host.layers_on(node).first() else {
            return Err(SetupError::MissingVisual { node: host.name(node).to_string() });
        };

        let stack = host
            .parent(node)
            .and_then(|parent| caps.lookup::<RenderOrderStack<N, L>>(parent));
        if stack.is_none() {
            warn!(
                "no parent of `{}` publishes a render-order stack; its render order is not managed",
                host.name(node)
            );
        }

        Ok(Self {
            node,
            visual,
            stack,
            deletable: deletable.then(Deletable::new),
        })
    }

    #[inline]
    pub fn node(&self) -> N {
        self.node
    }

    #[inline]
    pub fn visual(&self) -> L {
        self.visual
    }

    #[inline]
    pub fn is_deletable(&self) -> bool {
        self.deletable.is_some()
    }

    pub fn on_touch_start<H>(&mut self, host: &mut H, hints: &mut HintManager<H>, deleter: Option<&Deleter<N>>)
    where
        H: StickerHost<Node = N, Layer = L>,
    {
        hints.hide(host, HINT_ROTATE);
        hints.show(host, HINT_TAP);

        if let Some(stack) = &self.stack {
            stack.borrow_mut().send_to_front(host, self.visual);
        }

        if let (Some(deletable), Some(deleter)) = (self.deletable.as_mut(), deleter) {
            deletable.on_touch_start(host, deleter);
        }
    }

    pub fn on_touch_move<H>(&mut self, host: &mut H, deleter: Option<&Deleter<N>>)
    where
        H: StickerHost<Node = N, Layer = L>,
    {
        let (Some(deletable), Some(deleter)) = (self.deletable.as_mut(), deleter) else {
            return;
        };

        if let DeletableEvent::Interaction { pending } = deletable.on_touch_move(&*host, deleter, self.node) {
            let opacity = if pending { OPACITY_PENDING_DELETE } else { OPACITY_DEFAULT };
            host.set_opacity(self.node, opacity);
        }
    }

    /// Destroys the sticker if released over the delete UI.
    ///
    /// The stack is rescanned and realigned with the render orders already on
    /// screen, so the remaining stickers keep their stacking.
    pub fn on_touch_end<H>(&mut self, host: &mut H, deleter: Option<&Deleter<N>>) -> StickerOutcome
    where
        H: StickerHost<Node = N, Layer = L>,
    {
        let (Some(deletable), Some(deleter)) = (self.deletable.as_mut(), deleter) else {
            return StickerOutcome::Handled;
        };

        if deletable.on_touch_end(host, deleter) != Some(DeletableEvent::ShouldDelete) {
            return StickerOutcome::Handled;
        }

        debug!("deleting sticker {:?}", self.node);
        host.destroy(self.node);
        if let Some(stack) = &self.stack {
            let mut stack = stack.borrow_mut();
            stack.rescan(&*host);
            stack.sort_by_render_order(&*host);
        }
        StickerOutcome::Deleted
    }
}

impl<N: fmt::Debug, L: fmt::Debug> fmt::Debug for StickerController<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickerController")
            .field("node", &self.node)
            .field("visual", &self.visual)
            .field("has_stack", &self.stack.is_some())
            .field("deletable", &self.deletable)
            .finish()
    }
}

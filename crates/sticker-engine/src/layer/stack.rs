use core::fmt;

use log::debug;

use crate::error::StackError;
use crate::host::LayerHost;
use crate::traverse::collect_layers;

use super::RenderOrder;

/// Direction for [`RenderOrderStack::move_one_step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StepDirection {
    /// Toward the top of the stack (drawn later).
    Forward,
    /// Toward the bottom of the stack (drawn earlier).
    Backward,
}

/// One row of [`RenderOrderStack::snapshot`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StackEntry<L> {
    pub layer: L,
    pub render_order: RenderOrder,
}

/// Ordered view of the drawable layers under a parent.
///
/// Index 0 is the bottom-most layer (drawn first); the last index is the
/// top-most. The sequence is a snapshot taken by [`new`](Self::new) or
/// [`rescan`](Self::rescan) and does not follow later changes to the host's
/// tree on its own.
///
/// Every reorder moves layers between the render-order *slots* already held
/// by the affected range, so the multiset of render orders is preserved and
/// sequence order stays consistent with render order:
///
/// - [`send_to_front`](Self::send_to_front) on `[A:10, B:20, C:30]` with `A`
///   yields `[B:10, C:20, A:30]`
/// - [`send_to_back`](Self::send_to_back) on `[A:5, B:6, C:7]` with `C`
///   yields `[C:5, A:6, B:7]`
///
/// Unknown handles and empty stacks are logged at debug level and ignored.
/// The host is passed to each call, so one stack can be driven by whichever
/// controller currently holds the host borrow.
#[derive(Debug, Clone)]
pub struct RenderOrderStack<N, L> {
    parent: N,
    layers: Vec<L>,
}

impl<N, L> RenderOrderStack<N, L>
where
    N: Copy + fmt::Debug,
    L: Copy + Eq + fmt::Debug,
{
    /// Scans `parent` and its descendants for layers.
    ///
    /// Layers are taken in depth-first order: the parent's own layers, then
    /// each child's subtree in child-index order.
    pub fn new<H>(host: &H, parent: N) -> Self
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        let layers = collect_layers(host, parent);
        debug!("render-order stack on {parent:?}: {} layer(s)", layers.len());
        Self { parent, layers }
    }

    #[inline]
    pub fn parent(&self) -> N {
        self.parent
    }

    /// Layers bottom-most first.
    #[inline]
    pub fn layers(&self) -> &[L] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Re-runs the scan, replacing the sequence.
    ///
    /// Earlier front/back decisions are not carried over: the sequence is back
    /// in scan order. Follow with
    /// [`sort_by_render_order`](Self::sort_by_render_order) to realign it with
    /// the host, or [`normalize`](Self::normalize) if contiguous order matters.
    pub fn rescan<H>(&mut self, host: &H)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.layers = collect_layers(host, self.parent);
        debug!("rescanned {:?}: {} layer(s)", self.parent, self.layers.len());
    }

    /// Reorders the sequence by current render order without touching any
    /// values, so nothing moves on screen.
    ///
    /// Ties keep their scan order. Call after [`rescan`](Self::rescan) to
    /// recover the sequence earlier reorders established.
    pub fn sort_by_render_order<H>(&mut self, host: &H)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.layers.sort_by_key(|&layer| host.render_order(layer));
    }

    /// Index of `layer` in the sequence.
    pub fn position(&self, layer: L) -> Result<usize, StackError> {
        if self.layers.is_empty() {
            return Err(StackError::EmptyStack);
        }
        self.layers
            .iter()
            .position(|&l| l == layer)
            .ok_or(StackError::NotFound)
    }

    /// Swaps `layer` with its neighbor in `direction`, exchanging both
    /// positions and render orders. No-op at the matching end.
    pub fn move_one_step<H>(&mut self, host: &mut H, layer: L, direction: StepDirection)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        let Some(index) = self.locate(layer, "move_one_step") else {
            return;
        };

        let other = match direction {
            StepDirection::Forward if index + 1 < self.layers.len() => index + 1,
            StepDirection::Backward if index > 0 => index - 1,
            _ => {
                debug!("{layer:?} is already at the {direction:?} end");
                return;
            }
        };

        let neighbor = self.layers[other];
        let mine = host.render_order(layer);
        let theirs = host.render_order(neighbor);
        host.set_render_order(layer, theirs);
        host.set_render_order(neighbor, mine);

        self.layers.swap(index, other);
    }

    #[inline]
    pub fn send_forward<H>(&mut self, host: &mut H, layer: L)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.move_one_step(host, layer, StepDirection::Forward);
    }

    #[inline]
    pub fn send_backward<H>(&mut self, host: &mut H, layer: L)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.move_one_step(host, layer, StepDirection::Backward);
    }

    /// Moves `layer` to the top.
    ///
    /// `layer` takes the top-most render order; every layer above its old
    /// position drops into the slot of the layer below it.
    pub fn send_to_front<H>(&mut self, host: &mut H, layer: L)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        let Some(index) = self.locate(layer, "send_to_front") else {
            return;
        };

        let range = index..self.layers.len();
        let slots = self.slots(host, range.clone());
        self.layers[range.clone()].rotate_left(1);
        self.assign(host, range, &slots);
    }

    /// Moves `layer` to the bottom.
    ///
    /// `layer` takes the bottom-most render order; every layer below its old
    /// position rises into the slot of the layer above it.
    pub fn send_to_back<H>(&mut self, host: &mut H, layer: L)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        let Some(index) = self.locate(layer, "send_to_back") else {
            return;
        };

        let range = 0..index + 1;
        let slots = self.slots(host, range.clone());
        self.layers[range.clone()].rotate_right(1);
        self.assign(host, range, &slots);
    }

    /// Renumbers every layer into a contiguous run matching sequence order.
    ///
    /// The top-most layer keeps its render order and the others are packed
    /// directly below it, so repeated calls are stable. When that run would
    /// start below `i32::MIN` it is clamped to start there, and the top-most
    /// layer ends up at `i32::MIN + len - 1`.
    pub fn normalize<H>(&mut self, host: &mut H)
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        let Some(&top) = self.layers.last() else {
            debug!("normalize on {:?}: {}", self.parent, StackError::EmptyStack);
            return;
        };

        let span = i32::try_from(self.layers.len() - 1).unwrap_or(i32::MAX);
        let base = host.render_order(top).offset(-span);

        for (offset, &layer) in (0i32..).zip(&self.layers) {
            host.set_render_order(layer, base.offset(offset));
        }
    }

    /// Current `(layer, render order)` pairs, bottom-most first.
    pub fn snapshot<H>(&self, host: &H) -> Vec<StackEntry<L>>
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.layers
            .iter()
            .map(|&layer| StackEntry {
                layer,
                render_order: host.render_order(layer),
            })
            .collect()
    }

    fn locate(&self, layer: L, op: &str) -> Option<usize> {
        match self.position(layer) {
            Ok(index) => Some(index),
            Err(err) => {
                debug!("{op}({layer:?}) on {:?}: {err}", self.parent);
                None
            }
        }
    }

    fn slots<H>(&self, host: &H, range: core::ops::Range<usize>) -> Vec<RenderOrder>
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        self.layers[range].iter().map(|&l| host.render_order(l)).collect()
    }

    fn assign<H>(&self, host: &mut H, range: core::ops::Range<usize>, slots: &[RenderOrder])
    where
        H: LayerHost<Node = N, Layer = L> + ?Sized,
    {
        for (&layer, &slot) in self.layers[range].iter().zip(slots) {
            host.set_render_order(layer, slot);
        }
    }
}

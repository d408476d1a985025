//! Touch-driven controllers for the sticker template.
//!
//! - [`InstantiatorController`]: a button that spawns a sticker from its texture
//! - [`StickerController`]: a placed sticker (bring-to-front, drag-to-delete)
//! - [`MemeSticker`]: the session that builds the buttons and routes touches

mod instantiator;
mod meme;
mod sticker;

use std::cell::RefCell;
use std::rc::Rc;

use crate::capability::Capabilities;
use crate::host::LayerHost;
use crate::layer::RenderOrderStack;

pub use instantiator::InstantiatorController;
pub use meme::{MemeSticker, MemeStickerBindings, TouchResponse};
pub use sticker::{StickerController, StickerOutcome, OPACITY_DEFAULT, OPACITY_PENDING_DELETE};

/// The authoritative render-order stack of a container, shared with the
/// controllers of its children.
pub type SharedStack<N, L> = Rc<RefCell<RenderOrderStack<N, L>>>;

/// Builds a stack over `parent` and publishes it there.
pub fn install_render_order_stack<H>(
    caps: &mut Capabilities<H::Node>,
    host: &H,
    parent: H::Node,
) -> SharedStack<H::Node, H::Layer>
where
    H: LayerHost + ?Sized,
{
    let stack = Rc::new(RefCell::new(RenderOrderStack::new(host, parent)));
    caps.provide(parent, stack.clone());
    stack
}

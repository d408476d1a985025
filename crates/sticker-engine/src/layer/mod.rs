//! Render-order management for sibling layers.
//!
//! Responsibilities:
//! - the `RenderOrder` value type (higher draws later, on top)
//! - `RenderOrderStack`: an ordered snapshot of a container's layers that
//!   keeps sequence order and host render order in sync across reorders

mod render_order;
mod stack;

pub use render_order::RenderOrder;
pub use stack::{RenderOrderStack, StackEntry, StepDirection};

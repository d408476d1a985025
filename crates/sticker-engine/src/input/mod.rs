//! Touch input routed to sticker controllers.
//!
//! Touch delivery and hit-testing belong to the host. The host resolves which
//! node a touch landed on and forwards a `TouchEvent` for that node.

mod types;

pub use types::{TouchEvent, TouchPhase};

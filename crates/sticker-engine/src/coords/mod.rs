//! Coordinate types shared by the host seams and controllers.
//!
//! Screen-space values use the host's normalized anchor space:
//! - origin at the screen center
//! - +X right, +Y up
//! - the visible screen spans `[-1, 1]` on both axes

mod area;
mod vec2;

pub use area::InstantiationArea;
pub use vec2::Vec2;

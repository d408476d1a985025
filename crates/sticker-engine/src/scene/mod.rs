//! In-memory reference host.
//!
//! [`SceneGraph`] implements every trait in [`crate::host`] over a small
//! arena of named nodes. It backs the test suite and the studio demo; real
//! deployments plug their own runtime into the host traits instead.

mod graph;
mod id;
mod template;

pub use graph::SceneGraph;
pub use id::{NodeId, VisualId};
pub use template::{NodeTemplate, Visual};

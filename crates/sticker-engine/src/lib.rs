//! Sticker engine crate.
//!
//! Render-order management and touch-driven controllers for a meme sticker
//! AR template. The scene runtime itself lives in the host and is reached
//! only through the traits in [`host`].

pub mod logging;
pub mod coords;
pub mod input;
pub mod host;
pub mod layer;
pub mod scene;
pub mod traverse;
pub mod hierarchy;
pub mod hints;
pub mod delete;
pub mod capability;
pub mod config;
pub mod controllers;

mod error;

pub use error::{SetupError, StackError};

use std::fmt;

/// Why a render-order stack could not act on a layer.
///
/// Mutating stack operations never return this; they log it and do nothing.
/// It is surfaced through [`crate::layer::RenderOrderStack::position`] for
/// callers that want to check first.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StackError {
    /// The layer handle is not part of the stack's sequence.
    NotFound,
    /// The last scan found no layers under the parent.
    EmptyStack,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::NotFound => f.write_str("layer is not tracked by this render-order stack"),
            StackError::EmptyStack => f.write_str("render-order stack has no layers"),
        }
    }
}

impl std::error::Error for StackError {}

/// A controller could not be wired to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// A sticker or button node carries no drawable layer.
    MissingVisual { node: String },
    /// No render-order stack was published on the given parent.
    MissingStack { parent: String },
    /// The deleter needs a strictly positive activation distance.
    InvalidActivationDistance(f32),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingVisual { node } => {
                write!(f, "`{node}` has no visual; make sure the prefab is set up correctly")
            }
            SetupError::MissingStack { parent } => {
                write!(f, "`{parent}` does not publish a render-order stack")
            }
            SetupError::InvalidActivationDistance(d) => {
                write!(f, "delete activation distance must be positive (got {d})")
            }
        }
    }
}

impl std::error::Error for SetupError {}

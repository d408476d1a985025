use std::fmt;

/// Lifecycle phase of a single-finger touch gesture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// A touch phase already resolved to the node it targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TouchEvent<N> {
    pub target: N,
    pub phase: TouchPhase,
}

impl<N> TouchEvent<N> {
    #[inline]
    pub const fn new(target: N, phase: TouchPhase) -> Self {
        Self { target, phase }
    }

    #[inline]
    pub const fn start(target: N) -> Self {
        Self::new(target, TouchPhase::Start)
    }

    #[inline]
    pub const fn moved(target: N) -> Self {
        Self::new(target, TouchPhase::Move)
    }

    #[inline]
    pub const fn end(target: N) -> Self {
        Self::new(target, TouchPhase::End)
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TouchPhase::Start => "start",
            TouchPhase::Move => "move",
            TouchPhase::End => "end",
        };
        f.write_str(s)
    }
}

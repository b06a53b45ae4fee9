//! Explicit control-flow verdicts for sequence traversal.

/// Verdict returned by an `each` consumer after receiving an element.
///
/// Returning [`Flow::Stop`] terminates the walk immediately: the current
/// element completes, and no further elements are pulled from any stage of
/// the chain for that traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Keep walking.
    Continue,
    /// Terminate the walk; no more elements will be pulled.
    Stop,
}

impl Flow {
    /// Returns `true` if this verdict terminates the walk.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }

    /// Returns `true` if the walk should keep going.
    #[must_use]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}

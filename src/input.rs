//! Input model: pointer events, bubble content, and the interaction state.
//!
//! `PointerMove` is the only event the engine consumes; the DOM layer builds
//! one from each `mousemove` it receives. `InteractionState` is the public,
//! resource-free view of the widget's state machine.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// A pointer-move event in absolute screen (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    /// Horizontal pointer position in CSS pixels.
    pub client_x: f64,
    /// Vertical pointer position in CSS pixels.
    pub client_y: f64,
}

impl PointerMove {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Title and body rendered into a bubble.
///
/// Both strings are used verbatim; escaping is the caller's concern unless
/// the template asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleContent {
    pub title: String,
    pub body: String,
}

impl BubbleContent {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

/// Which state the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No bubble on screen.
    #[default]
    Hidden,
    /// A bubble is on screen and follows the pointer.
    Shown,
    /// A bubble is pinned in place until the user closes it.
    Frozen,
}

impl InteractionState {
    /// Whether pointer-move events should reposition the bubble.
    #[must_use]
    pub fn is_tracking(self) -> bool {
        self == Self::Shown
    }
}

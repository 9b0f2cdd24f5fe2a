//! Rendering seam between the bubble engine and whatever draws it.
//!
//! The engine never touches the DOM. It asks a [`Surface`] to measure the
//! container, render bubble content, draw connector wedges, and subscribe to
//! pointer movement. Every handle a surface returns removes itself from the
//! screen (or unsubscribes) when dropped, so releasing a resource is the same
//! thing as letting go of it.

use crate::connector::Wedge;
use crate::error::BubbleError;
use crate::geom::{Container, Size};
use crate::input::BubbleContent;
use crate::placement::Placement;

/// A rendered bubble attached to the container.
///
/// Dropping the view removes it from the container.
pub trait BubbleView {
    /// Size the bubble renders at when unconstrained, measured before attaching.
    fn natural_size(&self) -> Size;

    /// Move the bubble to `placement`, switching it to a capped scrolling
    /// height when `placement.scroll` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to apply the position.
    fn place(&mut self, placement: &Placement) -> Result<(), BubbleError>;

    /// Swap the freeze control for the close control and fade to `opacity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to restyle the bubble.
    fn freeze(&mut self, opacity: f64, fade_ms: u32) -> Result<(), BubbleError>;
}

/// A drawn connector. Dropping it removes the shape.
pub trait ConnectorShape {
    /// Fade the connector to `opacity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to restyle the shape.
    fn fade_to(&mut self, opacity: f64, fade_ms: u32) -> Result<(), BubbleError>;
}

/// The drawing and event surface a [`crate::engine::DetailBubble`] is bound to.
pub trait Surface {
    type View: BubbleView;
    type Connector: ConnectorShape;
    /// Live pointer-move subscription; dropping it unsubscribes.
    type Subscription;

    /// Current container bounds; the offset is in pointer-event coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be measured.
    fn container(&self) -> Result<Container, BubbleError>;

    /// Render `content`, measure it off-screen, and attach it to the container.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or attaching fails.
    fn render(&mut self, content: &BubbleContent) -> Result<Self::View, BubbleError>;

    /// Draw a connector wedge at `opacity`, positioned inside the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be created.
    fn draw_wedge(&mut self, wedge: &Wedge, opacity: f64) -> Result<Self::Connector, BubbleError>;

    /// Start delivering pointer-move events to the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be installed.
    fn subscribe_pointer(&mut self) -> Result<Self::Subscription, BubbleError>;
}

//! Connector geometry: the wedge joining the pointer to the bubble.
//!
//! A wedge is described as a container-local box plus three box-local points, so
//! a surface can position a drawing area and fill a path inside it without
//! knowing anything about placement. The apex sits at the pointer's vertical
//! offset from the bubble's top edge; the base lies on the bubble's near edge
//! across a fixed band of the bubble's height. The left-side wedge is the
//! mirror image of the right-side one.

#[cfg(test)]
#[path = "connector_test.rs"]
mod connector_test;

use crate::config::BubbleConfig;
use crate::consts::{CONNECTOR_BASE_BOTTOM_PX, CONNECTOR_BASE_TOP_PX};
use crate::geom::Point;
use crate::placement::{Placement, Side};

/// A wedge-shaped connector ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Top-left corner of the drawing box in container-local coordinates.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Apex, in box-local coordinates, on the pointer side.
    pub apex: Point,
    /// Upper end of the base, on the bubble side.
    pub base_top: Point,
    /// Lower end of the base, on the bubble side.
    pub base_bottom: Point,
    pub side: Side,
}

impl Wedge {
    /// The three wedge vertices in drawing order.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.apex, self.base_top, self.base_bottom]
    }

    /// SVG path data for the closed triangle.
    #[must_use]
    pub fn path_data(&self) -> String {
        let [a, b, c] = self.points();
        format!("M{},{}L{},{}L{},{}Z", a.x, a.y, b.x, b.y, c.x, c.y)
    }
}

/// Compute the connector for a container-local pointer and its placement.
#[must_use]
pub fn wedge(pointer: Point, placement: &Placement, config: &BubbleConfig) -> Wedge {
    let height = placement.height;
    let cursor_offset = pointer.y - placement.y;
    let band_top = CONNECTOR_BASE_TOP_PX.min(height);
    let band_bottom = CONNECTOR_BASE_BOTTOM_PX.min(height);

    let (left, width) = match placement.side {
        Side::Right => {
            let left = pointer.x + config.connector_inset;
            (left, placement.near_edge_x() - left)
        }
        Side::Left => {
            let left = placement.near_edge_x();
            (left, pointer.x - config.connector_inset - left)
        }
    };

    let (apex_x, base_x) = match placement.side {
        Side::Right => (0.0, width),
        Side::Left => (width, 0.0),
    };

    Wedge {
        origin: Point::new(left, placement.y),
        width,
        height,
        apex: Point::new(apex_x, cursor_offset),
        base_top: Point::new(base_x, band_top),
        base_bottom: Point::new(base_x, band_bottom),
        side: placement.side,
    }
}

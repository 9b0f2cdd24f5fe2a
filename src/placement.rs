//! Bubble placement: where the bubble goes relative to the pointer.
//!
//! The bubble sits to the right of the pointer, offset by the configured gap
//! and lifted by a fraction of its height. If that overflows the container's
//! right edge it flips to the left; there is no further fallback. Vertically
//! it is clamped into the container, and a bubble taller than the container
//! is pinned to the top and switched to scrolling.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::config::BubbleConfig;
use crate::geom::{Container, Point, Size};

/// Which side of the pointer the bubble ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

/// A computed bubble position in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge of the bubble.
    pub x: f64,
    /// Top edge of the bubble.
    pub y: f64,
    /// Natural bubble width.
    pub width: f64,
    /// Height the bubble is displayed at; the container height when scrolling.
    pub height: f64,
    pub side: Side,
    /// The bubble is taller than the container and must scroll vertically.
    pub scroll: bool,
}

impl Placement {
    /// X coordinate of the bubble edge facing the pointer.
    #[must_use]
    pub fn near_edge_x(&self) -> f64 {
        match self.side {
            Side::Right => self.x,
            Side::Left => self.x + self.width,
        }
    }
}

/// Place a bubble of `natural` size for a container-local pointer position.
#[must_use]
pub fn place(pointer: Point, natural: Size, container: &Container, config: &BubbleConfig) -> Placement {
    let mut x = pointer.x + config.gap;
    let mut y = pointer.y - natural.height * config.vertical_bias;
    let mut side = Side::Right;

    if x + natural.width > container.width {
        x = pointer.x - natural.width - config.gap;
        side = Side::Left;
    }

    if y < 0.0 {
        y = 0.0;
    }
    if y + natural.height > container.height {
        y = container.height - natural.height;
    }

    let scroll = natural.height > container.height;
    let height = if scroll {
        y = 0.0;
        container.height
    } else {
        natural.height
    };

    Placement { x, y, width: natural.width, height, side, scroll }
}

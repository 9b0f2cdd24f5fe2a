#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in either screen (viewport) or container-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The bounding rectangle the bubble must stay within.
///
/// `left` / `top` are the container's offset in screen space, in the same
/// coordinate system as the pointer events fed to the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Container {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a screen-space point to container-local coordinates.
    #[must_use]
    pub fn to_local(&self, screen: Point) -> Point {
        Point { x: screen.x - self.left, y: screen.y - self.top }
    }
}

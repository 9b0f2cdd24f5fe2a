//! Shared numeric constants for the bubble widget.
//!
//! These are the defaults behind [`crate::config::BubbleConfig`]; the engine
//! reads the configured values, never these directly.

// ── Placement ───────────────────────────────────────────────────

/// Horizontal gap between the pointer and the near edge of the bubble, in CSS pixels.
pub const DEFAULT_GAP_PX: f64 = 100.0;

/// Fraction of the bubble height placed above the pointer.
pub const DEFAULT_VERTICAL_BIAS: f64 = 1.0 / 3.0;

// ── Connector ───────────────────────────────────────────────────

/// Space left between the pointer and the connector apex, in CSS pixels.
pub const DEFAULT_CONNECTOR_INSET_PX: f64 = 20.0;

/// Top of the wedge base, measured from the bubble's top edge.
pub const CONNECTOR_BASE_TOP_PX: f64 = 30.0;

/// Bottom of the wedge base, measured from the bubble's top edge.
pub const CONNECTOR_BASE_BOTTOM_PX: f64 = 170.0;

/// Default connector fill colour.
pub const DEFAULT_CONNECTOR_FILL: &str = "#000";

// ── Opacity ─────────────────────────────────────────────────────

/// Connector opacity while the bubble tracks the pointer.
pub const DEFAULT_CONNECTOR_OPACITY: f64 = 0.7;

/// Bubble and connector opacity once frozen.
pub const DEFAULT_FROZEN_OPACITY: f64 = 0.8;

/// Duration of the opacity fade applied on freeze, in milliseconds.
pub const DEFAULT_FADE_MS: u32 = 60;

// ── Measurement ─────────────────────────────────────────────────

/// Off-screen coordinate used when measuring a freshly rendered bubble.
pub const MEASURE_OFFSCREEN_PX: f64 = -1000.0;

/// Page element holding the bubble template markup.
pub const DEFAULT_TEMPLATE_SELECTOR: &str = "#bubble-template";

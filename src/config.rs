//! Widget configuration parsed from the JSON options passed to `attach`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONNECTOR_FILL, DEFAULT_CONNECTOR_INSET_PX, DEFAULT_CONNECTOR_OPACITY, DEFAULT_FADE_MS,
    DEFAULT_FROZEN_OPACITY, DEFAULT_GAP_PX, DEFAULT_TEMPLATE_SELECTOR, DEFAULT_VERTICAL_BIAS,
};

/// Error returned by [`BubbleConfig::from_json`] and [`BubbleConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options string is not valid JSON or has unknown keys.
    #[error("failed to parse bubble options: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid bubble option `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable placement, connector, and styling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BubbleConfig {
    /// Horizontal gap between pointer and bubble edge.
    pub gap: f64,
    /// Fraction of the bubble height placed above the pointer.
    pub vertical_bias: f64,
    /// Space between the pointer and the connector apex.
    pub connector_inset: f64,
    /// Connector opacity while tracking.
    pub connector_opacity: f64,
    /// Bubble and connector opacity once frozen.
    pub frozen_opacity: f64,
    /// Opacity fade duration on freeze, in milliseconds.
    pub fade_ms: u32,
    /// CSS colour used to fill the connector.
    pub connector_fill: String,
    /// Selector of the page element holding the bubble template.
    pub template_selector: String,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP_PX,
            vertical_bias: DEFAULT_VERTICAL_BIAS,
            connector_inset: DEFAULT_CONNECTOR_INSET_PX,
            connector_opacity: DEFAULT_CONNECTOR_OPACITY,
            frozen_opacity: DEFAULT_FROZEN_OPACITY,
            fade_ms: DEFAULT_FADE_MS,
            connector_fill: DEFAULT_CONNECTOR_FILL.to_string(),
            template_selector: DEFAULT_TEMPLATE_SELECTOR.to_string(),
        }
    }
}

impl BubbleConfig {
    /// Parse and validate options from a JSON object string.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.connector_inset.is_finite() || self.connector_inset < 0.0 {
            return Err(invalid("connectorInset", format!("must be a non-negative number, got {}", self.connector_inset)));
        }
        if !self.gap.is_finite() || self.gap <= self.connector_inset {
            return Err(invalid(
                "gap",
                format!("must exceed connectorInset ({}), got {}", self.connector_inset, self.gap),
            ));
        }
        if !(0.0..=1.0).contains(&self.vertical_bias) {
            return Err(invalid("verticalBias", format!("must be within [0, 1], got {}", self.vertical_bias)));
        }
        if !(0.0..=1.0).contains(&self.connector_opacity) {
            return Err(invalid("connectorOpacity", format!("must be within [0, 1], got {}", self.connector_opacity)));
        }
        if !(0.0..=1.0).contains(&self.frozen_opacity) {
            return Err(invalid("frozenOpacity", format!("must be within [0, 1], got {}", self.frozen_opacity)));
        }
        if self.connector_fill.trim().is_empty() {
            return Err(invalid("connectorFill", "must not be empty".into()));
        }
        if self.template_selector.trim().is_empty() {
            return Err(invalid("templateSelector", "must not be empty".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

use log::{debug, trace};

use crate::config::BubbleConfig;
use crate::connector::{self, Wedge};
use crate::error::BubbleError;
use crate::geom::Size;
use crate::input::{BubbleContent, InteractionState, PointerMove};
use crate::placement::{self, Placement};
use crate::surface::{BubbleView, ConnectorShape, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// The last computed bubble position and connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub placement: Placement,
    pub wedge: Wedge,
}

/// A bubble on screen together with its current connector.
struct Active<S: Surface> {
    view: S::View,
    connector: Option<S::Connector>,
    layout: Option<Layout>,
}

impl<S: Surface> Active<S> {
    fn new(view: S::View) -> Self {
        Self { view, connector: None, layout: None }
    }

    fn freeze(&mut self, config: &BubbleConfig) -> Result<(), BubbleError> {
        self.view.freeze(config.frozen_opacity, config.fade_ms)?;
        if let Some(connector) = self.connector.as_mut() {
            connector.fade_to(config.frozen_opacity, config.fade_ms)?;
        }
        Ok(())
    }
}

/// Internal state. Each variant owns exactly the resources it needs, so
/// leaving a variant releases them: only `Shown` holds a pointer subscription.
enum Phase<S: Surface> {
    Hidden,
    Shown { active: Active<S>, subscription: S::Subscription },
    Frozen { active: Active<S> },
}

impl<S: Surface> Default for Phase<S> {
    fn default() -> Self {
        Self::Hidden
    }
}

impl<S: Surface> Phase<S> {
    fn state(&self) -> InteractionState {
        match self {
            Self::Hidden => InteractionState::Hidden,
            Self::Shown { .. } => InteractionState::Shown,
            Self::Frozen { .. } => InteractionState::Frozen,
        }
    }

    fn active(&self) -> Option<&Active<S>> {
        match self {
            Self::Hidden => None,
            Self::Shown { active, .. } | Self::Frozen { active } => Some(active),
        }
    }
}

/// Detail bubble bound to one container.
///
/// Holds the hidden / shown / frozen state machine and drives a [`Surface`]
/// for everything visible. Separated from [`crate::widget::Bubbles`] so it
/// can be tested without a browser.
pub struct DetailBubble<S: Surface> {
    surface: S,
    config: BubbleConfig,
    phase: Phase<S>,
}

impl<S: Surface> DetailBubble<S> {
    #[must_use]
    pub fn new(surface: S, config: BubbleConfig) -> Self {
        Self { surface, config, phase: Phase::Hidden }
    }

    // --- Operations ---

    /// Show a bubble for `content`, replacing any bubble already shown.
    ///
    /// Ignored while frozen.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to render the bubble or to
    /// subscribe to pointer movement; the widget is left hidden.
    pub fn show(&mut self, content: &BubbleContent) -> Result<(), BubbleError> {
        if matches!(self.phase, Phase::Frozen { .. }) {
            trace!("show ignored: bubble is frozen");
            return Ok(());
        }

        self.phase = Phase::Hidden;
        let view = self.surface.render(content)?;
        let subscription = self.surface.subscribe_pointer()?;
        let natural = view.natural_size();
        self.phase = Phase::Shown { active: Active::new(view), subscription };

        debug!("bubble shown: {:?} ({}x{})", content.title, natural.width, natural.height);
        Ok(())
    }

    /// Reposition the bubble and redraw its connector for a pointer move.
    ///
    /// Only has an effect while shown and unfrozen.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to measure the container, move
    /// the bubble, or draw the connector. [`Self::layout`] is then `None`
    /// until the next successful move.
    pub fn position(&mut self, event: PointerMove) -> Result<(), BubbleError> {
        let Phase::Shown { active, .. } = &mut self.phase else {
            trace!("pointer move ignored: bubble is not tracking");
            return Ok(());
        };

        let container = self.surface.container()?;
        let pointer = container.to_local(event.point());
        let placement = placement::place(pointer, active.view.natural_size(), &container, &self.config);
        // Stale until the new connector is drawn.
        active.layout = None;
        active.view.place(&placement)?;

        let wedge = connector::wedge(pointer, &placement, &self.config);
        // The old wedge is removed before the new one is drawn.
        active.connector = None;
        active.connector = Some(self.surface.draw_wedge(&wedge, self.config.connector_opacity)?);
        active.layout = Some(Layout { placement, wedge });

        trace!("bubble placed {:?} at ({}, {})", placement.side, placement.x, placement.y);
        Ok(())
    }

    /// Remove the bubble and its connector and stop tracking the pointer.
    ///
    /// Ignored while frozen.
    pub fn hide(&mut self) {
        match self.phase {
            Phase::Frozen { .. } => trace!("hide ignored: bubble is frozen"),
            Phase::Hidden => trace!("hide ignored: no bubble shown"),
            Phase::Shown { .. } => {
                self.phase = Phase::Hidden;
                debug!("bubble hidden");
            }
        }
    }

    /// Pin the bubble where it is until the user closes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to restyle the bubble or
    /// connector. The bubble is frozen regardless.
    pub fn freeze(&mut self) -> Result<(), BubbleError> {
        match std::mem::take(&mut self.phase) {
            Phase::Shown { mut active, subscription } => {
                drop(subscription);
                let styled = active.freeze(&self.config);
                self.phase = Phase::Frozen { active };
                debug!("bubble frozen");
                styled
            }
            other => {
                trace!("freeze ignored: bubble is {:?}", other.state());
                self.phase = other;
                Ok(())
            }
        }
    }

    /// Close a frozen bubble. This is what the bubble's close control does.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, Phase::Frozen { .. }) {
            self.phase = Phase::Hidden;
            debug!("frozen bubble dismissed");
        } else {
            trace!("dismiss ignored: bubble is not frozen");
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.phase.state()
    }

    /// Whether pointer-move events currently reposition the bubble.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state().is_tracking()
    }

    /// Placement and connector from the most recent pointer move, if any.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.phase.active().and_then(|active| active.layout)
    }

    /// Measured size of the bubble on screen, if any.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.phase.active().map(|active| active.view.natural_size())
    }
}

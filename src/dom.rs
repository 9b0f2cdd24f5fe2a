//! Browser surface: renders bubbles into the DOM and connectors as SVG.
//!
//! This module is the only place that touches [`web_sys`]. Bubbles are
//! rendered from the page template into an element appended to the
//! container; connectors are `<svg>` elements appended next to them, so both
//! are absolutely positioned in container-local coordinates and scroll with
//! the page together. Every handle removes its element when dropped.
//!
//! All fallible DOM calls propagate errors via [`BubbleError`].

use std::cell::RefCell;
use std::rc::Weak;

use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, SvgElement};

use crate::connector::Wedge;
use crate::consts::MEASURE_OFFSCREEN_PX;
use crate::engine::DetailBubble;
use crate::error::BubbleError;
use crate::geom::{Container, Size};
use crate::input::{BubbleContent, PointerMove};
use crate::placement::Placement;
use crate::surface::{BubbleView, ConnectorShape, Surface};
use crate::template::Template;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Selector of the control that pins a bubble.
pub const FREEZE_SELECTOR: &str = "a.freeze-bubble";
/// Selector of the control that closes a frozen bubble.
pub const CLOSE_SELECTOR: &str = "a.close-bubble";

/// Back-reference the pointer listener uses to reach its widget.
pub type WidgetRef = Weak<RefCell<DetailBubble<DomSurface>>>;

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Convert a browser mouse event into the engine's pointer event.
#[must_use]
pub fn pointer_move(event: &MouseEvent) -> PointerMove {
    PointerMove::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Whether `event` originated inside an element matching `selector`.
#[must_use]
pub fn hits_control(event: &Event, selector: &str) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    matches!(element.closest(selector), Ok(Some(_)))
}

// =============================================================
// Surface
// =============================================================

/// [`Surface`] backed by a container element in a live document.
pub struct DomSurface {
    container: HtmlElement,
    document: Document,
    template: Template,
    fill: String,
    widget: WidgetRef,
}

impl DomSurface {
    #[must_use]
    pub fn new(container: HtmlElement, document: Document, template: Template, fill: String, widget: WidgetRef) -> Self {
        Self { container, document, template, fill, widget }
    }

    fn measure(&self, element: &HtmlElement) -> Result<Size, BubbleError> {
        let body = self.document.body().ok_or(BubbleError::MissingBody)?;
        let clone = element
            .clone_node_with_deep(true)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BubbleError::UnexpectedElement("bubble clone is not an HTML element"))?;

        let style = clone.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", &px(MEASURE_OFFSCREEN_PX))?;
        style.set_property("left", &px(MEASURE_OFFSCREEN_PX))?;
        body.append_child(&clone)?;

        let size = Size::new(f64::from(clone.offset_width()), f64::from(clone.offset_height()));
        clone.remove();
        Ok(size)
    }
}

impl Surface for DomSurface {
    type View = DomBubble;
    type Connector = DomConnector;
    type Subscription = EventListener;

    fn container(&self) -> Result<Container, BubbleError> {
        let rect = self.container.get_bounding_client_rect();
        Ok(Container::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn render(&mut self, content: &BubbleContent) -> Result<DomBubble, BubbleError> {
        let holder = self.document.create_element("div")?;
        holder.set_inner_html(self.template.render(content).trim());
        let element = holder
            .first_element_child()
            .ok_or(BubbleError::UnexpectedElement("bubble template rendered no element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BubbleError::UnexpectedElement("bubble template root is not an HTML element"))?;

        let size = self.measure(&element)?;
        element.style().set_property("position", "absolute")?;
        self.container.append_child(&element)?;
        Ok(DomBubble { element, size })
    }

    fn draw_wedge(&mut self, wedge: &Wedge, opacity: f64) -> Result<DomConnector, BubbleError> {
        let svg = self
            .document
            .create_element_ns(Some(SVG_NS), "svg")?
            .dyn_into::<SvgElement>()
            .map_err(|_| BubbleError::UnexpectedElement("connector is not an SVG element"))?;
        svg.set_attribute("class", "bubble-connector")?;
        svg.set_attribute("width", &wedge.width.to_string())?;
        svg.set_attribute("height", &wedge.height.to_string())?;

        let style = svg.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &px(wedge.origin.x))?;
        style.set_property("top", &px(wedge.origin.y))?;
        style.set_property("overflow", "visible")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("opacity", &opacity.to_string())?;

        let path = self.document.create_element_ns(Some(SVG_NS), "path")?;
        path.set_attribute("d", &wedge.path_data())?;
        path.set_attribute("fill", &self.fill)?;
        svg.append_child(&path)?;
        self.container.append_child(&svg)?;

        Ok(DomConnector { svg })
    }

    fn subscribe_pointer(&mut self) -> Result<EventListener, BubbleError> {
        let window = web_sys::window().ok_or(BubbleError::MissingWindow)?;
        let widget = self.widget.clone();
        Ok(EventListener::new(&window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(cell) = widget.upgrade() else {
                return;
            };
            let Ok(mut bubble) = cell.try_borrow_mut() else {
                warn!("pointer move dropped: bubble is busy");
                return;
            };
            if let Err(err) = bubble.position(pointer_move(event)) {
                warn!("bubble position failed: {err}");
            }
        }))
    }
}

// =============================================================
// Handles
// =============================================================

/// A bubble element inside the container.
pub struct DomBubble {
    element: HtmlElement,
    size: Size,
}

impl DomBubble {
    fn set_control_display(&self, selector: &str, display: &str) -> Result<(), BubbleError> {
        if let Some(control) = self.element.query_selector(selector)? {
            if let Some(control) = control.dyn_ref::<HtmlElement>() {
                control.style().set_property("display", display)?;
            }
        }
        Ok(())
    }
}

impl BubbleView for DomBubble {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn place(&mut self, placement: &Placement) -> Result<(), BubbleError> {
        let style = self.element.style();
        style.set_property("left", &px(placement.x))?;
        style.set_property("top", &px(placement.y))?;
        if placement.scroll {
            style.set_property("box-sizing", "border-box")?;
            style.set_property("overflow-y", "scroll")?;
            style.set_property("height", &px(placement.height))?;
        }
        Ok(())
    }

    fn freeze(&mut self, opacity: f64, fade_ms: u32) -> Result<(), BubbleError> {
        self.set_control_display(FREEZE_SELECTOR, "none")?;
        self.set_control_display(CLOSE_SELECTOR, "block")?;
        let style = self.element.style();
        style.set_property("transition", &format!("opacity {fade_ms}ms"))?;
        style.set_property("opacity", &opacity.to_string())?;
        Ok(())
    }
}

impl Drop for DomBubble {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// A connector `<svg>` in the document body.
pub struct DomConnector {
    svg: SvgElement,
}

impl ConnectorShape for DomConnector {
    fn fade_to(&mut self, opacity: f64, fade_ms: u32) -> Result<(), BubbleError> {
        let style = self.svg.style();
        style.set_property("transition", &format!("opacity {fade_ms}ms"))?;
        style.set_property("opacity", &opacity.to_string())?;
        Ok(())
    }
}

impl Drop for DomConnector {
    fn drop(&mut self) {
        self.svg.remove();
    }
}

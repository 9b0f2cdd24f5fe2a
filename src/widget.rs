//! JavaScript-facing handle for the detail bubble.
//!
//! `Bubbles.attach(container, options)` binds a widget to a container element
//! and returns a handle exposing `show`, `hide`, and `freeze`. The close
//! control inside a frozen bubble is handled through a delegated `mousedown`
//! listener on the container that lives as long as the handle.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::BubbleConfig;
use crate::dom::{CLOSE_SELECTOR, DomSurface, hits_control};
use crate::engine::DetailBubble;
use crate::error::BubbleError;
use crate::input::{BubbleContent, InteractionState};
use crate::template::{DEFAULT_TEMPLATE, Template};

/// Install the console logger and panic hook.
///
/// `level` is a `log` level name (`"trace"` .. `"error"`); defaults to `info`.
///
/// # Errors
///
/// Returns an error for an unknown level or if a logger is already installed.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = match level.as_deref() {
        Some(raw) => raw.parse::<log::Level>().map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => log::Level::Info,
    };
    console_log::init_with_level(level).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A detail bubble bound to one container element.
#[wasm_bindgen]
pub struct Bubbles {
    inner: Rc<RefCell<DetailBubble<DomSurface>>>,
    _close: EventListener,
}

#[wasm_bindgen]
impl Bubbles {
    /// Bind a widget to `container`, optionally configured by a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options, an unparseable page template,
    /// or a container that is not in a document.
    pub fn attach(container: HtmlElement, options: Option<String>) -> Result<Bubbles, JsValue> {
        Self::bind(container, options.as_deref()).map_err(JsValue::from)
    }

    /// Show a bubble with `title` and `body`. Ignored while frozen.
    ///
    /// # Errors
    ///
    /// Returns an error if the bubble cannot be rendered.
    pub fn show(&self, title: String, body: String) -> Result<(), JsValue> {
        let content = BubbleContent { title, body };
        self.with(|bubble| bubble.show(&content))
    }

    /// Remove the bubble. Ignored while frozen.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is handling another event.
    pub fn hide(&self) -> Result<(), JsValue> {
        self.with(|bubble| {
            bubble.hide();
            Ok(())
        })
    }

    /// Pin the bubble until the user closes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the bubble cannot be restyled.
    pub fn freeze(&self) -> Result<(), JsValue> {
        self.with(DetailBubble::freeze)
    }

    /// Current state: `"hidden"`, `"shown"`, or `"frozen"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is handling another event.
    pub fn state(&self) -> Result<String, JsValue> {
        let bubble = self.inner.try_borrow().map_err(|_| BubbleError::Busy)?;
        let name = match bubble.state() {
            InteractionState::Hidden => "hidden",
            InteractionState::Shown => "shown",
            InteractionState::Frozen => "frozen",
        };
        Ok(name.to_string())
    }
}

impl Bubbles {
    fn bind(container: HtmlElement, options: Option<&str>) -> Result<Self, BubbleError> {
        let config = match options {
            Some(raw) => BubbleConfig::from_json(raw)?,
            None => BubbleConfig::default(),
        };
        let document = container.owner_document().ok_or(BubbleError::MissingDocument)?;
        let template = page_template(&document, &config.template_selector)?;
        let fill = config.connector_fill.clone();
        let target = container.clone();

        let inner = Rc::new_cyclic(|widget| {
            let surface = DomSurface::new(container, document, template, fill, widget.clone());
            RefCell::new(DetailBubble::new(surface, config))
        });

        let widget = Rc::downgrade(&inner);
        let close = EventListener::new(&target, "mousedown", move |event| {
            if !hits_control(event, CLOSE_SELECTOR) {
                return;
            }
            let Some(cell) = widget.upgrade() else {
                return;
            };
            let Ok(mut bubble) = cell.try_borrow_mut() else {
                warn!("close ignored: bubble is busy");
                return;
            };
            bubble.dismiss();
        });

        Ok(Self { inner, _close: close })
    }

    fn with<T>(
        &self,
        op: impl FnOnce(&mut DetailBubble<DomSurface>) -> Result<T, BubbleError>,
    ) -> Result<T, JsValue> {
        let mut bubble = self.inner.try_borrow_mut().map_err(|_| BubbleError::Busy)?;
        op(&mut *bubble).map_err(JsValue::from)
    }
}

/// The page's bubble template if present, the built-in one otherwise.
fn page_template(document: &Document, selector: &str) -> Result<Template, BubbleError> {
    match document.query_selector(selector)? {
        Some(element) => Ok(Template::parse(&element.inner_html())?),
        None => Ok(Template::parse(DEFAULT_TEMPLATE)?),
    }
}

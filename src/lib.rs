//! Pointer-following detail bubbles for map and canvas exhibits.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Hovering a
//! feature shows a bubble next to the cursor, tied to it by a translucent
//! wedge; the bubble follows the pointer until it is frozen in place, and a
//! frozen bubble stays put until its close control is clicked. The host page
//! only wires feature hover and click events to [`widget::Bubbles`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | JavaScript-facing handle and logging setup |
//! | [`engine`] | Hidden / shown / frozen state machine, testable without a browser |
//! | [`surface`] | Traits the engine draws through |
//! | [`dom`] | Browser implementation of [`surface::Surface`] |
//! | [`placement`] | Bubble position relative to the pointer and container |
//! | [`connector`] | Wedge geometry between pointer and bubble |
//! | [`template`] | Bubble markup template and rendering |
//! | [`geom`] | Points, sizes, and container coordinate conversions |
//! | [`input`] | Pointer events, bubble content, and interaction state |
//! | [`config`] | Tunable options, parsed from JSON |
//! | [`error`] | Crate-wide error type |
//! | [`consts`] | Default geometry, opacity, and timing values |

pub mod config;
pub mod connector;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod placement;
pub mod surface;
pub mod template;
pub mod widget;

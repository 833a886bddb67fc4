//! Lissajous rendering for `lastik` scenes.
//!
//! Every category of term has a shape in the [`catalog`]: a Lissajous curve
//! `x = sin(a t + phase π)`, `y = 1.5 sin(b t)`. A [`PngRenderer`] draws each figure handed to it
//! by a scene as a grid of panels, one glyph per term, and writes it to a PNG file. This crate
//! uses the [`cairo`] crate to draw.
//!
//! Two standalone views are also provided: the [`Gallery`] of catalog shapes, and the
//! [`Explorer`] for a single curve with arbitrary parameters.
//!
//! # Example
//!
//! ```no_run
//! use lastik_graph::PngRenderer;
//! use lastik_scene::{present, strassen};
//!
//! let mut renderer = PngRenderer::new("figures");
//! for scene in strassen::scenes() {
//!     present(&scene, &mut renderer)?;
//! }
//! assert!(renderer.misses.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod curve;
mod draw;
pub mod error;
pub mod explorer;
pub mod figure;
pub mod gallery;
pub mod layout;
pub mod opts;
pub mod point;
pub mod renderer;
mod text_align;
pub mod viewport;

pub use curve::Curve;
pub use draw::tint_color;
pub use error::Error;
pub use explorer::{parse_curve, Explorer};
pub use gallery::Gallery;
pub use opts::RenderOptions;
pub use point::{CanvasPoint, GraphPoint};
pub use renderer::{write_png, PngRenderer};

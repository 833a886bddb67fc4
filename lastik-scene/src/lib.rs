//! Scenes of the Strassen decomposition.
//!
//! A [`Scene`] is a signed sum of products, such as `P = M1 + M4 - M5 + M7`. Evaluating a scene
//! collides the operands of each product, negates the subtracted ones, concatenates everything
//! into a soup and cancels it. The result is then handed to a [`Renderer`] as a [`Figure`] of
//! panels, one per term collection to show.
//!
//! ```
//! use lastik_scene::{render::Recorder, strassen};
//!
//! let q = strassen::scene("Q").unwrap();
//! let mut recorder = Recorder::default();
//! let evaluation = lastik_scene::present(&q, &mut recorder).unwrap();
//!
//! assert_eq!(evaluation.cancellation.remaining.to_string(), "af[double_1] + bh[double_1]");
//! assert_eq!(recorder.figures[0].panels.len(), 4);
//! ```

pub mod error;
pub mod render;
pub mod scene;
pub mod strassen;

pub use error::{InvalidScene, PresentError};
pub use render::{Figure, Panel, Renderer, Tint};
pub use scene::{present, present_with, Evaluation, Layout, Scene};

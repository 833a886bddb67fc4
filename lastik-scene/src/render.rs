//! The boundary between scenes and whatever draws them.

use lastik_terms::Molecule;
use std::convert::Infallible;

/// How a panel should be tinted, according to the role of its terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    /// Terms that are still part of a sum: the soup, or one product's expansion.
    Soup,

    /// Terms removed by cancellation.
    Cancelled,

    /// The terms that survived cancellation.
    Result,
}

/// One panel of a [`Figure`]: a titled term collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    /// The title shown above the panel.
    pub title: String,

    /// The terms to draw, one glyph per term.
    pub molecule: Molecule,

    /// The tint of the glyphs.
    pub tint: Tint,
}

impl Panel {
    /// Creates a new panel.
    pub fn new(title: impl Into<String>, molecule: Molecule, tint: Tint) -> Panel {
        Panel {
            title: title.into(),
            molecule,
            tint,
        }
    }
}

/// A titled set of panels produced by one scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Figure {
    /// The title of the whole figure.
    pub title: String,

    /// A short name for the figure, usable in file names.
    pub name: String,

    /// The panels, in reading order.
    pub panels: Vec<Panel>,
}

/// Something that can display figures.
///
/// A renderer must leave panels with an empty molecule blank (only the title may be shown), and
/// otherwise draw one glyph per term in a roughly square grid, using the term's category to pick
/// the shape, its label as a text annotation and its sign as a separate annotation.
pub trait Renderer {
    /// The error returned when a figure cannot be displayed.
    type Error;

    /// Displays the given figure.
    fn render(&mut self, figure: &Figure) -> Result<(), Self::Error>;
}

/// A renderer that only records the figures it is given.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// The figures rendered so far, in order.
    pub figures: Vec<Figure>,
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn render(&mut self, figure: &Figure) -> Result<(), Infallible> {
        self.figures.push(figure.clone());
        Ok(())
    }
}

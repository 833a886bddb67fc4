//! A gallery of catalog shapes, drawn side by side for comparison.

use cairo::{Error, FontWeight, ImageSurface};
use rayon::prelude::*;
use tracing::warn;
use super::{
    catalog::lookup,
    curve::Curve,
    draw::{blank_canvas, draw_title, ContextExt, DARK_ORANGE, RED},
    opts::RenderOptions,
    point::{CanvasPoint, GraphPoint},
    text_align::ShowTextAlign,
    viewport::Viewport,
};

/// The shapes shown when no ids are given.
pub const DEFAULT_IDS: [&str; 9] = [
    "single_1", "single_2", "single_3",
    "double_1", "double_3", "double_5",
    "triple_2", "triple_3", "lastik_complete",
];

/// The number of cells in each row of the gallery.
pub const GALLERY_COLUMNS: usize = 3;

/// A grid of catalog shapes, one cell per id.
#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    /// The ids to show, in reading order.
    pub ids: Vec<String>,

    /// The rendering options.
    pub options: RenderOptions,
}

impl Default for Gallery {
    fn default() -> Gallery {
        Gallery::new(DEFAULT_IDS)
    }
}

impl Gallery {
    /// Creates a gallery of the given ids with the default options.
    pub fn new<I, S>(ids: I) -> Gallery
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Gallery {
            ids: ids.into_iter().map(Into::into).collect(),
            options: RenderOptions::default(),
        }
    }

    /// Set the rendering options. Returns an updated [`Gallery`] for chaining.
    pub fn with_opts(mut self, options: RenderOptions) -> Gallery {
        self.options = options;
        self
    }

    /// Returns the ids that are not in the catalog.
    pub fn misses(&self) -> Vec<&str> {
        self.ids.iter()
            .map(String::as_str)
            .filter(|id| lookup(id).is_none())
            .collect()
    }

    /// Returns the `(columns, rows)` of the gallery grid. There is always at least one cell.
    pub fn grid(&self) -> (usize, usize) {
        let rows = ((self.ids.len() + GALLERY_COLUMNS - 1) / GALLERY_COLUMNS).max(1);
        (GALLERY_COLUMNS, rows)
    }

    /// Draws the gallery to a new [`ImageSurface`].
    ///
    /// An id that is not in the catalog is drawn as an error message in its cell.
    pub fn draw(&self) -> Result<ImageSurface, Error> {
        let (cols, rows) = self.grid();
        let cell = CanvasPoint(
            self.options.gallery_cell_size.0 as f64,
            self.options.gallery_cell_size.1 as f64,
        );
        let (surface, context) = blank_canvas(
            (cell.0 * cols as f64) as i32,
            (cell.1 * rows as f64) as i32,
        )?;

        let curves = self.ids.par_iter()
            .map(|id| {
                lookup(id).map(|recipe| {
                    Curve::from(recipe).sample(self.options.samples, 1.0, GraphPoint(0.0, 0.0))
                })
            })
            .collect::<Vec<_>>();

        let title_height = self.options.panel_font_size * 2.0;
        for (i, (id, curve)) in self.ids.iter().zip(curves).enumerate() {
            let origin = CanvasPoint(
                cell.0 * (i % cols) as f64,
                cell.1 * (i / cols) as f64,
            );
            let center_x = origin.0 + cell.0 / 2.0;

            let Some(points) = curve else {
                warn!(id = %id, "no shape for id");
                draw_title(&context, &format!("Unknown ID: '{}'", id), center_x, origin.1 + 10.0, self.options.panel_font_size)?;
                context.set_color(RED);
                context.set_font(FontWeight::Normal, self.options.label_font_size);
                context.show_lines_centered(
                    &format!("Error:\n'{}'\n not defined.", id),
                    (center_x, origin.1 + cell.1 / 2.0),
                )?;
                continue;
            };

            draw_title(&context, &format!("'{}'", id), center_x, origin.1 + 10.0, self.options.panel_font_size)?;
            let viewport = Viewport::new(
                CanvasPoint(origin.0, origin.1 + title_height),
                CanvasPoint(cell.0, cell.1 - title_height),
                GraphPoint(0.0, 0.0),
                GraphPoint(2.0, 2.0),
            ).equal_aspect();
            context.set_color(DARK_ORANGE);
            context.set_line_width(self.options.line_width);
            context.stroke_polyline(&viewport, &points)?;
        }

        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_gallery_is_three_by_three() {
        let gallery = Gallery::default();
        assert_eq!(gallery.grid(), (3, 3));
        assert!(gallery.misses().is_empty());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let gallery = Gallery::new(["single_1", "single_5", "double_3", "nonsense"]);
        assert_eq!(gallery.grid(), (3, 2));
        assert_eq!(gallery.misses(), ["single_5", "nonsense"]);
    }

    #[test]
    fn empty_gallery_still_has_a_cell() {
        let gallery = Gallery::new(Vec::<String>::new());
        assert_eq!(gallery.grid(), (3, 1));
    }
}

use super::point::CanvasPoint;

/// Options to use when rendering scenes, galleries and curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// The width and height of a scene figure, in pixels. Figures are divided into a 2x2 grid of
    /// panels.
    ///
    /// The default value is `(1600, 1600)`.
    pub figure_size: CanvasPoint<u16>,

    /// The width and height of one cell of the catalog gallery, in pixels.
    ///
    /// The default value is `(500, 500)`.
    pub gallery_cell_size: CanvasPoint<u16>,

    /// The width and height of the curve explorer image, in pixels.
    ///
    /// The default value is `(800, 900)`.
    pub explorer_size: CanvasPoint<u16>,

    /// The distance, in graph units, between the centers of two neighboring glyphs in a panel.
    ///
    /// The default value is `3.0`.
    pub glyph_spacing: f64,

    /// The scale of a glyph's curve, in graph units.
    ///
    /// The default value is `0.8`.
    pub glyph_scale: f64,

    /// The number of points sampled along each curve.
    ///
    /// The default value is `400`.
    pub samples: usize,

    /// The width of the curves, in pixels.
    ///
    /// The default value is `4.0`.
    pub line_width: f64,

    /// The font size of a figure's title.
    ///
    /// The default value is `40.0`.
    pub title_font_size: f64,

    /// The font size of a panel's title.
    ///
    /// The default value is `28.0`.
    pub panel_font_size: f64,

    /// The font size of the label beside each glyph.
    ///
    /// The default value is `24.0`.
    pub label_font_size: f64,

    /// The font size of the sign above each glyph.
    ///
    /// The default value is `36.0`.
    pub sign_font_size: f64,
}

/// The default options. Returns a [`RenderOptions`] with the following values:
///
/// - [`figure_size`](RenderOptions::figure_size): `(1600, 1600)`
/// - [`gallery_cell_size`](RenderOptions::gallery_cell_size): `(500, 500)`
/// - [`explorer_size`](RenderOptions::explorer_size): `(800, 900)`
/// - [`glyph_spacing`](RenderOptions::glyph_spacing): `3.0`
/// - [`glyph_scale`](RenderOptions::glyph_scale): `0.8`
/// - [`samples`](RenderOptions::samples): `400`
/// - [`line_width`](RenderOptions::line_width): `4.0`
/// - [`title_font_size`](RenderOptions::title_font_size): `40.0`
/// - [`panel_font_size`](RenderOptions::panel_font_size): `28.0`
/// - [`label_font_size`](RenderOptions::label_font_size): `24.0`
/// - [`sign_font_size`](RenderOptions::sign_font_size): `36.0`
impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            figure_size: CanvasPoint(1600, 1600),
            gallery_cell_size: CanvasPoint(500, 500),
            explorer_size: CanvasPoint(800, 900),
            glyph_spacing: 3.0,
            glyph_scale: 0.8,
            samples: 400,
            line_width: 4.0,
            title_font_size: 40.0,
            panel_font_size: 28.0,
            label_font_size: 24.0,
            sign_font_size: 36.0,
        }
    }
}

impl RenderOptions {
    /// Set the figure size. Returns an updated [`RenderOptions`] for chaining.
    pub fn figure_size(mut self, width: u16, height: u16) -> Self {
        self.figure_size = CanvasPoint(width, height);
        self
    }

    /// Set the size of a gallery cell. Returns an updated [`RenderOptions`] for chaining.
    pub fn gallery_cell_size(mut self, width: u16, height: u16) -> Self {
        self.gallery_cell_size = CanvasPoint(width, height);
        self
    }

    /// Set the size of the explorer image. Returns an updated [`RenderOptions`] for chaining.
    pub fn explorer_size(mut self, width: u16, height: u16) -> Self {
        self.explorer_size = CanvasPoint(width, height);
        self
    }

    /// Set the spacing between glyphs. Returns an updated [`RenderOptions`] for chaining.
    pub fn glyph_spacing(mut self, glyph_spacing: f64) -> Self {
        self.glyph_spacing = glyph_spacing;
        self
    }

    /// Set the scale of each glyph. Returns an updated [`RenderOptions`] for chaining.
    pub fn glyph_scale(mut self, glyph_scale: f64) -> Self {
        self.glyph_scale = glyph_scale;
        self
    }

    /// Set the number of points sampled along each curve. Returns an updated [`RenderOptions`]
    /// for chaining.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the width of the curves. Returns an updated [`RenderOptions`] for chaining.
    pub fn line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

use cairo::{Context, Error, FontSlant, FontWeight, Format, ImageSurface};
use lastik_scene::Tint;
use super::{
    point::{CanvasPoint, GraphPoint},
    text_align::ShowTextAlign,
    viewport::Viewport,
};

/// An RGB color with each channel in the range `0.0` to `1.0`.
pub type Rgb = (f64, f64, f64);

pub const DARK_ORANGE: Rgb = (1.0, 140.0 / 255.0, 0.0);
pub const LIGHT_GRAY: Rgb = (211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0);
pub const GREEN: Rgb = (0.0, 128.0 / 255.0, 0.0);
pub const RED: Rgb = (1.0, 0.0, 0.0);
pub const BLACK: Rgb = (0.0, 0.0, 0.0);
pub const WHITE: Rgb = (1.0, 1.0, 1.0);

/// Returns the color used to draw the glyphs of a panel with the given tint.
pub fn tint_color(tint: Tint) -> Rgb {
    match tint {
        Tint::Soup => DARK_ORANGE,
        Tint::Cancelled => LIGHT_GRAY,
        Tint::Result => GREEN,
    }
}

/// Extension methods used by every drawing in this crate.
pub(crate) trait ContextExt {
    /// Sets the source color.
    fn set_color(&self, color: Rgb);

    /// Selects the sans-serif font with the given weight and size.
    fn set_font(&self, weight: FontWeight, size: f64);

    /// Strokes a line through the given points.
    fn stroke_polyline(&self, viewport: &Viewport, points: &[GraphPoint<f64>]) -> Result<(), Error>;
}

impl ContextExt for Context {
    fn set_color(&self, (r, g, b): Rgb) {
        self.set_source_rgb(r, g, b);
    }

    fn set_font(&self, weight: FontWeight, size: f64) {
        self.select_font_face("sans-serif", FontSlant::Normal, weight);
        self.set_font_size(size);
    }

    fn stroke_polyline(&self, viewport: &Viewport, points: &[GraphPoint<f64>]) -> Result<(), Error> {
        let mut first_point = true;
        for point in points {
            let canvas = viewport.to_canvas(*point);
            if first_point {
                self.move_to(canvas.0, canvas.1);
                first_point = false;
            } else {
                self.line_to(canvas.0, canvas.1);
            }
        }
        self.stroke()
    }
}

/// Creates a white canvas of the given size.
pub(crate) fn blank_canvas(width: i32, height: i32) -> Result<(ImageSurface, Context), Error> {
    let surface = ImageSurface::create(Format::ARgb32, width, height)?;
    let context = Context::new(&surface)?;
    context.set_color(WHITE);
    context.paint()?;
    Ok((surface, context))
}

/// Draws a title centered horizontally at the given height.
pub(crate) fn draw_title(
    context: &Context,
    title: &str,
    center_x: f64,
    top: f64,
    size: f64,
) -> Result<(), Error> {
    context.set_color(BLACK);
    context.set_font(FontWeight::Normal, size);
    context.show_text_align(title, (center_x, top), (0.5, 1.0))?;
    Ok(())
}

/// Draws the placeholder for a shape missing from the catalog: a red cross with the missing id
/// beneath it.
pub(crate) fn draw_placeholder(
    context: &Context,
    viewport: &Viewport,
    center: GraphPoint<f64>,
    scale: f64,
    id: &str,
    font_size: f64,
) -> Result<(), Error> {
    let CanvasPoint(left, top) = viewport.to_canvas(center.offset(GraphPoint(-scale, scale)));
    let CanvasPoint(right, bottom) = viewport.to_canvas(center.offset(GraphPoint(scale, -scale)));

    context.set_color(RED);
    context.move_to(left, top);
    context.line_to(right, bottom);
    context.move_to(right, top);
    context.line_to(left, bottom);
    context.stroke()?;

    let x = viewport.x_to_canvas(center.0);
    context.set_font(FontWeight::Normal, font_size);
    context.show_text_align(id, (x, bottom + font_size * 0.5), (0.5, 1.0))?;
    Ok(())
}

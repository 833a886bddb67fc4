//! Drawing scene figures.
//!
//! A [`Figure`] is drawn as a title band followed by a grid of panels, two panels per row. Each
//! panel lays its terms out in a [`GlyphGrid`] and draws every term as the Lissajous curve of its
//! category, with the term's label to its right and its sign above it.

use cairo::{Context, Error, FontWeight, ImageSurface};
use lastik_scene::{Figure, Panel};
use lastik_terms::Term;
use rayon::prelude::*;
use tracing::warn;
use super::{
    catalog::lookup,
    curve::Curve,
    draw::{blank_canvas, draw_placeholder, draw_title, tint_color, ContextExt, RED},
    layout::GlyphGrid,
    opts::RenderOptions,
    point::{CanvasPoint, GraphPoint},
    text_align::ShowTextAlign,
    viewport::Viewport,
};

/// The number of panels in each row of a figure.
pub const PANEL_COLUMNS: usize = 2;

/// Returns the canvas region of each of `n` panels: `(top left corner, size)`.
///
/// Panels are laid out row by row below a title band of height `title_height`. There are always
/// at least two rows, so that figures with three or four panels share the same layout.
pub fn panel_regions(
    n: usize,
    figure_size: CanvasPoint<u16>,
    title_height: f64,
) -> Vec<(CanvasPoint<f64>, CanvasPoint<f64>)> {
    let rows = ((n + PANEL_COLUMNS - 1) / PANEL_COLUMNS).max(2);
    let width = figure_size.0 as f64 / PANEL_COLUMNS as f64;
    let height = (figure_size.1 as f64 - title_height) / rows as f64;

    (0..n)
        .map(|i| {
            let (row, col) = (i / PANEL_COLUMNS, i % PANEL_COLUMNS);
            (
                CanvasPoint(width * col as f64, title_height + height * row as f64),
                CanvasPoint(width, height),
            )
        })
        .collect()
}

/// Draws the given figure to a new [`ImageSurface`].
///
/// The categories of any terms with no shape in the catalog are appended to `misses`, once each.
pub fn draw_figure(
    figure: &Figure,
    options: &RenderOptions,
    misses: &mut Vec<String>,
) -> Result<ImageSurface, Error> {
    let (surface, context) = blank_canvas(
        options.figure_size.0 as i32,
        options.figure_size.1 as i32,
    )?;

    let title_height = options.title_font_size * 2.0;
    draw_title(
        &context,
        &figure.title,
        options.figure_size.0 as f64 / 2.0,
        options.title_font_size * 0.5,
        options.title_font_size,
    )?;

    let regions = panel_regions(figure.panels.len(), options.figure_size, title_height);
    for (panel, (origin, size)) in figure.panels.iter().zip(regions) {
        draw_panel(&context, panel, origin, size, options, misses)?;
    }

    Ok(surface)
}

/// Draws one panel in the given canvas region.
///
/// A panel with no terms only shows its title.
pub fn draw_panel(
    context: &Context,
    panel: &Panel,
    origin: CanvasPoint<f64>,
    size: CanvasPoint<f64>,
    options: &RenderOptions,
    misses: &mut Vec<String>,
) -> Result<(), Error> {
    let title_height = options.panel_font_size * 2.0;
    draw_title(
        context,
        &panel.title,
        origin.0 + size.0 / 2.0,
        origin.1 + options.panel_font_size * 0.5,
        options.panel_font_size,
    )?;

    let grid = GlyphGrid::for_len(panel.molecule.len());
    if grid.is_empty() {
        return Ok(());
    }

    let viewport = Viewport::new(
        CanvasPoint(origin.0, origin.1 + title_height),
        CanvasPoint(size.0, size.1 - title_height),
        GraphPoint(0.0, 0.0),
        grid.extent(options.glyph_spacing),
    ).equal_aspect();
    let centers = grid.positions(options.glyph_spacing);

    // sampling is independent per glyph; drawing must stay in order
    let curves = panel.molecule.terms().par_iter()
        .zip(&centers)
        .map(|(term, center)| {
            lookup(term.category.as_str())
                .map(|recipe| Curve::from(recipe).sample(options.samples, options.glyph_scale, *center))
        })
        .collect::<Vec<_>>();

    for ((term, center), curve) in panel.molecule.iter().zip(&centers).zip(curves) {
        match curve {
            Some(points) => {
                context.set_color(tint_color(panel.tint));
                context.set_line_width(options.line_width);
                context.stroke_polyline(&viewport, &points)?;
            },
            None => {
                warn!(category = %term.category, label = %term.label, "no shape for category");
                if !misses.iter().any(|miss| miss == term.category.as_str()) {
                    misses.push(term.category.to_string());
                }

                context.set_line_width(options.line_width);
                draw_placeholder(
                    context,
                    &viewport,
                    *center,
                    options.glyph_scale,
                    term.category.as_str(),
                    options.label_font_size * 0.75,
                )?;
            },
        }

        draw_glyph_text(context, &viewport, term, *center, panel, options)?;
    }

    Ok(())
}

/// Draws the label to the right of a glyph and the sign above it.
fn draw_glyph_text(
    context: &Context,
    viewport: &Viewport,
    term: &Term,
    center: GraphPoint<f64>,
    panel: &Panel,
    options: &RenderOptions,
) -> Result<(), Error> {
    let scale = options.glyph_scale;

    let label_at = viewport.to_canvas(center.offset(GraphPoint(scale * 1.2, 0.0)));
    context.set_color(tint_color(panel.tint));
    context.set_font(FontWeight::Bold, options.label_font_size);
    context.show_text_align(&term.label, (label_at.0, label_at.1), (0.0, 0.5))?;

    let sign_at = viewport.to_canvas(center.offset(GraphPoint(0.0, scale * 1.5)));
    context.set_color(RED);
    context.set_font(FontWeight::Bold, options.sign_font_size);
    context.show_text_align(&term.sign.symbol().to_string(), (sign_at.0, sign_at.1), (0.5, 0.0))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use lastik_scene::Tint;
    use lastik_terms::{classify::DOUBLE_3, Molecule, Sign};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn four_panels_fill_a_two_by_two_grid() {
        let regions = panel_regions(4, CanvasPoint(1600, 1680), 80.0);
        assert_eq!(regions, [
            (CanvasPoint(0.0, 80.0), CanvasPoint(800.0, 800.0)),
            (CanvasPoint(800.0, 80.0), CanvasPoint(800.0, 800.0)),
            (CanvasPoint(0.0, 880.0), CanvasPoint(800.0, 800.0)),
            (CanvasPoint(800.0, 880.0), CanvasPoint(800.0, 800.0)),
        ]);
    }

    #[test]
    fn three_panels_leave_the_last_cell_empty() {
        let regions = panel_regions(3, CanvasPoint(1600, 1680), 80.0);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[2], (CanvasPoint(0.0, 880.0), CanvasPoint(800.0, 800.0)));
    }

    #[test]
    fn extra_panels_add_rows() {
        let regions = panel_regions(5, CanvasPoint(1000, 1500), 0.0);
        assert_eq!(regions[4], (CanvasPoint(0.0, 1000.0), CanvasPoint(500.0, 500.0)));
    }

    #[test]
    fn empty_panel_is_drawn_blank() {
        let figure = Figure {
            title: "Analysis scene: T = A - A".to_string(),
            name: "T".to_string(),
            panels: vec![
                Panel::new("Total remaining soup", Molecule::from(vec![
                    Term::new(DOUBLE_3, "ae", Sign::Positive),
                    Term::new(DOUBLE_3, "ae", Sign::Negative),
                ]), Tint::Soup),
                Panel::new("Final result: T", Molecule::new(), Tint::Result),
            ],
        };
        let options = RenderOptions::default().figure_size(400, 420).samples(50);

        let mut misses = Vec::new();
        let surface = draw_figure(&figure, &options, &mut misses).unwrap();
        assert!(misses.is_empty());
        assert_eq!((surface.width(), surface.height()), (400, 420));
    }
}

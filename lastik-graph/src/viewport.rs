use super::point::{CanvasPoint, GraphPoint};

/// A rectangular region of the canvas showing a region of graph space.
///
/// A figure is made of several viewports, one per panel, each with its own graph coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// The top left corner of the region, in canvas units.
    pub origin: CanvasPoint<f64>,

    /// The width and height of the region, in canvas units.
    pub size: CanvasPoint<f64>,

    /// The `(x, y)` point shown at the center of the region.
    pub center: GraphPoint<f64>,

    /// The distance, in graph units, from the center of the region to its edges.
    pub scale: GraphPoint<f64>,
}

impl Viewport {
    /// Creates a viewport showing `center ± scale` in the given canvas region.
    pub fn new(
        origin: CanvasPoint<f64>,
        size: CanvasPoint<f64>,
        center: GraphPoint<f64>,
        scale: GraphPoint<f64>,
    ) -> Viewport {
        Viewport { origin, size, center, scale }
    }

    /// Widens one axis of the viewport so that a graph unit covers the same number of pixels
    /// horizontally and vertically. The requested region stays fully visible.
    pub fn equal_aspect(mut self) -> Viewport {
        let per_unit = (self.size.0 / (self.scale.0 * 2.0)).min(self.size.1 / (self.scale.1 * 2.0));
        self.scale = GraphPoint(
            self.size.0 / (per_unit * 2.0),
            self.size.1 / (per_unit * 2.0),
        );
        self
    }

    /// Returns the number of pixels covered by one horizontal graph unit.
    pub fn pixels_per_unit(&self) -> f64 {
        self.size.0 / (self.scale.0 * 2.0)
    }

    /// Converts an x-value in **graph** space to an x-value in **canvas** space.
    pub(crate) fn x_to_canvas(&self, x: f64) -> f64 {
        let graph_space_range = self.scale.0 * 2.0;

        // 0.0 is the left edge of the region, 1.0 the right edge
        let normalized = (x - self.center.0) / graph_space_range + 0.5;
        self.origin.0 + normalized * self.size.0
    }

    /// Converts a y-value in **graph** space to a y-value in **canvas** space.
    pub(crate) fn y_to_canvas(&self, y: f64) -> f64 {
        let graph_space_range = self.scale.1 * 2.0;

        // flipped: 0.0 is the top edge of the region, 1.0 the bottom edge
        let normalized = 0.5 - (y - self.center.1) / graph_space_range;
        self.origin.1 + normalized * self.size.1
    }

    /// Converts a point in **graph** space to **canvas** space.
    pub fn to_canvas(&self, point: GraphPoint<f64>) -> CanvasPoint<f64> {
        CanvasPoint(
            self.x_to_canvas(point.0),
            self.y_to_canvas(point.1),
        )
    }

    /// Converts a point in **canvas** space to **graph** space.
    pub fn to_graph(&self, point: CanvasPoint<f64>) -> GraphPoint<f64> {
        let normalized_x = (point.0 - self.origin.0) / self.size.0;
        let normalized_y = 1.0 - (point.1 - self.origin.1) / self.size.1;
        GraphPoint(
            normalized_x * self.scale.0 * 2.0 + self.center.0 - self.scale.0,
            normalized_y * self.scale.1 * 2.0 + self.center.1 - self.scale.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(
            CanvasPoint(800.0, 50.0),
            CanvasPoint(465.0, 917.0),
            GraphPoint(-3.0, 2.41),
            GraphPoint(3.59, 5.69),
        )
    }

    /// The edges of the graph region land on the edges of the canvas region.
    #[test]
    fn graph_to_canvas() {
        let viewport = viewport();

        assert_float_absolute_eq!(viewport.x_to_canvas(-3.0 - 3.59), 800.0, 1e-9);
        assert_float_absolute_eq!(viewport.x_to_canvas(-3.0 + 3.59), 800.0 + 465.0, 1e-9);
        assert_float_absolute_eq!(viewport.y_to_canvas(2.41 + 5.69), 50.0, 1e-9);
        assert_float_absolute_eq!(viewport.y_to_canvas(2.41 - 5.69), 50.0 + 917.0, 1e-9);
    }

    #[test]
    fn canvas_to_graph() {
        let viewport = viewport();
        let point = GraphPoint(-1.25, 4.0);
        let back = viewport.to_graph(viewport.to_canvas(point));

        assert_float_absolute_eq!(back.0, point.0, 1e-9);
        assert_float_absolute_eq!(back.1, point.1, 1e-9);
    }

    #[test]
    fn equal_aspect_keeps_the_region_visible() {
        // a 2x1 canvas region asked to show a square graph region
        let viewport = Viewport::new(
            CanvasPoint(0.0, 0.0),
            CanvasPoint(200.0, 100.0),
            GraphPoint(0.0, 0.0),
            GraphPoint(3.0, 3.0),
        ).equal_aspect();

        assert_float_absolute_eq!(viewport.scale.0, 6.0, 1e-9);
        assert_float_absolute_eq!(viewport.scale.1, 3.0, 1e-9);

        let per_unit_x = viewport.size.0 / (viewport.scale.0 * 2.0);
        let per_unit_y = viewport.size.1 / (viewport.scale.1 * 2.0);
        assert_float_absolute_eq!(per_unit_x, per_unit_y, 1e-9);
        assert_float_absolute_eq!(viewport.pixels_per_unit(), per_unit_x, 1e-9);
    }
}

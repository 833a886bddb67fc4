use super::point::GraphPoint;

/// The grid of glyph positions used to lay out the terms of a panel.
///
/// A panel of `n` terms uses `ceil(sqrt(n))` columns and as many rows as needed, filled row by
/// row from the top. The grid is centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    /// The number of columns.
    pub cols: usize,

    /// The number of rows.
    pub rows: usize,
}

impl GlyphGrid {
    /// Returns the grid for `n` glyphs.
    pub fn for_len(n: usize) -> GlyphGrid {
        if n == 0 {
            return GlyphGrid { cols: 0, rows: 0 };
        }

        let cols = if n > 1 { (n as f64).sqrt().ceil() as usize } else { 1 };
        let rows = (n + cols - 1) / cols;
        GlyphGrid { cols, rows }
    }

    /// Returns true if the grid holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.cols == 0
    }

    /// Returns the center of every cell of the grid, row by row from the top, for the given
    /// spacing between neighboring cells.
    pub fn positions(&self, spacing: f64) -> Vec<GraphPoint<f64>> {
        let left = -spacing * (self.cols as f64 - 1.0) / 2.0;
        let top = spacing * (self.rows as f64 - 1.0) / 2.0;

        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| GraphPoint(left + spacing * col as f64, top - spacing * row as f64))
            .collect()
    }

    /// Returns the half width and half height of the graph region that shows the whole grid.
    pub fn extent(&self, spacing: f64) -> GraphPoint<f64> {
        GraphPoint(
            self.cols as f64 * spacing / 1.5,
            self.rows as f64 * spacing / 1.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn grid_sizes() {
        let sizes = [0, 1, 2, 3, 4, 5, 10, 12]
            .map(GlyphGrid::for_len)
            .map(|grid| (grid.cols, grid.rows));
        assert_eq!(sizes, [(0, 0), (1, 1), (2, 1), (2, 2), (2, 2), (3, 2), (4, 3), (4, 3)]);
    }

    #[test]
    fn positions_fill_rows_from_the_top() {
        let positions = GlyphGrid::for_len(3).positions(3.0);
        assert_eq!(positions, [
            GraphPoint(-1.5, 1.5),
            GraphPoint(1.5, 1.5),
            GraphPoint(-1.5, -1.5),
            GraphPoint(1.5, -1.5),
        ]);
    }

    #[test]
    fn single_glyph_is_centered() {
        let grid = GlyphGrid::for_len(1);
        assert_eq!(grid.positions(3.0), [GraphPoint(0.0, 0.0)]);
        assert_eq!(grid.extent(3.0), GraphPoint(2.0, 2.0));
    }

    #[test]
    fn empty_grid() {
        let grid = GlyphGrid::for_len(0);
        assert!(grid.is_empty());
        assert!(grid.positions(3.0).is_empty());
    }
}

use cairo::{Context, Error, TextExtents};

/// A trait to add the `show_text_align` family of methods to the [`Context`] type.
pub trait ShowTextAlign {
    /// Shows the given text at the given `(x, y)` position, with the given alignment.
    ///
    /// By default, text is rendered with the bottom left corner of the text at the given `(x, y)`
    /// point. The alignment point is a pair of `(x, y)` values, each between `0.0` and `1.0`,
    /// indicating the horizontal and vertical alignment of the text, respectively. `(0.0, 0.0)`
    /// aligns the bottom left corner of the text to the point and `(0.5, 0.5)` centers the text.
    ///
    /// Returns the extents of the drawn text.
    fn show_text_align(
        &self,
        text: &str,
        point: (f64, f64),
        align: (f64, f64),
    ) -> Result<TextExtents, Error>;

    /// Shows each line of the given text centered on the given point, stacking the lines
    /// vertically around it.
    fn show_lines_centered(
        &self,
        text: &str,
        point: (f64, f64),
    ) -> Result<(), Error>;
}

impl ShowTextAlign for Context {
    fn show_text_align(
        &self,
        text: &str,
        (x, y): (f64, f64),
        align: (f64, f64),
    ) -> Result<TextExtents, Error> {
        let extents = self.text_extents(text)?;
        let x = x - extents.width() * align.0;
        let y = y + extents.height() * align.1;
        self.move_to(x, y);
        self.show_text(text)?;
        Ok(extents)
    }

    fn show_lines_centered(
        &self,
        text: &str,
        (x, y): (f64, f64),
    ) -> Result<(), Error> {
        let line_height = self.font_extents()?.height();
        let lines = text.lines().collect::<Vec<_>>();
        let top = y - line_height * (lines.len() as f64 - 1.0) / 2.0;

        for (i, line) in lines.iter().enumerate() {
            self.show_text_align(line, (x, top + line_height * i as f64), (0.5, 0.5))?;
        }

        Ok(())
    }
}

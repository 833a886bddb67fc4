//! A single Lissajous curve with adjustable parameters.

use cairo::{Error, ImageSurface};
use std::{fmt, num::ParseFloatError, ops::RangeInclusive};
use super::{
    curve::Curve,
    draw::{blank_canvas, draw_title, ContextExt, DARK_ORANGE},
    opts::RenderOptions,
    point::{CanvasPoint, GraphPoint},
    viewport::Viewport,
};

/// The region of graph space shown by the explorer, as `(half width, half height)`.
pub const EXPLORER_EXTENT: GraphPoint<f64> = GraphPoint(1.2, 1.7);

/// The distance between two grid lines of the explorer, in graph units.
const GRID_SPACING: f64 = 0.5;

/// An error parsing the parameters of a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseCurveError {
    /// One of the values is not a number.
    InvalidNumber {
        /// The name of the parameter.
        name: &'static str,

        /// The text that failed to parse.
        text: String,

        /// The underlying error.
        source: ParseFloatError,
    },

    /// One of the values is infinite or not a number.
    NotFinite {
        /// The name of the parameter.
        name: &'static str,
    },

    /// One of the values lies outside the range of its parameter.
    OutOfRange {
        /// The name of the parameter.
        name: &'static str,

        /// The value that was given.
        value: f64,
    },

    /// More than five values were given.
    TooManyValues(usize),
}

impl fmt::Display for ParseCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCurveError::InvalidNumber { name, text, source } => {
                write!(f, "invalid value `{}` for `{}`: {}", text, name, source)
            },
            ParseCurveError::NotFinite { name } => {
                write!(f, "`{}` must be a finite number", name)
            },
            ParseCurveError::OutOfRange { name, value } => {
                let range = PARAMETERS
                    .iter()
                    .position(|parameter| parameter == name)
                    .map_or(FREQUENCY_RANGE, |i| RANGES[i].clone());
                write!(
                    f,
                    "`{}` must be between {} and {}, found {}",
                    name, range.start(), range.end(), value,
                )
            },
            ParseCurveError::TooManyValues(count) => {
                write!(f, "expected at most 5 values, found {}", count)
            },
        }
    }
}

impl std::error::Error for ParseCurveError {}

/// The names of the explorer's parameters, in input order.
pub const PARAMETERS: [&str; 5] = ["a", "b", "phase_pi", "t_start_pi", "t_end_pi"];

/// The allowed values of the frequencies `a` and `b`.
pub const FREQUENCY_RANGE: RangeInclusive<f64> = -5.0..=5.0;

/// The allowed values of the phase and of both ends of the `t` range, in multiples of π.
pub const TURN_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// The allowed values of each parameter, in input order.
const RANGES: [RangeInclusive<f64>; 5] =
    [FREQUENCY_RANGE, FREQUENCY_RANGE, TURN_RANGE, TURN_RANGE, TURN_RANGE];

/// Parses whitespace-separated curve parameters `a b phase_pi t_start_pi t_end_pi`.
///
/// Any parameters left out take their values from `base`. Every given value must be finite and
/// lie in the range of its parameter: [`FREQUENCY_RANGE`] for `a` and `b`, [`TURN_RANGE`] for the
/// rest.
pub fn parse_curve(input: &str, base: Curve) -> Result<Curve, ParseCurveError> {
    let words = input.split_whitespace().collect::<Vec<_>>();
    if words.len() > PARAMETERS.len() {
        return Err(ParseCurveError::TooManyValues(words.len()));
    }

    let mut values = [base.a, base.b, base.phase_pi, base.t_range_pi.0, base.t_range_pi.1];
    for (i, word) in words.iter().enumerate() {
        let name = PARAMETERS[i];
        let value: f64 = word.parse().map_err(|source| ParseCurveError::InvalidNumber {
            name,
            text: word.to_string(),
            source,
        })?;

        if !value.is_finite() {
            return Err(ParseCurveError::NotFinite { name });
        }
        if !RANGES[i].contains(&value) {
            return Err(ParseCurveError::OutOfRange { name, value });
        }
        values[i] = value;
    }

    let [a, b, phase_pi, t_start_pi, t_end_pi] = values;
    Ok(Curve {
        a,
        b,
        phase_pi,
        t_range_pi: (t_start_pi, t_end_pi),
    })
}

/// The curve explorer: one curve drawn on a dotted grid, titled with its parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Explorer {
    /// The curve to draw.
    pub curve: Curve,

    /// The rendering options.
    pub options: RenderOptions,
}

impl Explorer {
    /// Creates an explorer for the given curve with the default options.
    pub fn new(curve: Curve) -> Explorer {
        Explorer {
            curve,
            options: RenderOptions::default(),
        }
    }

    /// Returns the title describing the curve, such as
    /// `a/b = 2.00:1.00, φ = 1.00π, t=[0.00π, 2.00π]`.
    pub fn title(&self) -> String {
        let Curve { a, b, phase_pi, t_range_pi: (start, end) } = self.curve;
        format!("a/b = {:.2}:{:.2}, φ = {:.2}π, t=[{:.2}π, {:.2}π]", a, b, phase_pi, start, end)
    }

    /// Draws the explorer to a new [`ImageSurface`].
    ///
    /// If the range of `t` is empty, only the title and grid are drawn.
    pub fn draw(&self) -> Result<ImageSurface, Error> {
        let size = CanvasPoint(
            self.options.explorer_size.0 as f64,
            self.options.explorer_size.1 as f64,
        );
        let (surface, context) = blank_canvas(size.0 as i32, size.1 as i32)?;

        let title_height = self.options.panel_font_size * 2.0;
        draw_title(&context, &self.title(), size.0 / 2.0, self.options.panel_font_size * 0.5, self.options.panel_font_size)?;

        let viewport = Viewport::new(
            CanvasPoint(0.0, title_height),
            CanvasPoint(size.0, size.1 - title_height),
            GraphPoint(0.0, 0.0),
            EXPLORER_EXTENT,
        ).equal_aspect();
        self.draw_grid(&context, &viewport)?;

        let points = self.curve.sample(self.options.samples, 1.0, GraphPoint(0.0, 0.0));
        if !points.is_empty() {
            context.set_color(DARK_ORANGE);
            context.set_line_width(self.options.line_width * 0.75);
            context.stroke_polyline(&viewport, &points)?;
        }

        Ok(surface)
    }

    /// Draws dotted grid lines every [`GRID_SPACING`] units.
    fn draw_grid(&self, context: &cairo::Context, viewport: &Viewport) -> Result<(), Error> {
        context.set_source_rgba(0.0, 0.0, 0.0, 0.6);
        context.set_line_width(1.0);
        context.set_dash(&[2.0, 4.0], 0.0);

        let steps = |extent: f64| {
            let n = (extent / GRID_SPACING).floor() as i32;
            (-n..=n).map(|i| i as f64 * GRID_SPACING)
        };

        for x in steps(viewport.scale.0) {
            context.stroke_polyline(viewport, &[GraphPoint(x, -viewport.scale.1), GraphPoint(x, viewport.scale.1)])?;
        }
        for y in steps(viewport.scale.1) {
            context.stroke_polyline(viewport, &[GraphPoint(-viewport.scale.0, y), GraphPoint(viewport.scale.0, y)])?;
        }

        context.set_dash(&[], 0.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_title() {
        assert_eq!(Explorer::default().title(), "a/b = 2.00:1.00, φ = 1.00π, t=[0.00π, 2.00π]");
    }

    #[test]
    fn partial_input_keeps_the_rest() {
        let curve = parse_curve("3 -1.5", Curve::default()).unwrap();
        assert_eq!(curve, Curve {
            a: 3.0,
            b: -1.5,
            phase_pi: 1.0,
            t_range_pi: (0.0, 2.0),
        });

        let curve = parse_curve("1 1 0.5 0.2 1.8", curve).unwrap();
        assert_eq!(Explorer::new(curve).title(), "a/b = 1.00:1.00, φ = 0.50π, t=[0.20π, 1.80π]");
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(
            parse_curve("2 x", Curve::default()),
            Err(ParseCurveError::InvalidNumber { name: "b", .. }),
        ));
        assert_eq!(
            parse_curve("1 2 3 4 5 6", Curve::default()),
            Err(ParseCurveError::TooManyValues(6)),
        );
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(
            parse_curve("2 1 1 0 NaN", Curve::default()),
            Err(ParseCurveError::NotFinite { name: "t_end_pi" }),
        );
        assert_eq!(
            parse_curve("inf", Curve::default()),
            Err(ParseCurveError::NotFinite { name: "a" }),
        );
        assert_eq!(
            parse_curve("2 -infinity", Curve::default()),
            Err(ParseCurveError::NotFinite { name: "b" }),
        );
    }

    #[test]
    fn values_outside_their_range() {
        assert_eq!(
            parse_curve("5.5", Curve::default()),
            Err(ParseCurveError::OutOfRange { name: "a", value: 5.5 }),
        );
        assert_eq!(
            parse_curve("2 1 -0.5", Curve::default()),
            Err(ParseCurveError::OutOfRange { name: "phase_pi", value: -0.5 }),
        );
        assert_eq!(
            parse_curve("2 1 1 0 2.5", Curve::default()).unwrap_err().to_string(),
            "`t_end_pi` must be between 0 and 2, found 2.5",
        );

        // both ends of every range are allowed
        let curve = parse_curve("-5 5 2 0 2", Curve::default()).unwrap();
        assert_eq!(curve, Curve {
            a: -5.0,
            b: 5.0,
            phase_pi: 2.0,
            t_range_pi: (0.0, 2.0),
        });
    }

    #[test]
    fn reversed_range_draws_no_curve() {
        let curve = parse_curve("2 1 1 1.5 0.5", Curve::default()).unwrap();
        assert!(curve.is_empty());
    }
}

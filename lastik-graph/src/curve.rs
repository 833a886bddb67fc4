use crate::{catalog::Recipe, point::GraphPoint};
use std::{cmp::Ordering, f64::consts::PI};

/// The default range of `t`, one full turn, in multiples of π.
pub const FULL_TURN_PI: (f64, f64) = (0.0, 2.0);

/// A Lissajous curve ready to be sampled.
///
/// The curve is `x = scale * sin(a t + phase π)`, `y = scale * 1.5 * sin(b t)`, traced for `t` in
/// `[t_start π, t_end π]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    /// The horizontal frequency.
    pub a: f64,

    /// The vertical frequency.
    pub b: f64,

    /// The phase shift of the horizontal component, in multiples of π.
    pub phase_pi: f64,

    /// The range of `t`, in multiples of π.
    pub t_range_pi: (f64, f64),
}

impl Default for Curve {
    fn default() -> Curve {
        Curve {
            a: 2.0,
            b: 1.0,
            phase_pi: 1.0,
            t_range_pi: FULL_TURN_PI,
        }
    }
}

impl From<&Recipe> for Curve {
    fn from(recipe: &Recipe) -> Curve {
        let (a, b) = recipe.frequencies();
        Curve {
            a,
            b,
            phase_pi: recipe.phase_pi,
            t_range_pi: recipe.t_range_pi.unwrap_or(FULL_TURN_PI),
        }
    }
}

impl Curve {
    /// Returns true if the range of `t` is empty, in which case there is nothing to draw.
    ///
    /// A range with a NaN end is empty.
    pub fn is_empty(&self) -> bool {
        self.t_range_pi.0.partial_cmp(&self.t_range_pi.1) != Some(Ordering::Less)
    }

    /// Returns the point of the curve at parameter `t`, before scaling.
    pub fn at(&self, t: f64) -> GraphPoint<f64> {
        GraphPoint(
            (self.a * t + self.phase_pi * PI).sin(),
            1.5 * (self.b * t).sin(),
        )
    }

    /// Samples `samples` evenly spaced points of the curve, including both ends of the range,
    /// scaled by `scale` and centered on `center`.
    ///
    /// Returns no points if the range is empty.
    pub fn sample(&self, samples: usize, scale: f64, center: GraphPoint<f64>) -> Vec<GraphPoint<f64>> {
        if self.is_empty() || samples == 0 {
            return Vec::new();
        }

        let start = self.t_range_pi.0 * PI;
        let end = self.t_range_pi.1 * PI;
        let step = if samples > 1 { (end - start) / (samples - 1) as f64 } else { 0.0 };

        (0..samples)
            .map(|i| {
                let GraphPoint(x, y) = self.at(start + step * i as f64);
                GraphPoint(scale * x, scale * y).offset(center)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::catalog::lookup;
    use super::*;

    #[test]
    fn circle() {
        // single_1 is a circle stretched vertically
        let curve = Curve::from(lookup("single_1").unwrap());
        let points = curve.sample(400, 1.0, GraphPoint(0.0, 0.0));
        assert_eq!(points.len(), 400);

        for GraphPoint(x, y) in points {
            assert_float_absolute_eq!(x * x + (y / 1.5) * (y / 1.5), 1.0, 1e-9);
        }
    }

    #[test]
    fn endpoints() {
        let curve = Curve::from(lookup("triple_2").unwrap());
        let points = curve.sample(400, 0.8, GraphPoint(3.0, -1.5));
        let first = points[0];
        let last = points[points.len() - 1];

        let t0 = 0.2 * PI;
        let t1 = 1.8 * PI;
        assert_float_absolute_eq!(first.0, 3.0 + 0.8 * (3.33 * t0 + PI).sin(), 1e-9);
        assert_float_absolute_eq!(first.1, -1.5 + 0.8 * 1.5 * t0.sin(), 1e-9);
        assert_float_absolute_eq!(last.0, 3.0 + 0.8 * (3.33 * t1 + PI).sin(), 1e-9);
        assert_float_absolute_eq!(last.1, -1.5 + 0.8 * 1.5 * t1.sin(), 1e-9);
    }

    #[test]
    fn phase_is_applied() {
        let curve = Curve::from(lookup("single_2").unwrap());
        let GraphPoint(x, y) = curve.at(0.0);

        // sin(1.5π) = -1
        assert_float_absolute_eq!(x, -1.0, 1e-12);
        assert_float_absolute_eq!(y, 0.0, 1e-12);
    }

    #[test]
    fn empty_range() {
        let curve = Curve {
            t_range_pi: (1.0, 1.0),
            ..Curve::default()
        };
        assert!(curve.is_empty());
        assert!(curve.sample(400, 1.0, GraphPoint(0.0, 0.0)).is_empty());

        let reversed = Curve {
            t_range_pi: (1.5, 0.5),
            ..Curve::default()
        };
        assert!(reversed.sample(400, 1.0, GraphPoint(0.0, 0.0)).is_empty());

        let undefined = Curve {
            t_range_pi: (0.0, f64::NAN),
            ..Curve::default()
        };
        assert!(undefined.is_empty());
        assert!(undefined.sample(400, 1.0, GraphPoint(0.0, 0.0)).is_empty());
    }
}

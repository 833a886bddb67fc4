//! The shape catalog, mapping each category to the Lissajous curve that draws it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The parameters of a Lissajous curve `x = sin(a t + phase π)`, `y = 1.5 sin(b t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recipe {
    /// The horizontal frequency.
    pub a: f64,

    /// The vertical frequency.
    pub b: f64,

    /// The phase shift of the horizontal component, in multiples of π.
    pub phase_pi: f64,

    /// The range of the parameter `t`, in multiples of π.
    ///
    /// When absent, the curve is traced over one full turn, `(0, 2)`.
    pub t_range_pi: Option<(f64, f64)>,

    /// Whether to negate `a` before tracing.
    pub negate_a: bool,

    /// Whether to negate `b` before tracing.
    pub negate_b: bool,
}

impl Recipe {
    /// Creates a recipe traced over a full turn.
    pub const fn new(a: f64, b: f64, phase_pi: f64) -> Recipe {
        Recipe {
            a,
            b,
            phase_pi,
            t_range_pi: None,
            negate_a: false,
            negate_b: false,
        }
    }

    /// Restricts the range of `t`. Returns an updated [`Recipe`] for chaining.
    pub const fn t_range_pi(mut self, start: f64, end: f64) -> Recipe {
        self.t_range_pi = Some((start, end));
        self
    }

    /// Negates `a` and / or `b` before tracing. Returns an updated [`Recipe`] for chaining.
    pub const fn negate(mut self, a: bool, b: bool) -> Recipe {
        self.negate_a = a;
        self.negate_b = b;
        self
    }

    /// Returns the `(a, b)` frequencies with the negation flags applied.
    pub fn frequencies(&self) -> (f64, f64) {
        let a = if self.negate_a { -self.a } else { self.a };
        let b = if self.negate_b { -self.b } else { self.b };
        (a, b)
    }
}

/// Every shape of the catalog, in display order.
pub const SHAPES: [(&str, Recipe); 15] = [
    ("single_1", Recipe::new(1.0, 1.0, 0.5)),
    ("single_2", Recipe::new(2.0, 1.0, 1.5)),
    ("single_3", Recipe::new(2.0, 1.0, 0.5)),
    ("single_4", Recipe::new(1.0, 1.0, 0.5)),

    ("double_1", Recipe::new(-1.49, 0.375, 0.0)),
    ("double_2", Recipe::new(1.49, 0.375, 0.0)),
    ("double_3", Recipe::new(2.0, 1.0, 1.0)),
    ("double_4", Recipe::new(1.0, 1.0, 0.5)),
    ("double_5", Recipe::new(-1.49, -0.375, 0.0)),
    ("double_6", Recipe::new(1.49, -0.375, 0.0)),

    ("triple_1", Recipe::new(2.0, 1.0, 1.0)),
    ("triple_2", Recipe::new(3.33, 1.0, 1.0).t_range_pi(0.2, 1.8)),
    ("triple_3", Recipe::new(3.33, 1.0, 0.0).t_range_pi(0.2, 1.8)),
    ("triple_4", Recipe::new(2.0, 1.0, 1.0)),

    ("lastik_complete", Recipe::new(3.0, 1.0, 0.5)),
];

/// The shape catalog, keyed by category.
pub static CATALOG: Lazy<HashMap<&'static str, Recipe>> = Lazy::new(|| SHAPES.into_iter().collect());

/// Returns the recipe for the given category, if the catalog has one.
pub fn lookup(id: &str) -> Option<&'static Recipe> {
    CATALOG.get(id)
}

#[cfg(test)]
mod tests {
    use lastik_terms::classify::{DOUBLE_1, DOUBLE_3, DOUBLE_6, SINGLE_5};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn every_shape_is_cataloged_once() {
        assert_eq!(CATALOG.len(), SHAPES.len());
    }

    #[test]
    fn lookups() {
        assert_eq!(lookup("double_1"), Some(&Recipe::new(-1.49, 0.375, 0.0)));
        assert_eq!(lookup("triple_2").and_then(|r| r.t_range_pi), Some((0.2, 1.8)));
        assert_eq!(lookup("lastik_complete").map(|r| r.a), Some(3.0));
        assert_eq!(lookup("quadruple_1"), None);
    }

    #[test]
    fn classification_results_are_drawable() {
        for category in [DOUBLE_1, DOUBLE_3, DOUBLE_6] {
            assert!(lookup(category.as_str()).is_some(), "{}", category);
        }

        // the vocabulary never produces `single_5`, but the classification table mentions it
        assert!(lookup(SINGLE_5.as_str()).is_none());
    }

    #[test]
    fn negation_flags() {
        let recipe = Recipe::new(2.0, 1.0, 0.0).negate(true, false);
        assert_eq!(recipe.frequencies(), (-2.0, 1.0));
        assert_eq!(Recipe::new(2.0, 1.0, 0.0).frequencies(), (2.0, 1.0));
    }
}

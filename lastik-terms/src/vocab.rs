//! The fixed vocabulary of input labels.
//!
//! The eight entries of the two input matrices are named `a` to `h`:
//!
//! ```text
//! | a b |   | e f |
//! | c d | x | g h |
//! ```
//!
//! Each label is drawn with a fixed single shape: the diagonal entries `a d e h` as a circle, `b f`
//! as a C, and `c g` as an inverted C.

use crate::{classify::{SINGLE_1, SINGLE_2, SINGLE_3}, term::Category};

/// The labels of the vocabulary, in matrix order.
pub const LABELS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

/// Returns the category of a vocabulary label, or [`None`] if the label is not in the vocabulary.
pub fn category_of(label: &str) -> Option<Category> {
    match label {
        "a" | "d" | "e" | "h" => Some(SINGLE_1),
        "b" | "f" => Some(SINGLE_2),
        "c" | "g" => Some(SINGLE_3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_a_category() {
        for label in LABELS {
            assert!(category_of(label).is_some(), "{} has no category", label);
        }
    }

    #[test]
    fn unknown_labels() {
        assert_eq!(category_of("i"), None);
        assert_eq!(category_of("ae"), None);
        assert_eq!(category_of(""), None);
    }
}

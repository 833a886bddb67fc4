//! Classification of cross terms.
//!
//! When two terms collide, the category of the resulting term is looked up from the unordered
//! pair of the input categories. Pairs with no entry fall back to a designated default category,
//! so classification never fails.

use crate::term::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const SINGLE_1: Category = Category::from_static("single_1");
pub const SINGLE_2: Category = Category::from_static("single_2");
pub const SINGLE_3: Category = Category::from_static("single_3");
pub const SINGLE_4: Category = Category::from_static("single_4");
pub const SINGLE_5: Category = Category::from_static("single_5");

pub const DOUBLE_1: Category = Category::from_static("double_1");
pub const DOUBLE_3: Category = Category::from_static("double_3");
pub const DOUBLE_6: Category = Category::from_static("double_6");

/// An unordered pair of categories.
///
/// `UnorderedPair::new(x, y)` and `UnorderedPair::new(y, x)` are equal and hash the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnorderedPair(Category, Category);

impl UnorderedPair {
    /// Creates a new unordered pair.
    pub fn new(a: Category, b: Category) -> UnorderedPair {
        if a <= b {
            UnorderedPair(a, b)
        } else {
            UnorderedPair(b, a)
        }
    }
}

/// A read-only table mapping unordered category pairs to the category of their product.
#[derive(Clone, Debug)]
pub struct Classification {
    rules: HashMap<UnorderedPair, Category>,
    fallback: Category,
}

impl Classification {
    /// Creates a table from the given rules, using `fallback` for every pair without a rule.
    ///
    /// If the same unordered pair is given more than once, the last rule wins.
    pub fn new(
        rules: impl IntoIterator<Item = ((Category, Category), Category)>,
        fallback: Category,
    ) -> Classification {
        Classification {
            rules: rules
                .into_iter()
                .map(|((a, b), out)| (UnorderedPair::new(a, b), out))
                .collect(),
            fallback,
        }
    }

    /// Returns the category of the product of two terms with the given categories.
    pub fn classify(&self, a: &Category, b: &Category) -> &Category {
        self.get(a, b).unwrap_or(&self.fallback)
    }

    /// Returns the rule for the given pair, or [`None`] if the pair is unclassified.
    pub fn get(&self, a: &Category, b: &Category) -> Option<&Category> {
        self.rules.get(&UnorderedPair::new(a.clone(), b.clone()))
    }

    /// Returns the category used for unclassified pairs.
    pub fn fallback(&self) -> &Category {
        &self.fallback
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The classification table used for the Strassen scenes.
///
/// Unclassified pairs fall back to [`DOUBLE_3`], the bow tie.
pub static STRASSEN: Lazy<Classification> = Lazy::new(|| Classification::new([
    // a*e, a*h, d*e, d*h, ...
    ((SINGLE_1, SINGLE_1), DOUBLE_3),

    // a*b, b*h
    ((SINGLE_1, SINGLE_2), DOUBLE_1),

    // a*c, c*e
    ((SINGLE_1, SINGLE_3), DOUBLE_1),

    // a*f
    ((SINGLE_1, SINGLE_4), DOUBLE_1),

    // a*g
    ((SINGLE_1, SINGLE_5), DOUBLE_1),

    // b*g
    ((SINGLE_2, SINGLE_5), DOUBLE_6),

    // c*f
    ((SINGLE_3, SINGLE_4), DOUBLE_6),
], DOUBLE_3));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_unordered() {
        assert_eq!(
            UnorderedPair::new(SINGLE_3, SINGLE_1),
            UnorderedPair::new(SINGLE_1, SINGLE_3),
        );
        assert_eq!(STRASSEN.classify(&SINGLE_2, &SINGLE_1), &DOUBLE_1);
        assert_eq!(STRASSEN.classify(&SINGLE_1, &SINGLE_2), &DOUBLE_1);
    }

    #[test]
    fn unknown_pair_falls_back() {
        assert_eq!(STRASSEN.get(&SINGLE_2, &SINGLE_3), None);
        assert_eq!(STRASSEN.classify(&SINGLE_2, &SINGLE_3), &DOUBLE_3);
        assert_eq!(
            STRASSEN.classify(&Category::new("mystery"), &Category::new("other")),
            STRASSEN.fallback(),
        );
    }

    #[test]
    fn strassen_rules() {
        assert_eq!(STRASSEN.len(), 7);
        assert_eq!(STRASSEN.classify(&SINGLE_1, &SINGLE_1), &DOUBLE_3);
        assert_eq!(STRASSEN.classify(&SINGLE_4, &SINGLE_3), &DOUBLE_6);
        assert_eq!(STRASSEN.classify(&SINGLE_5, &SINGLE_2), &DOUBLE_6);
    }

    #[test]
    fn custom_table() {
        let table = Classification::new(
            [((Category::new("k"), Category::new("k")), Category::new("kk"))],
            Category::new("none"),
        );
        assert_eq!(table.classify(&Category::new("k"), &Category::new("k")).as_str(), "kk");
        assert_eq!(table.classify(&Category::new("k"), &Category::new("j")).as_str(), "none");
    }
}

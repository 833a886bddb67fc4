use crate::{
    classify::{Classification, STRASSEN},
    collide::{collide_with, negate_signs},
    molecule::Molecule,
    term::Sign,
};
use std::fmt;

/// A product of molecules, such as `(a + d) * (e + h)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// The factors of the product, multiplied left to right.
    pub factors: Vec<Molecule>,
}

impl Product {
    /// Creates the product of two molecules.
    pub fn new(left: impl Into<Molecule>, right: impl Into<Molecule>) -> Product {
        Product {
            factors: vec![left.into(), right.into()],
        }
    }

    /// Creates a product from any number of factors.
    pub fn from_factors(factors: Vec<Molecule>) -> Product {
        Product { factors }
    }

    /// Expands the product with the [`STRASSEN`] classification table.
    pub fn expand(&self) -> Molecule {
        self.expand_with(&STRASSEN)
    }

    /// Expands the product by colliding its factors left to right.
    ///
    /// A product with a single factor expands to that factor. A product with no factors expands
    /// to the empty molecule.
    pub fn expand_with(&self, table: &Classification) -> Molecule {
        let mut factors = self.factors.iter();
        let Some(first) = factors.next() else {
            return Molecule::new();
        };

        factors.fold(first.clone(), |acc, factor| collide_with(table, &acc, factor))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                f.write_str(" * ")?;
            }
            write!(f, "({})", factor)?;
        }
        Ok(())
    }
}

/// A named product, added to or subtracted from a sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedProduct {
    /// The name of the product, such as `M1`.
    pub name: String,

    /// Whether the product is added or subtracted.
    pub sign: Sign,

    /// The product itself.
    pub product: Product,
}

impl SignedProduct {
    /// Creates a new signed product.
    pub fn new(name: impl Into<String>, sign: Sign, product: Product) -> SignedProduct {
        SignedProduct {
            name: name.into(),
            sign,
            product,
        }
    }

    /// Expands the product, negating the expansion if the product is subtracted.
    pub fn expand_with(&self, table: &Classification) -> Molecule {
        let expansion = self.product.expand_with(table);
        match self.sign {
            Sign::Positive => expansion,
            Sign::Negative => negate_signs(&expansion),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{classify::*, term::Term};
    use pretty_assertions::assert_eq;
    use super::*;

    fn single(category: crate::term::Category, label: &str) -> Molecule {
        Molecule::from(vec![Term::new(category, label, Sign::Positive)])
    }

    #[test]
    fn chained_product_concatenates_labels() {
        let product = Product::from_factors(vec![
            single(SINGLE_1, "a"),
            single(SINGLE_1, "e"),
            single(SINGLE_2, "b"),
        ]);
        let expansion = product.expand();

        assert_eq!(expansion.len(), 1);
        assert_eq!(expansion[0].label, "aeb");
        // double_3 * single_2 has no rule
        assert_eq!(expansion[0].category, DOUBLE_3);
    }

    #[test]
    fn degenerate_products() {
        assert_eq!(Product::from_factors(vec![]).expand(), Molecule::new());
        assert_eq!(Product::from_factors(vec![single(SINGLE_1, "a")]).expand(), single(SINGLE_1, "a"));
    }

    #[test]
    fn subtracted_product_is_negated() {
        let product = Product::new(single(SINGLE_1, "a"), single(SINGLE_1, "h"));
        let added = SignedProduct::new("M", Sign::Positive, product.clone());
        let subtracted = SignedProduct::new("M", Sign::Negative, product);

        assert_eq!(added.expand_with(&STRASSEN), Molecule::from(vec![Term::new(DOUBLE_3, "ah", Sign::Positive)]));
        assert_eq!(subtracted.expand_with(&STRASSEN), Molecule::from(vec![Term::new(DOUBLE_3, "ah", Sign::Negative)]));
    }

    #[test]
    fn display() {
        let product = Product::new(single(SINGLE_1, "a"), single(SINGLE_2, "f"));
        assert_eq!(product.to_string(), "(a[single_1]) * (f[single_2])");
    }
}

use std::{borrow::Cow, fmt, ops::Mul};

/// The sign of a [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the opposite sign.
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Returns the symbol used to display the sign.
    pub fn symbol(self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// The sign of a product: positive if both signs are equal.
impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The classification tag of a [`Term`].
///
/// A category is a key into a shape catalog: it chooses how the term is drawn, and carries no
/// arithmetic meaning. The set of categories is open, so a category may name a shape that no
/// catalog knows about.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(Cow<'static, str>);

impl Category {
    /// Creates a category from a static string. Usable in `const` contexts.
    pub const fn from_static(id: &'static str) -> Category {
        Category(Cow::Borrowed(id))
    }

    /// Creates a category from any string.
    pub fn new(id: impl Into<String>) -> Category {
        Category(Cow::Owned(id.into()))
    }

    /// Returns the identifier of the category.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Category {
    fn from(id: &'static str) -> Category {
        Category::from_static(id)
    }
}

impl From<String> for Category {
    fn from(id: String) -> Category {
        Category::new(id)
    }
}

/// A signed, labeled, categorized atom of a symbolic sum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    /// The classification tag of the term.
    pub category: Category,

    /// The symbol naming which input entries the term derives from, such as `a` or `ae`.
    ///
    /// The label is an opaque atom: labels are compared and concatenated, never evaluated.
    pub label: String,

    /// The sign of the term.
    pub sign: Sign,
}

impl Term {
    /// Creates a new term.
    pub fn new(category: impl Into<Category>, label: impl Into<String>, sign: Sign) -> Term {
        Term {
            category: category.into(),
            label: label.into(),
            sign,
        }
    }

    /// Returns true if this term and `other` are the same term with opposite signs.
    pub fn cancels(&self, other: &Term) -> bool {
        self.sign != other.sign
            && self.label == other.label
            && self.category == other.category
    }

    /// Returns a copy of this term with its sign flipped.
    pub fn negated(&self) -> Term {
        Term {
            sign: self.sign.flip(),
            ..self.clone()
        }
    }
}

/// Formats the term without its sign, as `label[category]`.
///
/// Use the alternate flag (`{:#}`) to prefix the sign.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.sign)?;
        }
        write!(f, "{}[{}]", self.label, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_product() {
        use Sign::*;
        assert_eq!(Positive * Positive, Positive);
        assert_eq!(Negative * Negative, Positive);
        assert_eq!(Positive * Negative, Negative);
        assert_eq!(Negative * Positive, Negative);
    }

    #[test]
    fn opposite_terms_cancel() {
        let t = Term::new("double_3", "ae", Sign::Positive);
        assert!(t.cancels(&t.negated()));
        assert!(!t.cancels(&t));
        assert!(!t.cancels(&Term::new("double_1", "ae", Sign::Negative)));
        assert!(!t.cancels(&Term::new("double_3", "ah", Sign::Negative)));
    }

    #[test]
    fn static_and_owned_categories_compare_equal() {
        assert_eq!(Category::from_static("single_1"), Category::new("single_1".to_string()));
    }

    #[test]
    fn display() {
        let t = Term::new("double_1", "af", Sign::Negative);
        assert_eq!(t.to_string(), "af[double_1]");
        assert_eq!(format!("{:#}", t), "-af[double_1]");
    }
}

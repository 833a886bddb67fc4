use crate::term::{Sign, Term};
use std::{fmt, ops::Deref};

/// An ordered collection of [`Term`]s.
///
/// A molecule is one operand of a [`collide`](crate::collide::collide), or the accumulated result of a sum of products.
/// Its order never changes the algebraic meaning of the sum, but it does decide the grid position
/// of each term when drawn, and which pairs [`cancel`](crate::cancel()) finds first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Molecule(Vec<Term>);

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Molecule {
        Molecule::default()
    }

    /// Appends a term to the end of the molecule.
    pub fn push(&mut self, term: Term) {
        self.0.push(term);
    }

    /// Returns a new molecule holding the terms of `self` followed by the terms of `other`.
    pub fn concat(&self, other: &[Term]) -> Molecule {
        self.0.iter().chain(other).cloned().collect()
    }

    /// Returns the terms of the molecule.
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Consumes the molecule, returning its terms.
    pub fn into_terms(self) -> Vec<Term> {
        self.0
    }
}

impl Deref for Molecule {
    type Target = [Term];

    fn deref(&self) -> &[Term] {
        &self.0
    }
}

impl AsRef<[Term]> for Molecule {
    fn as_ref(&self) -> &[Term] {
        &self.0
    }
}

impl From<Vec<Term>> for Molecule {
    fn from(terms: Vec<Term>) -> Molecule {
        Molecule(terms)
    }
}

impl FromIterator<Term> for Molecule {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Molecule {
        Molecule(iter.into_iter().collect())
    }
}

impl Extend<Term> for Molecule {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Molecule {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Molecule {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Formats the molecule as a sum, such as `af[double_1] - ah[double_3]`.
///
/// An empty molecule is formatted as `0`. The output can be read back by the notation parser as a
/// parenthesized group.
impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.0.iter();
        let Some(first) = terms.next() else {
            return f.write_str("0");
        };

        if first.sign == Sign::Negative {
            f.write_str("-")?;
        }
        write!(f, "{}", first)?;

        for term in terms {
            write!(f, " {} {}", term.sign, term)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::classify::{DOUBLE_1, DOUBLE_3};
    use super::*;

    #[test]
    fn display_as_sum() {
        let molecule = Molecule::from(vec![
            Term::new(DOUBLE_1, "af", Sign::Negative),
            Term::new(DOUBLE_3, "ah", Sign::Positive),
            Term::new(DOUBLE_3, "bh", Sign::Negative),
        ]);
        assert_eq!(molecule.to_string(), "-af[double_1] + ah[double_3] - bh[double_3]");
        assert_eq!(Molecule::new().to_string(), "0");
    }

    #[test]
    fn concat_keeps_order() {
        let left = Molecule::from(vec![Term::new(DOUBLE_1, "x", Sign::Positive)]);
        let right = Molecule::from(vec![Term::new(DOUBLE_1, "y", Sign::Negative)]);
        let both = left.concat(&right);

        assert_eq!(both.len(), 2);
        assert_eq!(both[0].label, "x");
        assert_eq!(both[1].label, "y");
    }
}

//! The syntax tree of term notation, and its lowering into molecules and products.

use lastik_error::Error;
use crate::{
    molecule::Molecule,
    product::{Product, SignedProduct},
    term::{Category, Sign, Term},
    vocab,
};
use std::ops::Range;
use super::error::{ExplicitCategory, UnknownLabel};

/// A single term: a label with an optional explicit category, such as `a` or `ae[double_3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The label of the term.
    pub label: String,

    /// The explicit category of the term, if one was given in brackets.
    pub category: Option<String>,

    /// The region of the source code that this atom was parsed from.
    pub span: Range<usize>,
}

impl Atom {
    /// Resolves the category of the atom and builds the term with the given sign.
    ///
    /// Atoms without an explicit category take the category of their label in the vocabulary.
    pub fn lower(&self, sign: Sign) -> Result<Term, Error> {
        let category = match &self.category {
            Some(category) => Category::new(category.clone()),
            None => vocab::category_of(&self.label).ok_or_else(|| {
                Error::new(vec![self.span.clone()], UnknownLabel { label: self.label.clone() })
            })?,
        };
        Ok(Term::new(category, self.label.clone(), sign))
    }

    /// Builds the operand term with the given sign.
    ///
    /// Operands are restricted to the vocabulary labels, and always take the vocabulary category.
    pub fn lower_operand(&self, sign: Sign) -> Result<Term, Error> {
        if self.category.is_some() {
            return Err(Error::new(
                vec![self.span.clone()],
                ExplicitCategory { label: self.label.clone() },
            ));
        }
        self.lower(sign)
    }
}

/// A signed sum of atoms, such as `c - a`. Written in parentheses when used as a factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The signed atoms of the group.
    pub terms: Vec<(Sign, Atom)>,

    /// The region of the source code that this group was parsed from.
    pub span: Range<usize>,
}

impl Group {
    /// Lowers the group into a molecule, reporting every unknown label.
    pub fn lower(&self) -> Result<Molecule, Vec<Error>> {
        collect_results(self.terms.iter().map(|(sign, atom)| atom.lower(*sign)))
    }

    /// Lowers the group into an operand of a product. See [`Atom::lower_operand`].
    pub fn lower_operand(&self) -> Result<Molecule, Vec<Error>> {
        collect_results(self.terms.iter().map(|(sign, atom)| atom.lower_operand(*sign)))
    }
}

/// A chain of factors multiplied together, such as `(a + d) * (e + h)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// The factors of the chain.
    pub factors: Vec<Group>,

    /// The region of the source code that this chain was parsed from.
    pub span: Range<usize>,
}

impl Chain {
    /// Lowers the chain into a product.
    pub fn lower(&self) -> Result<Product, Vec<Error>> {
        let mut factors = Vec::with_capacity(self.factors.len());
        let mut errors = Vec::new();
        for factor in &self.factors {
            match factor.lower_operand() {
                Ok(molecule) => factors.push(molecule),
                Err(errs) => errors.extend(errs),
            }
        }

        if errors.is_empty() {
            Ok(Product::from_factors(factors))
        } else {
            Err(errors)
        }
    }
}

/// A signed sum of products, such as `(a + d) * (e + h) - (a + b) * h`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    /// The signed products of the sum.
    pub chains: Vec<(Sign, Chain)>,

    /// The region of the source code that this sum was parsed from.
    pub span: Range<usize>,
}

impl Sum {
    /// Lowers the sum into signed products. Each product is named after the source text it was
    /// parsed from.
    pub fn lower(&self, source: &str) -> Result<Vec<SignedProduct>, Vec<Error>> {
        let mut products = Vec::with_capacity(self.chains.len());
        let mut errors = Vec::new();
        for (sign, chain) in &self.chains {
            match chain.lower() {
                Ok(product) => {
                    let name = source.get(chain.span.clone()).unwrap_or_default().trim();
                    products.push(SignedProduct::new(name, *sign, product));
                },
                Err(errs) => errors.extend(errs),
            }
        }

        if errors.is_empty() {
            Ok(products)
        } else {
            Err(errors)
        }
    }
}

/// Collects every success, or every error if there is at least one.
fn collect_results<T, C: FromIterator<T>>(
    results: impl Iterator<Item = Result<T, Error>>,
) -> Result<C, Vec<Error>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(values.into_iter().collect())
    } else {
        Err(errors)
    }
}

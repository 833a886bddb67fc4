//! The term engine behind `lastik`.
//!
//! A [`Term`] is a signed, labeled atom tagged with a [`Category`]. Two collections of terms
//! ([`Molecule`]s) are multiplied with [`collide`], which pairs every term of the left molecule
//! with every term of the right one and classifies each cross term through a [`Classification`]
//! table. Summing several such products gives a "soup" of terms, which [`cancel`] reduces by
//! greedily removing opposite-signed duplicates.
//!
//! ```
//! use lastik_terms::{cancel, collide, negate_signs, molecule::Molecule, term::{Sign, Term}, classify::SINGLE_1};
//!
//! let a = Molecule::from(vec![Term::new(SINGLE_1, "a", Sign::Positive)]);
//! let eh = Molecule::from(vec![
//!     Term::new(SINGLE_1, "e", Sign::Positive),
//!     Term::new(SINGLE_1, "h", Sign::Negative),
//! ]);
//!
//! let soup = collide(&a, &eh).concat(&negate_signs(&collide(&a, &eh)));
//! let reduced = cancel(&soup);
//! assert!(reduced.remaining.is_empty());
//! assert_eq!(reduced.cancelled.len(), 4);
//! ```

pub mod cancel;
pub mod classify;
pub mod collide;
pub mod molecule;
pub mod parser;
pub mod product;
pub mod term;
pub mod tokenizer;
pub mod vocab;

pub use cancel::{cancel, Cancellation};
pub use classify::Classification;
pub use collide::{collide, collide_with, negate_signs};
pub use molecule::Molecule;
pub use product::{Product, SignedProduct};
pub use term::{Category, Sign, Term};

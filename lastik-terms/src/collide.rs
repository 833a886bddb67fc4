use crate::{classify::{Classification, STRASSEN}, molecule::Molecule, term::Term};

/// Collides two molecules, classifying cross terms with the [`STRASSEN`] table.
///
/// See [`collide_with`].
pub fn collide(left: &[Term], right: &[Term]) -> Molecule {
    collide_with(&STRASSEN, left, right)
}

/// Computes the cross product of two molecules.
///
/// Every term of `left` is paired with every term of `right`, with `left` in the outer loop. Each
/// pair produces exactly one term:
///
/// - its label is the concatenation of the two labels (`a` and `e` give `ae`),
/// - its sign is positive if the two signs are equal, negative otherwise,
/// - its category is the table's classification of the two input categories, or the table's
///   fallback category if the pair has no rule.
///
/// The output always holds `left.len() * right.len()` terms.
pub fn collide_with(table: &Classification, left: &[Term], right: &[Term]) -> Molecule {
    left.iter()
        .flat_map(|l| right.iter().map(move |r| (l, r)))
        .map(|(l, r)| Term {
            category: table.classify(&l.category, &r.category).clone(),
            label: format!("{}{}", l.label, r.label),
            sign: l.sign * r.sign,
        })
        .collect()
}

/// Returns a copy of the molecule with every sign flipped.
///
/// Subtracting a product from a sum is modeled as adding its negated expansion.
pub fn negate_signs(molecule: &[Term]) -> Molecule {
    molecule.iter().map(Term::negated).collect()
}

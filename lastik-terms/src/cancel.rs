use crate::{molecule::Molecule, term::Term};
use std::collections::VecDeque;

/// The result of [`cancel`]ing a soup of terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cancellation {
    /// The terms that found no partner, in soup order.
    pub remaining: Molecule,

    /// The terms that were removed, as consecutive pairs. The first term of each pair is the one
    /// that was being processed, the second is the partner found for it.
    pub cancelled: Molecule,
}

impl Cancellation {
    /// Returns an iterator over the cancelled pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.cancelled
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
    }
}

/// Reduces a soup of terms by removing pairs of the same term with opposite signs.
///
/// The terms are processed front to back. For each term, the **unprocessed** terms after it are
/// searched for the first one with the same category and label and the opposite sign. If one is
/// found, both are moved to [`Cancellation::cancelled`]; otherwise the term is moved to
/// [`Cancellation::remaining`].
///
/// The pairing is greedy and never backtracks: a term kept in `remaining` is not looked at again,
/// so the result depends on the order of the soup. For `[+a, -b, -a]` the `+a` takes the `-a`,
/// and `-b` remains.
pub fn cancel(soup: &[Term]) -> Cancellation {
    let mut work = soup.iter().cloned().collect::<VecDeque<_>>();
    let mut result = Cancellation::default();

    while let Some(term) = work.pop_front() {
        let partner = work.iter()
            .position(|other| term.cancels(other))
            .and_then(|i| work.remove(i));

        match partner {
            Some(partner) => {
                result.cancelled.push(term);
                result.cancelled.push(partner);
            },
            None => result.remaining.push(term),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::{classify::*, collide::{collide, negate_signs}, term::{Category, Sign}};
    use pretty_assertions::assert_eq;
    use super::*;

    fn k(label: &str, sign: Sign) -> Term {
        Term::new(Category::new("K"), label, sign)
    }

    /// Checks the invariants every cancellation must hold.
    fn check_invariants(soup: &[Term], result: &Cancellation) {
        assert_eq!(result.remaining.len() + result.cancelled.len(), soup.len());
        assert_eq!(result.cancelled.len() % 2, 0);
        for (first, second) in result.pairs() {
            assert_eq!(first.category, second.category);
            assert_eq!(first.label, second.label);
            assert_ne!(first.sign, second.sign);
        }
    }

    #[test]
    fn first_match_wins() {
        use Sign::*;
        let soup = [k("a", Positive), k("b", Negative), k("a", Negative)];
        let result = cancel(&soup);

        check_invariants(&soup, &result);
        assert_eq!(result.remaining, Molecule::from(vec![k("b", Negative)]));
        assert_eq!(result.cancelled, Molecule::from(vec![k("a", Positive), k("a", Negative)]));
    }

    #[test]
    fn partner_is_first_later_opposite() {
        use Sign::*;
        let soup = [k("a", Positive), k("a", Negative), k("a", Negative), k("a", Positive)];
        let result = cancel(&soup);

        check_invariants(&soup, &result);
        assert!(result.remaining.is_empty());
        assert_eq!(result.cancelled.into_terms(), soup.to_vec());
    }

    #[test]
    fn unmatched_duplicate_remains() {
        use Sign::*;
        // only one `+a` can take the single `-a`
        let soup = [k("a", Positive), k("a", Positive), k("a", Negative)];
        let result = cancel(&soup);

        check_invariants(&soup, &result);
        assert_eq!(result.cancelled, Molecule::from(vec![k("a", Positive), k("a", Negative)]));
        assert_eq!(result.remaining, Molecule::from(vec![k("a", Positive)]));
    }

    #[test]
    fn category_must_match() {
        let soup = [
            Term::new(DOUBLE_1, "ae", Sign::Positive),
            Term::new(DOUBLE_3, "ae", Sign::Negative),
        ];
        let result = cancel(&soup);

        check_invariants(&soup, &result);
        assert_eq!(result.remaining.len(), 2);
    }

    #[test]
    fn empty_soup() {
        assert_eq!(cancel(&[]), Cancellation::default());
    }

    #[test]
    fn product_minus_itself_vanishes() {
        use Sign::*;
        let left = Molecule::from(vec![
            Term::new(SINGLE_3, "c", Positive),
            Term::new(SINGLE_1, "a", Negative),
        ]);
        let right = Molecule::from(vec![
            Term::new(SINGLE_1, "e", Positive),
            Term::new(SINGLE_2, "f", Positive),
        ]);
        let product = collide(&left, &right);
        let soup = product.concat(&negate_signs(&product));
        let result = cancel(&soup);

        check_invariants(&soup, &result);
        assert!(result.remaining.is_empty());
        assert_eq!(result.cancelled.len(), 8);
    }

    #[test]
    fn invariants_hold_for_many_soups() {
        use Sign::*;
        let labels = ["a", "b", "c"];
        // every soup of length 5 over 3 labels and 2 signs, enumerated by a counter in base 6
        for mut n in 0..6usize.pow(5) {
            let mut soup = Vec::new();
            for _ in 0..5 {
                let digit = n % 6;
                n /= 6;
                let sign = if digit % 2 == 0 { Positive } else { Negative };
                soup.push(k(labels[digit / 2], sign));
            }
            check_invariants(&soup, &cancel(&soup));
        }
    }
}

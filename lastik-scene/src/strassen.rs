//! The literal data of Strassen's decomposition.
//!
//! ```text
//! M1 = (a + d) * (e + h)        P = M1 + M4 - M5 + M7
//! M2 = (c + d) * e              Q = M3 + M5
//! M3 = a * (f - h)              R = M2 + M4
//! M4 = d * (g - e)              S = M1 - M2 + M3 + M6
//! M5 = (a + b) * h
//! M6 = (c - a) * (e + f)
//! M7 = (b - d) * (g + h)
//! ```

use lastik_terms::{
    classify::{SINGLE_1, SINGLE_2, SINGLE_3},
    Category,
    Product,
    Sign,
    SignedProduct,
    Term,
};
use crate::scene::{Layout, Scene};

/// The names of the four scenes, in the order they are usually shown.
pub const SCENE_NAMES: [&str; 4] = ["Q", "P", "R", "S"];

fn pos(category: Category, label: &'static str) -> Term {
    Term::new(category, label, Sign::Positive)
}

fn neg(category: Category, label: &'static str) -> Term {
    Term::new(category, label, Sign::Negative)
}

/// Returns the operands of the product `Mn`, for `n` from 1 to 7.
pub fn product(n: usize) -> Option<Product> {
    let product = match n {
        // (a + d) * (e + h)
        1 => Product::new(
            vec![pos(SINGLE_1, "a"), pos(SINGLE_1, "d")],
            vec![pos(SINGLE_1, "e"), pos(SINGLE_1, "h")],
        ),

        // (c + d) * e
        2 => Product::new(
            vec![pos(SINGLE_3, "c"), pos(SINGLE_1, "d")],
            vec![pos(SINGLE_1, "e")],
        ),

        // a * (f - h)
        3 => Product::new(
            vec![pos(SINGLE_1, "a")],
            vec![pos(SINGLE_2, "f"), neg(SINGLE_1, "h")],
        ),

        // d * (g - e)
        4 => Product::new(
            vec![pos(SINGLE_1, "d")],
            vec![pos(SINGLE_3, "g"), neg(SINGLE_1, "e")],
        ),

        // (a + b) * h
        5 => Product::new(
            vec![pos(SINGLE_1, "a"), pos(SINGLE_2, "b")],
            vec![pos(SINGLE_1, "h")],
        ),

        // (c - a) * (e + f)
        6 => Product::new(
            vec![pos(SINGLE_3, "c"), neg(SINGLE_1, "a")],
            vec![pos(SINGLE_1, "e"), pos(SINGLE_2, "f")],
        ),

        // (b - d) * (g + h)
        7 => Product::new(
            vec![pos(SINGLE_2, "b"), neg(SINGLE_1, "d")],
            vec![pos(SINGLE_3, "g"), pos(SINGLE_1, "h")],
        ),

        _ => return None,
    };
    Some(product)
}

/// Builds a scene from `(sign, n)` pairs naming the products `Mn`.
fn build(name: &str, terms: &[(Sign, usize)], layout: Layout) -> Option<Scene> {
    let products = terms.iter()
        .map(|&(sign, n)| Some(SignedProduct::new(format!("M{}", n), sign, product(n)?)))
        .collect::<Option<Vec<_>>>()?;
    Some(Scene::new(name, products, layout))
}

/// Returns the scene for one of the four output blocks `P`, `Q`, `R` or `S`.
///
/// The name is case-insensitive. `Q` is laid out with one panel per product, the others with one
/// panel for the whole soup.
pub fn scene(name: &str) -> Option<Scene> {
    use Sign::*;
    match name.to_ascii_uppercase().as_str() {
        "P" => build("P", &[(Positive, 1), (Positive, 4), (Negative, 5), (Positive, 7)], Layout::Soup),
        "Q" => build("Q", &[(Positive, 3), (Positive, 5)], Layout::PerProduct),
        "R" => build("R", &[(Positive, 2), (Positive, 4)], Layout::Soup),
        "S" => build("S", &[(Positive, 1), (Negative, 2), (Positive, 3), (Positive, 6)], Layout::Soup),
        _ => None,
    }
}

/// Returns the four scenes, in the order of [`SCENE_NAMES`].
pub fn scenes() -> Vec<Scene> {
    SCENE_NAMES.iter().filter_map(|name| scene(name)).collect()
}

#[cfg(test)]
mod tests {
    use lastik_terms::{classify::{DOUBLE_1, DOUBLE_3}, parser::parse_sum, Molecule};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Returns the remainder of the named scene as `(sign, label)` pairs.
    fn remainder(name: &str) -> Vec<(char, String)> {
        scene(name).unwrap()
            .evaluate().unwrap()
            .cancellation.remaining
            .iter()
            .map(|term| (term.sign.symbol(), term.label.clone()))
            .collect()
    }

    fn signed(pairs: &[(char, &str)]) -> Vec<(char, String)> {
        pairs.iter().map(|&(s, l)| (s, l.to_string())).collect()
    }

    #[test]
    fn q_reduces_to_af_plus_bh() {
        let evaluation = scene("Q").unwrap().evaluate().unwrap();

        assert_eq!(evaluation.soup, Molecule::from(vec![
            Term::new(DOUBLE_1, "af", Sign::Positive),
            Term::new(DOUBLE_3, "ah", Sign::Negative),
            Term::new(DOUBLE_3, "ah", Sign::Positive),
            Term::new(DOUBLE_1, "bh", Sign::Positive),
        ]));
        assert_eq!(evaluation.cancellation.cancelled, Molecule::from(vec![
            Term::new(DOUBLE_3, "ah", Sign::Negative),
            Term::new(DOUBLE_3, "ah", Sign::Positive),
        ]));
        assert_eq!(evaluation.cancellation.remaining, Molecule::from(vec![
            Term::new(DOUBLE_1, "af", Sign::Positive),
            Term::new(DOUBLE_1, "bh", Sign::Positive),
        ]));
    }

    #[test]
    fn p_reduces_to_ae_plus_bg() {
        let evaluation = scene("P").unwrap().evaluate().unwrap();
        assert_eq!(evaluation.soup.len(), 12);
        assert_eq!(evaluation.cancellation.cancelled.len(), 10);
        assert_eq!(remainder("P"), signed(&[('+', "ae"), ('+', "bg")]));
    }

    #[test]
    fn r_reduces_to_ce_plus_dg() {
        assert_eq!(remainder("R"), signed(&[('+', "ce"), ('+', "dg")]));
    }

    #[test]
    fn s_reduces_to_dh_plus_cf() {
        let evaluation = scene("s").unwrap().evaluate().unwrap();
        assert_eq!(evaluation.soup.len(), 12);
        assert_eq!(remainder("S"), signed(&[('+', "dh"), ('+', "cf")]));
    }

    #[test]
    fn titles() {
        let titles = scenes().iter().map(Scene::title).collect::<Vec<_>>();
        assert_eq!(titles, [
            "Analysis scene: Q = M3 + M5",
            "Analysis scene: P = M1 + M4 - M5 + M7",
            "Analysis scene: R = M2 + M4",
            "Analysis scene: S = M1 - M2 + M3 + M6",
        ]);
    }

    #[test]
    fn unknown_names() {
        assert!(scene("T").is_none());
        assert!(product(0).is_none());
        assert!(product(8).is_none());
    }

    #[test]
    fn products_match_their_notation() {
        let notation = [
            "(a + d) * (e + h)",
            "(c + d) * e",
            "a * (f - h)",
            "d * (g - e)",
            "(a + b) * h",
            "(c - a) * (e + f)",
            "(b - d) * (g + h)",
        ];
        for (i, source) in notation.iter().enumerate() {
            let parsed = parse_sum(source).unwrap();
            assert_eq!(parsed[0].product, product(i + 1).unwrap(), "M{}", i + 1);
        }
    }
}

use lastik_terms::{
    cancel,
    classify::{Classification, STRASSEN},
    Cancellation,
    Molecule,
    Sign,
    SignedProduct,
};
use tracing::debug;
use crate::{
    error::{InvalidScene, PresentError},
    render::{Figure, Panel, Renderer, Tint},
};

/// Which term collections a scene shows before its cancelled terms and result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One panel with the whole soup.
    Soup,

    /// One panel per product expansion.
    PerProduct,
}

/// A named, signed sum of products, such as `P = M1 + M4 - M5 + M7`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// The name of the sum, such as `P`.
    pub name: String,

    /// The products of the sum, in order.
    pub products: Vec<SignedProduct>,

    /// How the scene is laid out when rendered.
    pub layout: Layout,
}

/// The term collections computed from a [`Scene`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// The expansion of each product, already negated if the product is subtracted.
    pub expansions: Vec<Molecule>,

    /// The concatenation of every expansion.
    pub soup: Molecule,

    /// The soup after cancellation.
    pub cancellation: Cancellation,
}

impl Scene {
    /// Creates a new scene.
    pub fn new(name: impl Into<String>, products: Vec<SignedProduct>, layout: Layout) -> Scene {
        Scene {
            name: name.into(),
            products,
            layout,
        }
    }

    /// Returns the right-hand side of the scene's equation, such as `M1 + M4 - M5 + M7`.
    pub fn formula(&self) -> String {
        let mut formula = String::new();
        for (i, product) in self.products.iter().enumerate() {
            match (i, product.sign) {
                (0, Sign::Positive) => (),
                (0, Sign::Negative) => formula.push('-'),
                (_, sign) => {
                    formula.push(' ');
                    formula.push(sign.symbol());
                    formula.push(' ');
                },
            }
            formula.push_str(&product.name);
        }
        formula
    }

    /// Returns the title of the scene, such as `Analysis scene: Q = M3 + M5`.
    pub fn title(&self) -> String {
        format!("Analysis scene: {} = {}", self.name, self.formula())
    }

    /// Checks that the scene has at least one product, that every product has at least one
    /// operand with at least one term each, and that every term has a label and a category.
    pub fn validate(&self) -> Result<(), InvalidScene> {
        if self.products.is_empty() {
            return Err(InvalidScene::NoProducts { scene: self.name.clone() });
        }

        for product in &self.products {
            if product.product.factors.is_empty() {
                return Err(InvalidScene::NoOperands { product: product.name.clone() });
            }

            for (operand, factor) in product.product.factors.iter().enumerate() {
                if factor.is_empty() {
                    return Err(InvalidScene::EmptyOperand {
                        product: product.name.clone(),
                        operand,
                    });
                }

                let malformed = factor.iter()
                    .position(|term| term.label.is_empty() || term.category.as_str().is_empty());
                if let Some(term) = malformed {
                    return Err(InvalidScene::MalformedTerm {
                        product: product.name.clone(),
                        operand,
                        term,
                    });
                }
            }
        }

        Ok(())
    }

    /// Evaluates the scene with the [`STRASSEN`] classification table.
    pub fn evaluate(&self) -> Result<Evaluation, InvalidScene> {
        self.evaluate_with(&STRASSEN)
    }

    /// Validates and evaluates the scene: expands every product, concatenates the expansions
    /// into the soup and cancels it.
    pub fn evaluate_with(&self, table: &Classification) -> Result<Evaluation, InvalidScene> {
        self.validate()?;

        let expansions = self.products.iter()
            .map(|product| product.expand_with(table))
            .collect::<Vec<_>>();
        let soup = expansions.iter()
            .flat_map(|expansion| expansion.iter().cloned())
            .collect::<Molecule>();
        let cancellation = cancel(&soup);

        debug!(
            scene = %self.name,
            soup = soup.len(),
            cancelled = cancellation.cancelled.len(),
            remaining = cancellation.remaining.len(),
            "evaluated scene",
        );

        Ok(Evaluation { expansions, soup, cancellation })
    }

    /// Builds the figure showing the given evaluation of this scene.
    pub fn figure(&self, evaluation: &Evaluation) -> Figure {
        let mut panels = match self.layout {
            Layout::Soup => vec![Panel::new("Total remaining soup", evaluation.soup.clone(), Tint::Soup)],
            Layout::PerProduct => self.products.iter()
                .zip(&evaluation.expansions)
                .map(|(product, expansion)| {
                    Panel::new(format!("Remainings From {}", product.name), expansion.clone(), Tint::Soup)
                })
                .collect(),
        };
        panels.push(Panel::new("CANCELED", evaluation.cancellation.cancelled.clone(), Tint::Cancelled));
        panels.push(Panel::new(
            format!("Final result: {}", self.name),
            evaluation.cancellation.remaining.clone(),
            Tint::Result,
        ));

        Figure {
            title: self.title(),
            name: self.name.clone(),
            panels,
        }
    }
}

/// Evaluates the scene with the [`STRASSEN`] table and hands its figure to the renderer.
pub fn present<R: Renderer>(
    scene: &Scene,
    renderer: &mut R,
) -> Result<Evaluation, PresentError<R::Error>> {
    present_with(scene, &STRASSEN, renderer)
}

/// Evaluates the scene with the given table and hands its figure to the renderer.
///
/// Returns the evaluation so the caller can report on it.
pub fn present_with<R: Renderer>(
    scene: &Scene,
    table: &Classification,
    renderer: &mut R,
) -> Result<Evaluation, PresentError<R::Error>> {
    let evaluation = scene.evaluate_with(table)?;
    renderer.render(&scene.figure(&evaluation)).map_err(PresentError::Render)?;
    Ok(evaluation)
}

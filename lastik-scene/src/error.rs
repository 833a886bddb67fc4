use std::{error::Error, fmt};

/// A scene whose input data is not well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidScene {
    /// The scene has no products.
    NoProducts {
        /// The name of the scene.
        scene: String,
    },

    /// A product has no operands.
    NoOperands {
        /// The name of the product.
        product: String,
    },

    /// A product has an operand with no terms.
    EmptyOperand {
        /// The name of the product.
        product: String,

        /// The index of the empty operand within the product.
        operand: usize,
    },

    /// A term of an operand has an empty label or category.
    MalformedTerm {
        /// The name of the product.
        product: String,

        /// The index of the operand within the product.
        operand: usize,

        /// The index of the term within the operand.
        term: usize,
    },
}

impl fmt::Display for InvalidScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProducts { scene } => write!(f, "scene `{}` has no products", scene),
            Self::NoOperands { product } => write!(f, "product `{}` has no operands", product),
            Self::EmptyOperand { product, operand } => {
                write!(f, "operand #{} of product `{}` has no terms", operand + 1, product)
            },
            Self::MalformedTerm { product, operand, term } => write!(
                f,
                "term #{} of operand #{} of product `{}` needs a label and a category",
                term + 1,
                operand + 1,
                product,
            ),
        }
    }
}

impl Error for InvalidScene {}

/// Errors that can occur while presenting a scene to a renderer.
#[derive(Debug)]
pub enum PresentError<E> {
    /// The scene failed validation, and nothing was rendered.
    Invalid(InvalidScene),

    /// The renderer failed.
    Render(E),
}

impl<E: fmt::Display> fmt::Display for PresentError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid scene: {}", err),
            Self::Render(err) => write!(f, "could not render scene: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for PresentError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl<E> From<InvalidScene> for PresentError<E> {
    fn from(err: InvalidScene) -> Self {
        Self::Invalid(err)
    }
}

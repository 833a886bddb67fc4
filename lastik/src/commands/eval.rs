use lastik_graph::{figure::draw_figure, write_png, RenderOptions};
use lastik_scene::{Evaluation, Layout, Scene};
use lastik_terms::parser::parse_sum;
use std::path::Path;
use tracing::warn;
use crate::error::Error;
use super::{for_each_line, summary};

/// The name given to scenes built from term notation.
const SCENE_NAME: &str = "E";

/// Parses the given expression into a scene and evaluates it.
pub fn evaluate(input: &str) -> Result<(Scene, Evaluation), Error> {
    let products = parse_sum(input)?;
    let scene = Scene::new(SCENE_NAME, products, Layout::Soup);
    let evaluation = scene.evaluate()?;
    Ok((scene, evaluation))
}

/// Evaluates the given expression and prints its summary, optionally drawing it to `render`.
fn read_eval(input: &str, render: Option<&Path>, options: &RenderOptions) -> Result<(), Error> {
    let (scene, evaluation) = evaluate(input)?;
    print!("{}", summary(&scene, &evaluation));

    if let Some(path) = render {
        let mut misses = Vec::new();
        let surface = draw_figure(&scene.figure(&evaluation), options, &mut misses)
            .map_err(lastik_graph::Error::from)?;
        write_png(&surface, path)?;
        println!("wrote {}", path.display());

        if !misses.is_empty() {
            warn!(categories = ?misses, "some categories have no shape and were drawn as placeholders");
        }
    }

    Ok(())
}

/// Evaluates the given expression, or every line of input if there is none.
///
/// Errors evaluating a single expression are returned. Errors in line-by-line mode are reported
/// as they happen.
pub fn run(
    expr: Option<&str>,
    interactive: bool,
    render: Option<&Path>,
    options: RenderOptions,
) -> Result<(), Error> {
    if let Some(expr) = expr {
        return read_eval(expr, render, &options);
    }

    for_each_line(interactive, "> ", |input| {
        if let Err(err) = read_eval(input, render, &options) {
            err.report_to_stderr(input);
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use lastik_terms::parser::error::UnknownLabel;
    use super::*;

    #[test]
    fn evaluate_q() {
        let (scene, evaluation) = evaluate("a * (f - h) + (a + b) * h").unwrap();
        assert_eq!(scene.formula(), "a * (f - h) + (a + b) * h");
        assert_eq!(evaluation.cancellation.remaining.to_string(), "af[double_1] + bh[double_1]");
    }

    #[test]
    fn parse_errors_are_kept() {
        let Err(Error::ParseError(errs)) = evaluate("a * z") else {
            panic!("expected a parse error");
        };
        assert!(errs[0].is::<UnknownLabel>());
    }
}

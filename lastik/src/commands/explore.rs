use lastik_graph::{parse_curve, write_png, Curve, Explorer, RenderOptions};
use std::{fs, path::{Path, PathBuf}};
use tracing::info;
use crate::error::Error;
use super::for_each_line;

/// Draws the explorer for the given curve to `path`.
fn draw(curve: Curve, path: &Path, options: RenderOptions) -> Result<(), Error> {
    let explorer = Explorer { curve, options };
    let surface = explorer.draw().map_err(lastik_graph::Error::from)?;
    write_png(&surface, path)?;

    if curve.is_empty() {
        info!("t_start >= t_end, nothing to draw");
    }
    println!("{}  ->  {}", explorer.title(), path.display());
    Ok(())
}

/// Reads curve parameters line by line, redrawing `<out>/explore.png` after each line.
///
/// The default curve is drawn before the first line is read.
pub fn run(interactive: bool, out: &Path, options: RenderOptions) -> Result<(), Error> {
    fs::create_dir_all(out)
        .map_err(|source| lastik_graph::Error::Io { path: out.to_path_buf(), source })?;
    let path: PathBuf = out.join("explore.png");

    let mut curve = Curve::default();
    draw(curve, &path, options)?;

    for_each_line(interactive, "a b phase_pi [t_start_pi t_end_pi]> ", |input| {
        let result = parse_curve(input, curve)
            .map_err(Error::from)
            .and_then(|next| {
                draw(next, &path, options)?;
                Ok(next)
            });
        match result {
            Ok(next) => curve = next,
            Err(err) => err.report_to_stderr(input),
        }
    });

    Ok(())
}

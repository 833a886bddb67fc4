use cairo::ImageSurface;
use lastik_scene::{Figure, Renderer};
use std::{fs::{self, File}, path::{Path, PathBuf}};
use tracing::{debug, info};
use super::{error::Error, figure::draw_figure, opts::RenderOptions};

/// Writes the surface to the given path as a PNG image.
pub fn write_png(surface: &ImageSurface, path: &Path) -> Result<(), Error> {
    let mut file = File::create(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    surface.write_to_png(&mut file)
        .map_err(|err| Error::writing(path, err))
}

/// A [`Renderer`] that draws every figure to `<out_dir>/<name>.png`.
#[derive(Clone, Debug)]
pub struct PngRenderer {
    /// The directory the images are written to. It is created on the first render if needed.
    pub out_dir: PathBuf,

    /// The options used to draw each figure.
    pub options: RenderOptions,

    /// The categories that had no shape in the catalog, in the order they were first found.
    pub misses: Vec<String>,

    /// The paths of the images written so far.
    pub written: Vec<PathBuf>,
}

impl PngRenderer {
    /// Creates a renderer writing to the given directory with the default options.
    pub fn new(out_dir: impl Into<PathBuf>) -> PngRenderer {
        PngRenderer::with_opts(out_dir, RenderOptions::default())
    }

    /// Creates a renderer writing to the given directory with the given options.
    pub fn with_opts(out_dir: impl Into<PathBuf>, options: RenderOptions) -> PngRenderer {
        PngRenderer {
            out_dir: out_dir.into(),
            options,
            misses: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Returns the path the given figure is written to.
    pub fn path_for(&self, figure: &Figure) -> PathBuf {
        self.out_dir.join(format!("{}.png", figure.name))
    }
}

impl Renderer for PngRenderer {
    type Error = Error;

    fn render(&mut self, figure: &Figure) -> Result<(), Error> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|source| Error::Io { path: self.out_dir.clone(), source })?;

        debug!(figure = %figure.name, panels = figure.panels.len(), "drawing figure");
        let surface = draw_figure(figure, &self.options, &mut self.misses)?;

        let path = self.path_for(figure);
        write_png(&surface, &path)?;
        info!(path = %path.display(), "wrote figure");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lastik_scene::{Panel, Tint};
    use lastik_terms::{Molecule, Sign, Term};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn figure_file_names() {
        let renderer = PngRenderer::new("out");
        let figure = Figure {
            title: "Analysis scene: Q = M3 + M5".to_string(),
            name: "Q".to_string(),
            panels: Vec::new(),
        };
        assert_eq!(renderer.path_for(&figure), Path::new("out").join("Q.png"));
    }

    #[test]
    fn misses_are_recorded_once() {
        let options = RenderOptions::default().figure_size(400, 400).samples(16);
        let figure = Figure {
            title: "misses".to_string(),
            name: "misses".to_string(),
            panels: vec![Panel::new("soup", Molecule::from(vec![
                Term::new("double_1", "af", Sign::Positive),
                Term::new("quadruple_9", "abcd", Sign::Positive),
                Term::new("quadruple_9", "efgh", Sign::Negative),
            ]), Tint::Soup)],
        };

        let mut misses = Vec::new();
        draw_figure(&figure, &options, &mut misses).unwrap();
        assert_eq!(misses, ["quadruple_9"]);
    }
}
